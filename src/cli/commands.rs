//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::PathBuf;

use crate::diagnostics::{self, SyntaxError};
use crate::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (10 MiB).
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a source file, rejecting oversized inputs before loading them.
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Turn a lexer/parser error into a CLI failure carrying the rendered diagnostic.
fn syntax_failure(file_path: &str, source: &str, err: &SyntaxError) -> CliError {
    tracing::debug!(file = file_path, kind = %err.kind, line = err.line, "rejected");
    let msg = diagnostics::format_error(file_path, source, err);
    CliError::failure(msg.trim_end())
}

/// Tokenize and print the token stream.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|err| syntax_failure(file_path, &source, &err))?;

    println!("{}", lexer::show_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Check that a file is a syntactically valid Quill program.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    tracing::debug!(file = file_path, bytes = source.len(), "checking");

    let tokens = lexer::lex(&source).map_err(|err| syntax_failure(file_path, &source, &err))?;
    parser::parse(&tokens).map_err(|err| syntax_failure(file_path, &source, &err))?;

    println!("✓ {}: syntax OK", file_path);
    Ok(ExitCode::SUCCESS)
}

/// Check files in order; the first failure stops the run.
pub fn check_files(files: &[PathBuf]) -> CliResult<ExitCode> {
    for file in files {
        check_file(&file.to_string_lossy())?;
    }
    Ok(ExitCode::SUCCESS)
}
