//! Shared syntax frontend for the Quill language: tokens, lexer, recognizer, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the `quill` command-line checker and
//! by any other tool that needs to validate Quill source.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it builds no AST and does no name resolution or
//!   type checking.
//! - Both stages halt on the first problem; a failed run yields exactly one [`SyntaxError`].
//!
//! ## Examples
//! ```rust
//! use quill_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("var x : int;\n").unwrap();
//! assert!(parser::parse(&tokens).is_ok());
//!
//! let err = quill_syntax::check("var x int;\n").unwrap_err();
//! assert_eq!(err.to_string(), "error in line 1: Missing ':' in variable declaration");
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use diagnostics::SyntaxError;

/// Lex and recognize `source` in one step.
///
/// ## Errors
/// Returns the lexical or syntax error that stopped processing.
pub fn check(source: &str) -> Result<(), SyntaxError> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
