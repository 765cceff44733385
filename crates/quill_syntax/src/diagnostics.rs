//! Diagnostics for the Quill frontend.
//!
//! Lexing and parsing both halt on their first problem, so a run produces at most one
//! [`SyntaxError`]. Its `Display` form is the single line `error in line N: message`; the
//! [`miette::Diagnostic`] impl adds a label on the offending token for rendering with source context.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource};

use crate::lexer::{Span, Token};

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl ErrorKind {
    fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "quill::lexical",
            ErrorKind::Syntax => "quill::syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// A fatal lexical or syntax error with the line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error in line {line}: {message}")]
pub struct SyntaxError {
    pub line: u32,
    pub message: String,
    pub kind: ErrorKind,
    pub span: Option<Span>,
    pub label: Option<String>,
    pub hint: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            kind,
            span: None,
            label: None,
            hint: None,
        }
    }

    pub fn syntax(line: u32, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, line, message)
    }

    pub fn lexical(line: u32, message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, line, message).with_span(span)
    }

    /// Syntax error located at `token`: its line, its span, and a label naming it.
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        let mut error = Self::syntax(token.line, message).with_span(token.span);
        error.label = Some(format!("found {}", token.describe()));
        error
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.hint
            .as_deref()
            .map(|hint| Box::new(hint) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let label = LabeledSpan::new_with_span(self.label.clone(), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Render `error` against `source` with a snippet of the offending line.
///
/// Falls back to the one-line `Display` form if rendering fails.
pub fn format_error(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let report =
        miette::Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    let mut out = String::new();
    match handler.render_report(&mut out, &*report) {
        Ok(()) => out,
        Err(_) => format!("{error}\n"),
    }
}
