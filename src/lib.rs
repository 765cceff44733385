#![forbid(unsafe_code)]
//! Quill syntax checker
//!
//! Quill is a small imperative teaching language: typed variable and function declarations,
//! `if`/`while`/`return`, and expressions with the usual precedence. This crate provides the
//! command-line checker; the lexer and recognizer live in `quill_syntax` and are re-exported here.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use quill_syntax::diagnostics;
pub use quill_syntax::lexer;
pub use quill_syntax::parser;
