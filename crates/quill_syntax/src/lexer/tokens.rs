//! Token types for the Quill lexer.
//!
//! Every token carries a [`TokenKind`] (a sum type whose literal/identifier variants hold their
//! payload), the 1-based source line used in diagnostics, and the byte [`Span`] it was scanned from.
//!
//! ## Notes
//! - The parser never looks at payloads; it matches on [`Category`], the payload-free tag of a kind.
//! - Use `crate::token_helpers` for category lookups and human-readable descriptions.

use std::fmt;

// ============================================================================
// SPANS
// ============================================================================

/// Source location span (byte offsets).
///
/// Tokens built by hand rather than by [`crate::lexer::Lexer`] use `Span::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Closed set of lexical classes the recognizer matches on.
///
/// The uppercase spellings returned by [`Category::name`] are the ones used in token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    // ========== Keywords ==========
    Var,
    Function,
    If,
    Else,
    While,
    End,
    Return,
    TypeInt,
    TypeReal,
    TypeStr,
    And,
    Or,
    Not,

    // ========== Punctuation ==========
    Colon,
    Semicolon,
    LPar,
    RPar,
    Comma,

    // ========== Operators ==========
    Assign,
    Less,
    Equal,
    Add,
    Sub,
    Mul,
    Div,

    // ========== Identifiers and Literals ==========
    Id,
    Int,
    Real,
    String,

    // ========== Special ==========
    Finish,
}

impl Category {
    /// Uppercase category name (`VAR`, `ID`, `TYPE_INT`, ..., `FINISH`).
    pub fn name(self) -> &'static str {
        match self {
            Category::Var => "VAR",
            Category::Function => "FUNCTION",
            Category::If => "IF",
            Category::Else => "ELSE",
            Category::While => "WHILE",
            Category::End => "END",
            Category::Return => "RETURN",
            Category::TypeInt => "TYPE_INT",
            Category::TypeReal => "TYPE_REAL",
            Category::TypeStr => "TYPE_STR",
            Category::And => "AND",
            Category::Or => "OR",
            Category::Not => "NOT",
            Category::Colon => "COLON",
            Category::Semicolon => "SEMICOLON",
            Category::LPar => "LPAR",
            Category::RPar => "RPAR",
            Category::Comma => "COMMA",
            Category::Assign => "ASSIGN",
            Category::Less => "LESS",
            Category::Equal => "EQUAL",
            Category::Add => "ADD",
            Category::Sub => "SUB",
            Category::Mul => "MUL",
            Category::Div => "DIV",
            Category::Id => "ID",
            Category::Int => "INT",
            Category::Real => "REAL",
            Category::String => "STRING",
            Category::Finish => "FINISH",
        }
    }

    /// Source spelling for fixed-text categories; `None` for identifiers, literals and `FINISH`.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            Category::Var => "var",
            Category::Function => "function",
            Category::If => "if",
            Category::Else => "else",
            Category::While => "while",
            Category::End => "end",
            Category::Return => "return",
            Category::TypeInt => "int",
            Category::TypeReal => "real",
            Category::TypeStr => "str",
            Category::And => "and",
            Category::Or => "or",
            Category::Not => "not",
            Category::Colon => ":",
            Category::Semicolon => ";",
            Category::LPar => "(",
            Category::RPar => ")",
            Category::Comma => ",",
            Category::Assign => "=",
            Category::Less => "<",
            Category::Equal => "==",
            Category::Add => "+",
            Category::Sub => "-",
            Category::Mul => "*",
            Category::Div => "/",
            Category::Id | Category::Int | Category::Real | Category::String | Category::Finish => {
                return None;
            }
        };
        Some(text)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keywords ==========
    Var,
    Function,
    If,
    Else,
    While,
    End,
    Return,
    TypeInt,
    TypeReal,
    TypeStr,
    And,
    Or,
    Not,

    // ========== Punctuation ==========
    Colon,
    Semicolon,
    LPar,
    RPar,
    Comma,

    // ========== Operators ==========
    Assign,
    Less,
    Equal,
    Add,
    Sub,
    Mul,
    Div,

    // ========== Identifiers and Literals ==========
    Id(String),
    Int(i64),
    Real(f64),
    String(String),

    // ========== Special ==========
    Finish, // end of input
}

/// A token with its kind, source line and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub span: Span,
}

impl Token {
    /// Construct a token without source offsets.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self {
            kind,
            line,
            span: Span::default(),
        }
    }

    /// Construct a token scanned from `span`.
    pub fn spanned(kind: TokenKind, line: u32, span: Span) -> Self {
        Self { kind, line, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.category().name();
        match &self.kind {
            TokenKind::Id(text) | TokenKind::String(text) => write!(f, "{name}:{text}"),
            TokenKind::Int(value) => write!(f, "{name}:{value}"),
            TokenKind::Real(value) => write!(f, "{name}:{value}"),
            _ => f.write_str(name),
        }
    }
}

/// Resolve an identifier spelling to a keyword token, if reserved.
pub fn keyword(spelling: &str) -> Option<TokenKind> {
    let kind = match spelling {
        "var" => TokenKind::Var,
        "function" => TokenKind::Function,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "end" => TokenKind::End,
        "return" => TokenKind::Return,
        "int" => TokenKind::TypeInt,
        "real" => TokenKind::TypeReal,
        "str" => TokenKind::TypeStr,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        _ => return None,
    };
    Some(kind)
}

/// Render a token stream one token per line as `{line}: {token}`.
pub fn show_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|tok| format!("{}: {}", tok.line, tok))
        .collect::<Vec<_>>()
        .join("\n")
}
