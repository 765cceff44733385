//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers keep the payload-vs-category split out of the parser: the parser asks for a
//! [`Category`], diagnostics ask for a description.

use crate::lexer::{Category, Token, TokenKind};

impl TokenKind {
    /// Return the payload-free category of this kind.
    pub fn category(&self) -> Category {
        match self {
            TokenKind::Var => Category::Var,
            TokenKind::Function => Category::Function,
            TokenKind::If => Category::If,
            TokenKind::Else => Category::Else,
            TokenKind::While => Category::While,
            TokenKind::End => Category::End,
            TokenKind::Return => Category::Return,
            TokenKind::TypeInt => Category::TypeInt,
            TokenKind::TypeReal => Category::TypeReal,
            TokenKind::TypeStr => Category::TypeStr,
            TokenKind::And => Category::And,
            TokenKind::Or => Category::Or,
            TokenKind::Not => Category::Not,
            TokenKind::Colon => Category::Colon,
            TokenKind::Semicolon => Category::Semicolon,
            TokenKind::LPar => Category::LPar,
            TokenKind::RPar => Category::RPar,
            TokenKind::Comma => Category::Comma,
            TokenKind::Assign => Category::Assign,
            TokenKind::Less => Category::Less,
            TokenKind::Equal => Category::Equal,
            TokenKind::Add => Category::Add,
            TokenKind::Sub => Category::Sub,
            TokenKind::Mul => Category::Mul,
            TokenKind::Div => Category::Div,
            TokenKind::Id(_) => Category::Id,
            TokenKind::Int(_) => Category::Int,
            TokenKind::Real(_) => Category::Real,
            TokenKind::String(_) => Category::String,
            TokenKind::Finish => Category::Finish,
        }
    }

    /// Describe the kind for a diagnostic label (e.g. ``identifier `x` ``).
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Id(name) => format!("identifier `{name}`"),
            TokenKind::Int(value) => format!("integer `{value}`"),
            TokenKind::Real(value) => format!("real `{value}`"),
            TokenKind::String(text) => format!("string \"{text}\""),
            TokenKind::Finish => "end of input".to_string(),
            other => match other.category().spelling() {
                Some(text) => format!("`{text}`"),
                None => other.category().name().to_string(),
            },
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.category()`.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Text payload of `ID` and `STRING` tokens.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Id(text) | TokenKind::String(text) => Some(text),
            _ => None,
        }
    }

    /// Convenience wrapper for `self.kind.describe()`.
    pub fn describe(&self) -> String {
        self.kind.describe()
    }
}
