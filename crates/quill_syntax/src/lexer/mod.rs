//! Lexer for the Quill language
//!
//! Handles tokenization including:
//! - Keywords (`var`, `function`, `if`, `while`, ...) and base type names (`int`, `real`, `str`)
//! - Identifiers and literals (int, real, string)
//! - Operators and punctuation (`==` vs `=`)
//! - `#` line comments and line counting for diagnostics
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Category, TokenKind, Token, Span)

pub mod tokens;

pub use tokens::{Category, Span, Token, TokenKind, keyword, show_tokens};

use crate::diagnostics::SyntaxError;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Quill source code.
///
/// Converts source text into a token stream that always ends with exactly one
/// [`TokenKind::Finish`]. Scanning stops at the first invalid input.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: u32,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// ## Errors
    /// Returns a lexical [`SyntaxError`] for the first character sequence that is not a token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        loop {
            self.skip_trivia();
            let start = self.current_pos;
            let Some(c) = self.advance() else {
                break;
            };
            self.scan_token(start, c)?;
        }

        let end = self.source.len();
        self.tokens
            .push(Token::spanned(TokenKind::Finish, self.line, Span::new(end, end)));
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and `#` comments, counting newlines.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                '#' => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self, start: usize, c: char) -> Result<(), SyntaxError> {
        match c {
            ',' => self.add_token(TokenKind::Comma, start),
            ':' => self.add_token(TokenKind::Colon, start),
            ';' => self.add_token(TokenKind::Semicolon, start),
            '(' => self.add_token(TokenKind::LPar, start),
            ')' => self.add_token(TokenKind::RPar, start),
            '+' => self.add_token(TokenKind::Add, start),
            '-' => self.add_token(TokenKind::Sub, start),
            '*' => self.add_token(TokenKind::Mul, start),
            '/' => self.add_token(TokenKind::Div, start),
            '<' => self.add_token(TokenKind::Less, start),
            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::Equal, start);
                } else {
                    self.add_token(TokenKind::Assign, start);
                }
            }

            '"' => self.scan_string(start)?,

            '0'..='9' => self.scan_number(start)?,

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                return Err(SyntaxError::lexical(
                    self.line,
                    format!("Invalid character '{}'", c.escape_default()),
                    Span::new(start, self.current_pos),
                ));
            }
        }
        Ok(())
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens
            .push(Token::spanned(kind, self.line, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a `"..."` literal; the opening quote is already consumed.
    fn scan_string(&mut self, start: usize) -> Result<(), SyntaxError> {
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\n') | None => {
                    return Err(SyntaxError::lexical(
                        self.line,
                        "Unterminated string literal",
                        Span::new(start, self.current_pos),
                    ));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let source = self.source;
        let text = &source[start + 1..self.current_pos - 1];
        self.add_token(TokenKind::String(text.to_string()), start);
        Ok(())
    }

    /// Scan an `INT` or `REAL` literal; the first digit is already consumed.
    fn scan_number(&mut self, start: usize) -> Result<(), SyntaxError> {
        self.skip_digits();

        let mut is_real = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_real = true;
            self.advance();
            self.skip_digits();
        }

        if matches!(self.peek(), Some('e' | 'E')) && self.exponent_follows() {
            is_real = true;
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            self.skip_digits();
        }

        let source = self.source;
        let text = &source[start..self.current_pos];
        let span = Span::new(start, self.current_pos);
        if is_real {
            let value: f64 = text
                .parse()
                .map_err(|_| SyntaxError::lexical(self.line, format!("Invalid real literal '{text}'"), span))?;
            self.add_token(TokenKind::Real(value), start);
        } else {
            let value: i64 = text.parse().map_err(|_| {
                SyntaxError::lexical(self.line, format!("Integer literal '{text}' is out of range"), span)
            })?;
            self.add_token(TokenKind::Int(value), start);
        }
        Ok(())
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }
    }

    /// `true` if the `e`/`E` under the cursor starts an exponent (`e5`, `e+5`, `e-5`).
    fn exponent_follows(&self) -> bool {
        let mut rest = self.source[self.current_pos..].chars().skip(1);
        match rest.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => rest.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        let kind = keyword(spelling).unwrap_or_else(|| TokenKind::Id(spelling.to_string()));
        self.add_token(kind, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).tokenize()
}
