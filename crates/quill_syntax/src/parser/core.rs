// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Outcome of one grammar rule.
///
/// - `Ok(true)`: the rule matched; the cursor sits just past the matched span.
/// - `Ok(false)`: the rule did not apply; the cursor is back at the rule's entry position.
/// - `Err(_)`: the rule committed to a production and a required continuation is missing.
type RuleResult = Result<bool, SyntaxError>;

/// Deepest allowed nesting of expressions and statement blocks, counted together.
const MAX_NESTING_DEPTH: usize = 128;

/// Parser state.
///
/// ## Notes
/// - The cursor (`pos`) is the parse state; the recursion is the stack, and `depth` only bounds it.
/// - There is no error recovery: the first diagnostic ends the parse.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Most recently consumed token, overwritten by every successful consume.
    consumed: Option<&'a Token>,
    /// Open `expr`/`block` rule activations; bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `quill_syntax::lexer`, terminated by `FINISH`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            consumed: None,
            depth: 0,
        }
    }

    /// Recognize the entire token stream, starting over from the first token.
    ///
    /// On success every token, including the end marker, has been consumed and
    /// [`Parser::position`] equals the stream length.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`], located at the token under the cursor when it was
    /// detected.
    pub fn parse(&mut self) -> Result<(), SyntaxError> {
        self.pos = 0;
        self.consumed = None;
        self.depth = 0;
        self.check_terminated()?;

        self.program()?;
        tracing::debug!(consumed = self.pos, "token stream accepted");
        Ok(())
    }

    /// Current cursor position (index of the next token to consume).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The most recently consumed token, if any.
    pub fn last_consumed(&self) -> Option<&'a Token> {
        self.consumed
    }

    /// Reject streams that do not end with exactly one `FINISH`.
    fn check_terminated(&self) -> Result<(), SyntaxError> {
        let finish = self
            .tokens
            .iter()
            .position(|tok| tok.category() == Category::Finish);
        match finish {
            Some(idx) if idx + 1 == self.tokens.len() => Ok(()),
            _ => {
                let line = self.tokens.last().map_or(1, |tok| tok.line);
                Err(SyntaxError::syntax(
                    line,
                    "Token stream must end with exactly one end-of-input marker",
                ))
            }
        }
    }
}
