/// Token-stream helpers.
///
/// This chunk contains the low-level primitives every grammar rule is built from:
/// - Looking at the current token (`peek`)
/// - The single cursor-advancing primitive (`consume`) and its variants
/// - Cursor snapshot/restore for speculative parses
/// - Building diagnostics at the current token (`error`, `expect`, `expect_rule`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    ///
    /// Once `FINISH` has been consumed the cursor equals the stream length; the end marker keeps
    /// being reported as the current token. Only called after `check_terminated` succeeded.
    fn peek(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.pos.min(tokens.len() - 1)]
    }

    /// If the current token has category `expected`, advance past it, remember it as the last
    /// consumed token and return `true`. Otherwise leave the cursor alone and return `false`.
    ///
    /// This is the only place the cursor moves forward.
    fn consume(&mut self, expected: Category) -> bool {
        let tokens = self.tokens;
        match tokens.get(self.pos) {
            Some(tok) if tok.category() == expected => {
                self.consumed = Some(tok);
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume the current token if it has any of the `expected` categories.
    fn consume_any(&mut self, expected: &[Category]) -> bool {
        expected.iter().any(|&category| self.consume(category))
    }

    fn snapshot(&self) -> usize {
        self.pos
    }

    fn restore(&mut self, snapshot: usize) {
        self.pos = snapshot;
    }

    /// Payload text of the last consumed token (empty if it had none).
    fn consumed_text(&self) -> &'a str {
        self.consumed.and_then(Token::text).unwrap_or_default()
    }

    /// Build a diagnostic located at the current token.
    fn error(&self, message: &str) -> SyntaxError {
        SyntaxError::at(self.peek(), message)
    }

    fn expect(&mut self, expected: Category, message: &str) -> Result<(), SyntaxError> {
        if self.consume(expected) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Run a rule that may recurse into itself, failing with `message` once nesting passes
    /// [`MAX_NESTING_DEPTH`] instead of exhausting the stack.
    fn nested(&mut self, rule: fn(&mut Self) -> RuleResult, message: &str) -> RuleResult {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(message));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Run a rule that is structurally required at this point.
    fn expect_rule(&mut self, rule: fn(&mut Self) -> RuleResult, message: &str) -> Result<(), SyntaxError> {
        if rule(self)? {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }
}
