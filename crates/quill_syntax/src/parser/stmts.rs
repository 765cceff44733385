/// Statement parsing.
///
/// `instr` tries the expression statement first and only then the keyword-led forms.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// ```text
    /// instr ::= expr? SEMICOLON
    ///         | IF LPAR expr RPAR block ( ELSE block )? END
    ///         | RETURN expr SEMICOLON
    ///         | WHILE LPAR expr RPAR block END
    /// ```
    fn instr(&mut self) -> RuleResult {
        let start = self.snapshot();
        if self.expr()? {
            if self.consume(Category::Semicolon) {
                return Ok(true);
            }
            // Not an error here: rewind and give the keyword forms a turn from the same token.
            self.restore(start);
        } else if self.consume(Category::Semicolon) {
            return Ok(true);
        }

        if self.consume(Category::If) {
            return self.if_instr();
        }
        if self.consume(Category::Return) {
            return self.return_instr();
        }
        if self.consume(Category::While) {
            return self.while_instr();
        }
        Ok(false)
    }

    /// Remainder of an `if` statement after the keyword.
    fn if_instr(&mut self) -> RuleResult {
        self.expect(Category::LPar, "Missing '(' after 'if'")?;
        self.expect_rule(Self::expr, "Missing condition in 'if' statement")?;
        self.expect(Category::RPar, "Missing ')' after 'if' condition")?;
        self.expect_rule(Self::block, "Missing block in 'if' statement")?;
        if self.consume(Category::Else) {
            self.expect_rule(Self::block, "Expected block after 'else'")?;
        }
        self.expect(Category::End, "Missing 'end' after 'if' statement")?;
        Ok(true)
    }

    /// Remainder of a `return` statement after the keyword.
    fn return_instr(&mut self) -> RuleResult {
        self.expect_rule(Self::expr, "Missing expression in return statement")?;
        self.expect(Category::Semicolon, "Missing ';' after return statement")?;
        Ok(true)
    }

    /// Remainder of a `while` loop after the keyword.
    fn while_instr(&mut self) -> RuleResult {
        self.expect(Category::LPar, "Missing '(' after 'while'")?;
        self.expect_rule(Self::expr, "Missing condition in 'while' loop")?;
        self.expect(Category::RPar, "Missing ')' after 'while' condition")?;
        self.expect_rule(Self::block, "Missing block in 'while' loop")?;
        self.expect(Category::End, "Missing 'end' after 'while' loop")?;
        Ok(true)
    }
}
