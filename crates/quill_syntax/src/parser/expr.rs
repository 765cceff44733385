/// Expression parsing.
///
/// One rule per precedence level, loosest first:
/// `and`/`or` → assignment → comparison → `+`/`-` → `*`/`/` → prefix → factor.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// `expr ::= exprLogic`
    fn expr(&mut self) -> RuleResult {
        self.nested(Self::expr_logic, "Expression nested too deeply")
    }

    /// `exprLogic ::= exprAssign ( ( AND | OR ) exprAssign )*`
    fn expr_logic(&mut self) -> RuleResult {
        if !self.expr_assign()? {
            return Ok(false);
        }
        while self.consume_any(&[Category::And, Category::Or]) {
            self.expect_rule(Self::expr_assign, "Invalid expression after 'and/or'")?;
        }
        Ok(true)
    }

    /// `exprAssign ::= ( ID ASSIGN )? exprComp`
    ///
    /// `ID ASSIGN` is consumed speculatively; without the `=` the cursor goes back to the
    /// identifier and the whole thing is retried as a comparison.
    fn expr_assign(&mut self) -> RuleResult {
        let start = self.snapshot();
        if self.consume(Category::Id) {
            if self.consume(Category::Assign) {
                self.expect_rule(Self::expr_comp, "Invalid expression after '='")?;
                return Ok(true);
            }
            self.restore(start);
        }
        self.expr_comp()
    }

    /// `exprComp ::= exprAdd ( ( LESS | EQUAL ) exprAdd )?`
    ///
    /// At most one comparison: in `a < b < c` the second `<` is left for the caller.
    fn expr_comp(&mut self) -> RuleResult {
        if !self.expr_add()? {
            return Ok(false);
        }
        if self.consume_any(&[Category::Less, Category::Equal]) {
            self.expect_rule(Self::expr_add, "Invalid expression after '<' or '=='")?;
        }
        Ok(true)
    }

    /// `exprAdd ::= exprMul ( ( ADD | SUB ) exprMul )*`
    fn expr_add(&mut self) -> RuleResult {
        if !self.expr_mul()? {
            return Ok(false);
        }
        while self.consume_any(&[Category::Add, Category::Sub]) {
            self.expect_rule(Self::expr_mul, "Invalid expression after '+' or '-'")?;
        }
        Ok(true)
    }

    /// `exprMul ::= exprPrefix ( ( MUL | DIV ) exprPrefix )*`
    fn expr_mul(&mut self) -> RuleResult {
        if !self.expr_prefix()? {
            return Ok(false);
        }
        while self.consume_any(&[Category::Mul, Category::Div]) {
            self.expect_rule(Self::expr_prefix, "Invalid expression after '*' or '/'")?;
        }
        Ok(true)
    }

    /// `exprPrefix ::= ( SUB | NOT )? factor`
    fn expr_prefix(&mut self) -> RuleResult {
        let start = self.snapshot();
        self.consume_any(&[Category::Sub, Category::Not]);
        if self.factor()? {
            return Ok(true);
        }
        self.restore(start);
        Ok(false)
    }

    /// ```text
    /// factor ::= INT | REAL | STRING
    ///          | LPAR expr RPAR
    ///          | ID ( LPAR ( expr ( COMMA expr )* )? RPAR )?
    /// ```
    fn factor(&mut self) -> RuleResult {
        if self.consume_any(&[Category::Int, Category::Real, Category::String]) {
            return Ok(true);
        }
        if self.consume(Category::LPar) {
            self.expect_rule(Self::expr, "Invalid expression after '('")?;
            self.expect(Category::RPar, "Missing ')' after expression")?;
            return Ok(true);
        }
        if self.consume(Category::Id) {
            if self.consume(Category::LPar) {
                if self.expr()? {
                    while self.consume(Category::Comma) {
                        self.expect_rule(Self::expr, "Invalid expression after ',' in function call")?;
                    }
                }
                self.expect(Category::RPar, "Missing ')' after function arguments")?;
            }
            return Ok(true);
        }
        Ok(false)
    }
}
