/// Declaration-level rules.
///
/// This chunk contains the top-level `program` loop and the variable/function declarations,
/// plus `block`, which both the top level and function bodies use.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `program ::= ( defVar | defFunc | block )* FINISH`
    ///
    /// Each alternative backs out cleanly when its first token is absent, so the loop ends once
    /// none applies.
    fn program(&mut self) -> RuleResult {
        while self.def_var()? || self.def_func()? || self.block()? {}

        if self.consume(Category::Finish) {
            Ok(true)
        } else {
            Err(self
                .error("syntax error")
                .with_hint("expected a variable declaration, a function definition or a statement"))
        }
    }

    /// `defVar ::= VAR ID COLON baseType SEMICOLON`
    fn def_var(&mut self) -> RuleResult {
        if !self.consume(Category::Var) {
            return Ok(false);
        }
        self.expect(Category::Id, "Missing identifier in variable declaration")?;
        let name = self.consumed_text();
        self.expect(Category::Colon, "Missing ':' in variable declaration")?;
        self.expect_rule(Self::base_type, "Missing type in variable declaration")?;
        self.expect(Category::Semicolon, "Missing ';' after variable declaration")?;

        tracing::trace!(name, "variable declaration");
        Ok(true)
    }

    /// `baseType ::= TYPE_INT | TYPE_REAL | TYPE_STR`
    fn base_type(&mut self) -> RuleResult {
        Ok(self.consume_any(&[Category::TypeInt, Category::TypeReal, Category::TypeStr]))
    }

    /// `defFunc ::= FUNCTION ID LPAR funcParams? RPAR COLON baseType defVar* block END`
    fn def_func(&mut self) -> RuleResult {
        if !self.consume(Category::Function) {
            return Ok(false);
        }
        self.expect(Category::Id, "Missing function identifier")?;
        let name = self.consumed_text();
        self.expect(Category::LPar, "Missing '(' after function identifier")?;
        self.func_params()?;
        self.expect(Category::RPar, "Missing ')' after function parameters")?;
        self.expect(Category::Colon, "Missing ':' in function declaration")?;
        self.expect_rule(Self::base_type, "Missing return type in function declaration")?;
        while self.def_var()? {}
        self.expect_rule(Self::block, "Missing body in function definition")?;
        self.expect(Category::End, "Missing 'end' after function definition")?;

        tracing::trace!(name, "function definition");
        Ok(true)
    }

    /// `funcParams ::= funcParam ( COMMA funcParam )*`
    fn func_params(&mut self) -> RuleResult {
        if !self.func_param()? {
            return Ok(false);
        }
        while self.consume(Category::Comma) {
            self.expect_rule(Self::func_param, "Invalid function parameter after ','")?;
        }
        Ok(true)
    }

    /// `funcParam ::= ID COLON baseType`
    fn func_param(&mut self) -> RuleResult {
        if !self.consume(Category::Id) {
            return Ok(false);
        }
        self.expect(Category::Colon, "Missing ':' in function parameter")?;
        self.expect_rule(Self::base_type, "Invalid base type in function parameter")?;
        Ok(true)
    }

    /// `block ::= instr+`
    fn block(&mut self) -> RuleResult {
        self.nested(Self::instrs, "Statements nested too deeply")
    }

    fn instrs(&mut self) -> RuleResult {
        if !self.instr()? {
            return Ok(false);
        }
        while self.instr()? {}
        Ok(true)
    }
}
