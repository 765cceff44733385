#[cfg(test)]
/// Parser unit tests.
///
/// Hand-built token streams exercise the rules directly (cursor positions after backtracking);
/// lexed sources cover the diagnostics and their line numbers.
mod tests {
    use super::*;
    use crate::lexer::{self, TokenKind};

    /// Build a stream of line-1 tokens terminated by `FINISH`.
    fn stream(kinds: Vec<TokenKind>) -> Vec<Token> {
        let mut tokens: Vec<Token> = kinds.into_iter().map(|kind| Token::new(kind, 1)).collect();
        tokens.push(Token::new(TokenKind::Finish, 1));
        tokens
    }

    fn id(name: &str) -> TokenKind {
        TokenKind::Id(name.to_string())
    }

    fn parse_str(source: &str) -> Result<(), SyntaxError> {
        let tokens = lexer::lex(source).expect("source should lex");
        parse(&tokens)
    }

    fn error_of(source: &str) -> SyntaxError {
        parse_str(source).expect_err("source should be rejected")
    }

    // ------------------------------------------------------------------------
    // Accepted programs
    // ------------------------------------------------------------------------

    #[test]
    fn test_variable_declaration_is_accepted() {
        let tokens = stream(vec![TokenKind::Var, id("x"), TokenKind::Colon, TokenKind::TypeInt, TokenKind::Semicolon]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.parse(), Ok(()));
        assert_eq!(parser.position(), tokens.len());
    }

    #[test]
    fn test_function_with_return_is_accepted() {
        let tokens = stream(vec![
            TokenKind::Function,
            id("f"),
            TokenKind::LPar,
            id("x"),
            TokenKind::Colon,
            TokenKind::TypeInt,
            TokenKind::RPar,
            TokenKind::Colon,
            TokenKind::TypeInt,
            TokenKind::Return,
            id("x"),
            TokenKind::Semicolon,
            TokenKind::End,
        ]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.parse(), Ok(()));
        assert_eq!(parser.position(), tokens.len());
    }

    #[test]
    fn test_if_with_assignment_is_accepted() {
        let tokens = stream(vec![
            TokenKind::If,
            TokenKind::LPar,
            id("x"),
            TokenKind::RPar,
            id("x"),
            TokenKind::Assign,
            TokenKind::Int(1),
            TokenKind::Semicolon,
            TokenKind::End,
        ]);
        assert_eq!(parse(&tokens), Ok(()));
    }

    #[test]
    fn test_empty_stream_is_accepted() {
        let tokens = stream(vec![]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.parse(), Ok(()));
        assert_eq!(parser.position(), 1);
    }

    #[test]
    fn test_empty_statements_are_accepted() {
        assert_eq!(parse_str(";"), Ok(()));
        assert_eq!(parse_str(";;\n;"), Ok(()));
        assert_eq!(parse_str("function f() : int ; end"), Ok(()));
    }

    #[test]
    fn test_function_with_params_and_locals() {
        let source = r#"
function area(w: real, h: real) : real
  var r : real;
  r = w * h;
  return r;
end
var total : real;
total = area(2.0, 3.5);
"#;
        assert_eq!(parse_str(source), Ok(()));
    }

    #[test]
    fn test_nested_control_flow() {
        let source = r#"
var i : int;
i = 0;
while (i < 10)
  if (i == 5)
    print("five");
  else
    print(i);
  end
  i = i + 1;
end
"#;
        assert_eq!(parse_str(source), Ok(()));
    }

    #[test]
    fn test_expression_precedence_levels() {
        assert_eq!(parse_str("a = b + c * d < e and f or g(1) == 2;"), Ok(()));
        assert_eq!(parse_str("y = -x * not (a);"), Ok(()));
        assert_eq!(parse_str("(a = 1) and (b = 2);"), Ok(()));
    }

    #[test]
    fn test_call_arguments() {
        assert_eq!(parse_str(r#"f(1, 2.5, "s", g(x));"#), Ok(()));
        assert_eq!(parse_str("f();"), Ok(()));
        assert_eq!(error_of("f(1, );").message, "Invalid expression after ',' in function call");
        assert_eq!(error_of("f(1;").message, "Missing ')' after function arguments");
    }

    // ------------------------------------------------------------------------
    // Backtracking
    // ------------------------------------------------------------------------

    #[test]
    fn test_declarations_back_out_without_their_keyword() {
        let tokens = stream(vec![id("x"), TokenKind::Semicolon]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.def_var(), Ok(false));
        assert_eq!(parser.position(), 0);
        assert_eq!(parser.def_func(), Ok(false));
        assert_eq!(parser.position(), 0);
    }

    #[test]
    fn test_expr_assign_restores_identifier_without_assign() {
        let tokens = stream(vec![id("x"), TokenKind::Less, id("y"), TokenKind::Semicolon]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.expr_assign(), Ok(true));
        // The speculative `x` was given back and re-read as the left side of the comparison.
        assert_eq!(parser.position(), 3);

        let tokens = stream(vec![TokenKind::Semicolon]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.expr_assign(), Ok(false));
        assert_eq!(parser.position(), 0);
    }

    #[test]
    fn test_expression_statement_without_semicolon_backtracks() {
        // Inherited leniency: an expression missing its ';' is not itself reported; `instr`
        // rewinds and fails, and the enclosing rule reports whatever it expected instead.
        let tokens = stream(vec![id("x"), id("y"), TokenKind::Semicolon]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.instr(), Ok(false));
        assert_eq!(parser.position(), 0);

        let err = Parser::new(&tokens).parse().unwrap_err();
        assert_eq!(err.message, "syntax error");
    }

    #[test]
    fn test_prefix_without_operand_backs_out() {
        let tokens = stream(vec![TokenKind::Sub, TokenKind::Semicolon]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.expr_prefix(), Ok(false));
        assert_eq!(parser.position(), 0);

        assert_eq!(error_of("- ;").message, "syntax error");
    }

    #[test]
    fn test_comparisons_do_not_chain() {
        let tokens = stream(vec![
            id("a"),
            TokenKind::Less,
            id("b"),
            TokenKind::Less,
            id("c"),
            TokenKind::Semicolon,
        ]);
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.expr_comp(), Ok(true));
        assert_eq!(parser.position(), 3, "only `a < b` is matched");

        assert_eq!(parse(&tokens).unwrap_err().message, "syntax error");

        let err = error_of("function f() : int\n  x = 1;\n  a < b < c;\nend\n");
        assert_eq!(err.message, "Missing 'end' after function definition");
        assert_eq!(err.line, 3);
    }

    // ------------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_colon_reports_line_of_type_token() {
        let tokens = vec![
            Token::new(TokenKind::Var, 1),
            Token::new(id("x"), 1),
            Token::new(TokenKind::TypeInt, 2),
            Token::new(TokenKind::Semicolon, 2),
            Token::new(TokenKind::Finish, 2),
        ];
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.message, "Missing ':' in variable declaration");
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "error in line 2: Missing ':' in variable declaration");
    }

    #[test]
    fn test_while_without_end_is_fatal() {
        let tokens = stream(vec![
            TokenKind::While,
            TokenKind::LPar,
            id("x"),
            TokenKind::RPar,
            id("x"),
            TokenKind::Assign,
            TokenKind::Int(1),
            TokenKind::Semicolon,
        ]);
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.message, "Missing 'end' after 'while' loop");
    }

    #[test]
    fn test_missing_function_identifier_reports_offending_line() {
        let err = error_of("function\n(x: int) : int\n  return x;\nend\n");
        assert_eq!(err.message, "Missing function identifier");
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_declaration_diagnostics() {
        assert_eq!(error_of("var ;").message, "Missing identifier in variable declaration");
        assert_eq!(error_of("var x : y;").message, "Missing type in variable declaration");
        assert_eq!(error_of("var x : int\nx = 1;").message, "Missing ';' after variable declaration");
        assert_eq!(error_of("function f x) : int ; end").message, "Missing '(' after function identifier");
        assert_eq!(error_of("function f(x: int : int ; end").message, "Missing ')' after function parameters");
        assert_eq!(error_of("function f() int ; end").message, "Missing ':' in function declaration");
        assert_eq!(error_of("function f() : return 1; end").message, "Missing return type in function declaration");
        assert_eq!(error_of("function f() : int end").message, "Missing body in function definition");
        assert_eq!(error_of("function f() : int ;").message, "Missing 'end' after function definition");
    }

    #[test]
    fn test_parameter_diagnostics() {
        assert_eq!(error_of("function f(a int) : int ; end").message, "Missing ':' in function parameter");
        assert_eq!(error_of("function f(a: int,) : int ; end").message, "Invalid function parameter after ','");
        assert_eq!(error_of("function f(a: foo) : int ; end").message, "Invalid base type in function parameter");
    }

    #[test]
    fn test_statement_diagnostics() {
        assert_eq!(error_of("if x) ; end").message, "Missing '(' after 'if'");
        assert_eq!(error_of("if () ; end").message, "Missing condition in 'if' statement");
        assert_eq!(error_of("if (x ; end").message, "Missing ')' after 'if' condition");
        assert_eq!(error_of("if (x) end").message, "Missing block in 'if' statement");
        assert_eq!(error_of("if (a) x = 1; else end").message, "Expected block after 'else'");
        assert_eq!(error_of("if (a) x = 1;").message, "Missing 'end' after 'if' statement");
        assert_eq!(error_of("return ;").message, "Missing expression in return statement");
        assert_eq!(error_of("return x").message, "Missing ';' after return statement");
        assert_eq!(error_of("while x) ; end").message, "Missing '(' after 'while'");
        assert_eq!(error_of("while () ; end").message, "Missing condition in 'while' loop");
        assert_eq!(error_of("while (x ; end").message, "Missing ')' after 'while' condition");
        assert_eq!(error_of("while (x) end").message, "Missing block in 'while' loop");
    }

    #[test]
    fn test_expression_diagnostics() {
        assert_eq!(error_of("x = ;").message, "Invalid expression after '='");
        assert_eq!(error_of("a and ;").message, "Invalid expression after 'and/or'");
        assert_eq!(error_of("a == ;").message, "Invalid expression after '<' or '=='");
        assert_eq!(error_of("a + ;").message, "Invalid expression after '+' or '-'");
        assert_eq!(error_of("a * ;").message, "Invalid expression after '*' or '/'");
        assert_eq!(error_of("();").message, "Invalid expression after '('");
        assert_eq!(error_of("(a;").message, "Missing ')' after expression");
    }

    #[test]
    fn test_diagnostics_carry_the_offending_line() {
        let sources = [
            "var total : int;\nvar count int;\n",
            "function\n(x: int) : int\n  return x;\nend\n",
            "var i : int;\nwhile (i < 3)\n  i = i + 1;\n",
            "x = 1;\n\nif (x)\n  x = 2;\nelse\nend\n",
            "a < 1 < 2;\n",
        ];
        let rendered: Vec<String> = sources.iter().map(|source| error_of(source).to_string()).collect();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        error in line 2: Missing ':' in variable declaration
        error in line 2: Missing function identifier
        error in line 4: Missing 'end' after 'while' loop
        error in line 6: Expected block after 'else'
        error in line 1: syntax error
        ");
    }

    #[test]
    fn test_catch_all_error_is_labelled_and_hinted() {
        let err = error_of("var x : int;\nend\n");
        assert_eq!(err.to_string(), "error in line 2: syntax error");
        assert_eq!(err.label.as_deref(), Some("found `end`"));
        assert!(err.hint.is_some());
    }

    #[test]
    fn test_stream_must_end_with_single_finish() {
        let expected = "Token stream must end with exactly one end-of-input marker";

        let tokens = vec![Token::new(TokenKind::Var, 1)];
        assert_eq!(parse(&tokens).unwrap_err().message, expected);

        let tokens = stream(vec![TokenKind::Finish, TokenKind::Semicolon]);
        assert_eq!(parse(&tokens).unwrap_err().message, expected);

        assert_eq!(parse(&[]).unwrap_err().message, expected);
    }

    #[test]
    fn test_deep_parentheses_are_rejected_not_overflowed() {
        let source = format!("x = {}1{};", "(".repeat(10_000), ")".repeat(10_000));
        let err = error_of(&source);
        assert_eq!(err.message, "Expression nested too deeply");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_moderate_nesting_is_accepted() {
        let source = format!("x = {}1{};", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse_str(&source), Ok(()));
    }

    #[test]
    fn test_deep_blocks_are_rejected() {
        let source = format!("{}x;\n{}", "while (x)\n".repeat(1_000), "end\n".repeat(1_000));
        let tokens = lexer::lex(&source).unwrap();
        let mut parser = Parser::new(&tokens);

        let first = parser.parse();
        assert_eq!(first.as_ref().unwrap_err().message, "Statements nested too deeply");
        // The depth counter starts over on every run.
        assert_eq!(parser.parse(), first);
    }

    // ------------------------------------------------------------------------
    // Parser state
    // ------------------------------------------------------------------------

    #[test]
    fn test_last_consumed_tracks_identifier_payload() {
        let tokens = stream(vec![id("count"), TokenKind::Colon]);
        let mut parser = Parser::new(&tokens);
        assert!(parser.last_consumed().is_none());

        assert!(parser.consume(Category::Id));
        assert_eq!(parser.last_consumed().and_then(Token::text), Some("count"));

        // A failed consume changes nothing.
        assert!(!parser.consume(Category::Id));
        assert_eq!(parser.position(), 1);
        assert_eq!(parser.consumed_text(), "count");
    }

    #[test]
    fn test_parse_is_repeatable() {
        let tokens = lexer::lex("var x : int;\nwhile (x) x = 1;\n").unwrap();
        let mut parser = Parser::new(&tokens);
        let first = parser.parse();
        let second = parser.parse();
        assert!(first.is_err());
        assert_eq!(first, second);

        let tokens = lexer::lex("var x : int;\nx = 1;\n").unwrap();
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.parse(), Ok(()));
        assert_eq!(parser.parse(), Ok(()));
        assert_eq!(parser.position(), tokens.len());
    }
}
