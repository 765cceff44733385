//! Recognizer for the Quill programming language
//!
//! Walks the token stream produced by [`crate::lexer`] and checks it against the grammar below.
//! No AST is built: every rule only answers whether its nonterminal matches at the cursor, and the
//! first violation that backtracking cannot resolve is returned as a [`SyntaxError`].
//!
//! ```text
//! program    ::= ( defVar | defFunc | block )* FINISH
//! defVar     ::= VAR ID COLON baseType SEMICOLON
//! baseType   ::= TYPE_INT | TYPE_REAL | TYPE_STR
//! defFunc    ::= FUNCTION ID LPAR funcParams? RPAR COLON baseType defVar* block END
//! funcParams ::= funcParam ( COMMA funcParam )*
//! funcParam  ::= ID COLON baseType
//! block      ::= instr+
//! instr      ::= expr? SEMICOLON
//!              | IF LPAR expr RPAR block ( ELSE block )? END
//!              | RETURN expr SEMICOLON
//!              | WHILE LPAR expr RPAR block END
//! expr       ::= exprLogic
//! exprLogic  ::= exprAssign ( ( AND | OR ) exprAssign )*
//! exprAssign ::= ( ID ASSIGN )? exprComp
//! exprComp   ::= exprAdd ( ( LESS | EQUAL ) exprAdd )?
//! exprAdd    ::= exprMul ( ( ADD | SUB ) exprMul )*
//! exprMul    ::= exprPrefix ( ( MUL | DIV ) exprPrefix )*
//! exprPrefix ::= ( SUB | NOT )? factor
//! factor     ::= INT | REAL | STRING | LPAR expr RPAR
//!              | ID ( LPAR ( expr ( COMMA expr )* )? RPAR )?
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use quill_syntax::{lexer, parser};
//!
//! let source = "function twice(x: int) : int\n    return x * 2;\nend\n";
//! let tokens = lexer::lex(source).unwrap();
//! assert!(parser::parse(&tokens).is_ok());
//! ```

use crate::diagnostics::SyntaxError;
use crate::lexer::{Category, Token};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
