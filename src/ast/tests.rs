//! Unit tests for AST rendering and node accessors.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    ast::{Expr, ExprType, Program, Stmt, StmtType},
    expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn null_span() -> Span {
    Span {
        start: Position::null(),
        end: Position::null(),
    }
}

fn token(kind: TokenKind, literal: &str) -> Token {
    Token {
        kind,
        literal: literal.to_string(),
        span: null_span(),
    }
}

fn identifier(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn integer(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: token(TokenKind::Integer, &value.to_string()),
        value,
    })
}

#[test]
fn test_let_statement_display() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: token(TokenKind::Let, "let"),
            name: identifier("myVar"),
            value: Expr::Identifier(identifier("anotherVar")),
            span: null_span(),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_display() {
    let with_value = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: Some(integer(7)),
        span: null_span(),
    });
    let without_value = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: None,
        span: null_span(),
    });

    assert_eq!(with_value.to_string(), "return 7;");
    assert_eq!(without_value.to_string(), "return;");
}

#[test]
fn test_nested_expression_display() {
    let negated = Expr::Prefix(PrefixExpr {
        token: token(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        operand: Box::new(integer(2)),
        span: null_span(),
    });
    let sum = Expr::Infix(InfixExpr {
        token: token(TokenKind::Plus, "+"),
        operator: "+".to_string(),
        left: Box::new(integer(1)),
        right: Box::new(negated),
        span: null_span(),
    });

    assert_eq!(sum.to_string(), "(1 + (-2))");
    assert_eq!(sum.token_literal(), "+");
    assert_eq!(sum.get_expr_type(), ExprType::Infix);
}

#[test]
fn test_node_types() {
    let stmt = Stmt::Expression(ExpressionStmt {
        token: token(TokenKind::Identifier, "x"),
        expression: Expr::Identifier(identifier("x")),
        span: null_span(),
    });

    assert_eq!(stmt.get_stmt_type(), StmtType::ExpressionStmt);
    assert_eq!(stmt.token_literal(), "x");
    match &stmt {
        Stmt::Expression(stmt) => assert_eq!(stmt.expression.get_expr_type(), ExprType::Identifier),
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}
