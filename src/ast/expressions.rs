use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

// LITERALS

/// Identifier Expression
/// A bare name; `value` mirrors the token's literal.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

/// Integer Expression
/// A decimal literal already converted to its 64-bit value.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

// COMPLEX

/// Prefix Expression
/// A unary `!` or `-` applied to its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Infix Expression
/// A binary operator between two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}
