use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StmtType {
    LetStmt,
    ReturnStmt,
    ExpressionStmt,
}

/// Expression Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ExprType {
    Identifier,
    Integer,
    Prefix,
    Infix,
}

/// Root of a parsed source: its top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// A node that produces no value.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Let(_) => StmtType::LetStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
        }
    }

    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token.literal.as_str(),
            Stmt::Return(stmt) => stmt.token.literal.as_str(),
            Stmt::Expression(stmt) => stmt.token.literal.as_str(),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// A node that produces a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Integer(_) => ExprType::Integer,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Infix(_) => ExprType::Infix,
        }
    }

    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => expr.token.literal.as_str(),
            Expr::Integer(expr) => expr.token.literal.as_str(),
            Expr::Prefix(expr) => expr.token.literal.as_str(),
            Expr::Infix(expr) => expr.token.literal.as_str(),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.token.span,
            Expr::Integer(expr) => &expr.token.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Infix(expr) => &expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr.value),
            Expr::Integer(expr) => write!(f, "{}", expr.value),
            Expr::Prefix(expr) => write!(f, "({}{})", expr.operator, expr.operand),
            Expr::Infix(expr) => write!(f, "({} {} {})", expr.left, expr.operator, expr.right),
        }
    }
}
