use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    // Reserved for call expressions
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

// The expression tables match on every TokenKind so that adding a kind forces a
// decision here.

pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Let
        | TokenKind::Return => BindingPower::Lowest,
    }
}

pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        TokenKind::Identifier => Some(parse_identifier_expr),
        TokenKind::Integer => Some(parse_integer_expr),
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Assignment
        | TokenKind::Plus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Let
        | TokenKind::Return => None,
    }
}

pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater => Some(parse_infix_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Let
        | TokenKind::Return => None,
    }
}

/// Statements introduced by a keyword; anything else is an expression statement.
pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        _ => None,
    }
}
