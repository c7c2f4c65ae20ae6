use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{lookups::stmt_lookup, parser::Parser};

/// Parses one statement. On success the current token is the statement's
/// last token: its semicolon if it has one.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = stmt_lookup(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Let(LetStmt {
        span: span_from(parser, &start_token.span),
        name: IdentifierExpr {
            value: name_token.literal.clone(),
            token: name_token,
        },
        value,
        token: start_token,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    let value = if matches!(
        parser.peek_token_kind(),
        TokenKind::Semicolon | TokenKind::EOF
    ) {
        None
    } else {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Lowest)?)
    };

    // Anything left before the semicolon belongs to this statement
    while !matches!(
        parser.peek_token_kind(),
        TokenKind::Semicolon | TokenKind::EOF
    ) {
        parser.advance();
    }
    skip_optional_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt {
        span: span_from(parser, &start_token.span),
        value,
        token: start_token,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt {
        span: span_from(parser, &start_token.span),
        expression,
        token: start_token,
    }))
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

/// Span from `start` through the current token.
fn span_from(parser: &Parser, start: &Span) -> Span {
    Span {
        start: start.start.clone(),
        end: parser.current_token().span.end.clone(),
    }
}
