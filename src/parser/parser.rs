//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level
//! parsing loop. The parser keeps two tokens of state, `current` and `peek`,
//! and pulls a new token from its lexer on every [`Parser::advance`].
//!
//! Parse failures never abort the program parse: the failing statement is
//! dropped, its error is recorded, and parsing resumes after the next `;`.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// How many expressions may be open inside one another.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens; owned for the parser's whole life
    lexer: Lexer,
    /// Diagnostics in the order they were raised
    errors: Vec<Error>,
    /// The token under examination
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Expressions currently being parsed inside one another
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, reading two tokens to fill `current` and `peek`.
    ///
    /// The lexer must not be used by anyone else afterwards.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            errors: vec![],
            current_token,
            peek_token,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek_token, next);
        mem::replace(&mut self.current_token, peek)
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error positioned at the
    /// peek token. The parser does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek_token.kind,
                },
                self.peek_token.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current_token.clone())
    }

    /// Opens one level of expression nesting.
    ///
    /// Fails once [`MAX_NESTING_DEPTH`] levels are open, before the recursion
    /// can exhaust the stack. Every successful call is paired with
    /// [`Parser::exit_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Messages for every diagnostic raised so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// Always returns a program; statements that failed to parse are left
    /// out and reported through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        program
    }

    /// Skips to the end of the broken statement.
    fn synchronize(&mut self) {
        while !matches!(
            self.current_token_kind(),
            TokenKind::Semicolon | TokenKind::EOF
        ) {
            self.advance();
        }
    }
}

/// Parses everything the lexer produces.
///
/// # Returns
///
/// A tuple containing:
/// - The Program, holding every statement that parsed
/// - The diagnostics raised along the way, empty on a clean parse
pub fn parse(lexer: Lexer) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (program, parser.errors)
}
