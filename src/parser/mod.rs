//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from a lexer with
//! one token of lookahead and builds the AST. It uses a Pratt parser for
//! expressions and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing (prefix and infix operators, literals)
//! - Error recovery: defects are recorded, never fatal
//!
//! The parser uses NUD (null denotation) and LED (left denotation) handlers
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
