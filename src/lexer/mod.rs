//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a lazy stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization driven by anchored regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping and illegal-byte reporting

pub mod lexer;
pub mod tokens;
