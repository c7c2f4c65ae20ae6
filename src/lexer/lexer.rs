use std::rc::Rc;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Builds the token for a matched lexeme, or `None` when the lexeme is skipped.
pub type PatternHandler = fn(&Lexer, &[u8]) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

fn pattern(regex: &str, handler: PatternHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("token patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Tried in order; every pattern is anchored at the current offset.
    // Two-character operators must precede their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[ \t\n\r]+", skip_handler),
        pattern("^[a-zA-Z_]+", symbol_handler),
        pattern("^[0-9]+", integer_handler),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
    ];
}

/// Pull-based tokenizer over a single source string.
///
/// Each call to [`Lexer::next_token`] consumes exactly the bytes of the
/// returned token plus any whitespace before it. Once the input is exhausted
/// every further call yields an `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer::with_file(source, String::from("shell"))
    }

    pub fn with_file(source: String, file: String) -> Lexer {
        Lexer {
            source,
            pos: 0,
            file: Rc::new(file),
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0));
            }

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.end()))
            });

            let Some((handler, len)) = matched else {
                let token = MK_TOKEN!(TokenKind::Illegal, escape_byte(self.at()), self.span_of(1));
                self.advance_n(1);
                return token;
            };

            let token = handler(self, &self.remainder()[..len]);
            self.advance_n(len);

            if let Some(token) = token {
                return token;
            }
        }
    }

    /// Span covering `len` bytes from the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> u8 {
        self.source.as_bytes()[self.pos]
    }

    fn remainder(&self) -> &[u8] {
        &self.source.as_bytes()[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is(TokenKind::EOF);
        Some(token)
    }
}

/// ASCII bytes keep their character; anything else becomes `\xHH`.
fn escape_byte(byte: u8) -> String {
    if byte.is_ascii() {
        (byte as char).to_string()
    } else {
        format!("\\x{:02X}", byte)
    }
}

fn skip_handler(_lexer: &Lexer, _lexeme: &[u8]) -> Option<Token> {
    None
}

fn integer_handler(lexer: &Lexer, lexeme: &[u8]) -> Option<Token> {
    let literal = String::from_utf8_lossy(lexeme).into_owned();
    Some(MK_TOKEN!(TokenKind::Integer, literal, lexer.span_of(lexeme.len())))
}

fn symbol_handler(lexer: &Lexer, lexeme: &[u8]) -> Option<Token> {
    let literal = String::from_utf8_lossy(lexeme).into_owned();
    Some(MK_TOKEN!(lookup_identifier(&literal), literal, lexer.span_of(lexeme.len())))
}

/// Scans the whole source, `EOF` token included.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    match file {
        Some(file) => Lexer::with_file(source, file).collect(),
        None => Lexer::new(source).collect(),
    }
}
