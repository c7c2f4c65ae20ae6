//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros keep the lexer's pattern table to one line per token.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a token whose text is always the same.
///
/// The handler produces a token of the given kind spanning the literal's
/// length from the lexer's current position. Advancing past the lexeme is
/// left to the lexer.
///
/// # Example
///
/// ```ignore
/// pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "=="))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &$crate::lexer::lexer::Lexer,
         _lexeme: &[u8]|
         -> Option<$crate::lexer::tokens::Token> {
            Some($crate::MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.span_of($value.len())
            ))
        }
    };
}
