use super::lexer::TokenKind;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// A lexical or grammatical error raised by [`parse`](crate::parse).
///
/// Parsing is atomic: on error no partial tree is produced.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("syntax error at position {} ({remainder:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte range of the offending token.
    pub span: Range<usize>,
    /// The input from the offending token to the end.
    pub remainder: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, source: &str, span: Range<usize>) -> Self {
        let remainder = source.get(span.start..).unwrap_or_default().to_string();
        Self {
            kind,
            span,
            remainder,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The input was empty or contained only whitespace.
    Empty,
    UnexpectedToken {
        found: TokenKind,
        expected: Vec<TokenKind>,
    },
    UnexpectedEnd {
        expected: Vec<TokenKind>,
    },
    /// No token rule matches the input at this position.
    InvalidToken,
    /// Zero dice, zero sides, or a count too large to represent.
    InvalidDice,
    /// A complete expression was followed by more tokens.
    TrailingInput,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty expression"),
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedEnd { expected } => {
                f.write_str("unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::InvalidToken => f.write_str("invalid token"),
            Self::InvalidDice => f.write_str("invalid dice literal"),
            Self::TrailingInput => f.write_str("unexpected trailing input"),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => write!(f, "{}", a),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}
