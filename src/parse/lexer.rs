use super::ast::{Expression, Literal, Reference, Roll};
use super::error::{ParseError, ParseErrorKind};
use crate::common::*;
use logos::{Logos, SpannedIter};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;
use std::ops::Range;

pub(crate) type Lexer<'a> = PeekableLexer<'a, logos::Lexer<'a, TokenKind>, TokenKind>;

pub(crate) fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$.]*")]
    Symbol,

    #[regex(r"0*[1-9][0-9]*d0*[1-9][0-9]*[hl]?")]
    Dice,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[regex(r"(0+d[0-9]+|[0-9]+d0+)[hl]?")]
    ErrBadDice,

    #[regex(r"[ \t\r\n\f\v]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Symbol => "<symbol>",
            Dice => "<dice>",
            Number => "<number>",
            LeftParen => "'('",
            RightParen => "')'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            ErrBadDice | Error => "<error>",
        }
    }

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }

    /// The error reported when this kind is found, if it only exists to flag bad input.
    pub(crate) fn as_lex_error(&self) -> Option<ParseErrorKind> {
        match self {
            Self::Error => Some(ParseErrorKind::InvalidToken),
            Self::ErrBadDice => Some(ParseErrorKind::InvalidDice),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuation: the four operators and the two parentheses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Punct {
    Op(BinaryOperator),
    LeftParen,
    RightParen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A reference, roll, or literal.
    Operand(Expression),
    Punct(Punct),
}

/// A lazy stream of [`Token`]s over some input.
///
/// Whitespace is skipped. A `-` directly followed by digits is the sign of a literal,
/// so `5-3` yields the literals `5` and `-3`.
pub struct Tokens<'a> {
    source: &'a str,
    inner: SpannedIter<'a, TokenKind>,
}

/// Splits `s` into tokens, stopping at the end of input.
///
/// # Examples
/// ```
/// # use dice_calc::{tokenize, Token};
/// let tokens: Vec<_> = tokenize("2d20h + DEX").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert!(matches!(tokens[0], Token::Operand(_)));
/// ```
pub fn tokenize(s: &str) -> Tokens<'_> {
    Tokens {
        source: s,
        inner: TokenKind::lexer(s).spanned(),
    }
}

impl<'a> Tokens<'a> {
    fn token(&self, kind: TokenKind, span: Range<usize>) -> Result<Token, ParseError> {
        let slice = &self.source[span.clone()];
        let fail = |kind| ParseError::new(kind, self.source, span.clone());

        if let Some(err) = kind.as_lex_error() {
            return Err(fail(err));
        }
        if let Some(op) = kind.as_binary_op() {
            return Ok(Token::Punct(Punct::Op(op)));
        }

        Ok(match kind {
            TokenKind::LeftParen => Token::Punct(Punct::LeftParen),
            TokenKind::RightParen => Token::Punct(Punct::RightParen),
            TokenKind::Symbol => Token::Operand(Reference::new(slice).into()),
            TokenKind::Dice => Token::Operand(slice.parse::<Roll>().map_err(fail)?.into()),
            TokenKind::Number => {
                let value = slice
                    .parse::<Float>()
                    .map_err(|_| fail(ParseErrorKind::InvalidToken))?;
                Token::Operand(Literal::new(value).into())
            }
            _ => return Err(fail(ParseErrorKind::InvalidToken)),
        })
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, span) = self.inner.next()?;
        Some(self.token(kind, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::ExpressionExt;
    use pretty_assertions::assert_eq;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    fn check(s: &str, expected: Vec<Token>) {
        let actual = tokenize(s).collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_lex_kinds() {
        use TokenKind::*;
        assert_eq!(kinds("2d20h + DEX - 1"), vec![Dice, Plus, Symbol, Minus, Number]);
        assert_eq!(kinds("(a.b_$1*3.25)/x"), vec![LeftParen, Symbol, Star, Number, RightParen, Slash, Symbol]);
        assert_eq!(kinds(" \t\n 1d6l \r\n"), vec![Dice]);
        assert_eq!(kinds("d20"), vec![Symbol]);
        assert_eq!(kinds("5-3"), vec![Number, Number]);
        assert_eq!(kinds("a -1"), vec![Symbol, Number]);
        assert_eq!(kinds("5 - -3"), vec![Number, Minus, Number]);
        assert_eq!(kinds("- 3"), vec![Minus, Number]);
    }

    #[test]
    fn test_lex_boundaries() {
        use TokenKind::*;
        assert_eq!(kinds("3abc"), vec![Number, Symbol]);
        assert_eq!(kinds("2d20hx"), vec![Dice, Symbol]);
        assert_eq!(kinds("2e5"), vec![Number, Symbol]);
        assert_eq!(kinds("0d6"), vec![ErrBadDice]);
        assert_eq!(kinds("4d0"), vec![ErrBadDice]);
        assert_eq!(kinds("3 # 4"), vec![Number, Error, Number]);
    }

    #[test]
    fn test_tokenize() {
        check(
            "2d20h + DEX",
            vec![
                Token::Operand(Expression::op_dice(2, 20, Modifier::KeepHighest)),
                Token::Punct(Punct::Op(BinaryOperator::Add)),
                Token::Operand(Expression::var("DEX")),
            ],
        );
        check(
            "(1.5)",
            vec![
                Token::Punct(Punct::LeftParen),
                Token::Operand(Expression::lit(1.5)),
                Token::Punct(Punct::RightParen),
            ],
        );
        check("-3", vec![Token::Operand(Expression::lit(-3.0))]);
        check(
            "2-0.5",
            vec![
                Token::Operand(Expression::lit(2.0)),
                Token::Operand(Expression::lit(-0.5)),
            ],
        );
        check("", vec![]);
    }

    #[test]
    fn test_tokenize_error() {
        let mut tokens = tokenize("1 + ? 2");
        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_ok());
        let err = tokens.next().unwrap().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidToken);
        assert_eq!(err.span, 4..5);
        assert_eq!(err.remainder, "? 2");

        let err = tokenize("0d4").next().unwrap().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDice);
    }
}
