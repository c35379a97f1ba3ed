pub mod ast;
mod error;
mod lexer;
mod parser;
pub mod visit;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{tokenize, Punct, Token, TokenKind, Tokens};

/// Parses a dice expression such as `2d20h + DEX - 1`.
///
/// Surrounding whitespace is ignored. Parsing is all-or-nothing: any invalid character,
/// unbalanced parenthesis, missing operand, or trailing token fails with a [`ParseError`].
///
/// # Examples
/// ```
/// # use dice_calc::parse;
/// let expr = parse(" (1 + 2) * a ").unwrap();
/// assert_eq!(expr.to_string(), "(1 + 2) * a");
/// assert!(parse("1 + ").is_err());
/// ```
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    parser::Parser::new(s).parse()
}

impl std::str::FromStr for ast::Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
