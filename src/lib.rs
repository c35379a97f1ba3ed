//! Parses, evaluates, and simplifies tabletop dice expressions such as `2d20h + DEX - 1`.
//!
//! ```
//! use dice_calc::{parse, roller};
//! use std::collections::HashMap;
//!
//! let expr = parse("2d20h + DEX - 1 + 2").unwrap();
//! assert_eq!(expr.simplify().to_string(), "2d20h + DEX + 1");
//!
//! let vars = HashMap::from([("DEX".to_string(), 3.0)]);
//! let mut rolls = Vec::new();
//! let total = expr.calc(&vars, roller::from_fn(|| 0.5), Some(&mut rolls));
//! assert_eq!(total, 11.0 + 3.0 - 1.0 + 2.0);
//! assert_eq!(rolls[0].rolls.as_slice(), &[11, 11]);
//! ```

mod common;
mod parse;
mod roll;
mod scope;
mod simplify;
mod stringify;

pub use common::{BinaryOperator, Float, Modifier, NonEmpty, Num, Precedence, Sides, UInt};
pub use parse::ast::{self, Expression};
pub use parse::visit::{Accept, Visitor};
pub use parse::{parse, tokenize, ParseError, ParseErrorKind, Punct, Token, TokenKind, Tokens};
pub use roll::{roller, DefaultRoller, RollContext, RollResult, Roller};
pub use scope::Scope;
