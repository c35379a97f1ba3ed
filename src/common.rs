use std::fmt::{self, Write};
use std::num::{NonZeroU32, NonZeroUsize};
pub use vec1::vec1;

pub type Float = f64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// The number of dice in a roll.
pub type Num = NonZeroUsize;

/// The number of faces on each die of a roll.
pub type Sides = NonZeroUInt;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Binding strength of a [`BinaryOperator`]. Higher binds tighter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Precedence {
    Additive,
    Multiplicative,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div => Precedence::Multiplicative,
        }
    }

    /// `/` is true floating-point division; dividing by zero yields an infinity or NaN.
    pub fn apply(self, l: Float, r: Float) -> Float {
        match self {
            Self::Add => l + r,
            Self::Sub => l - r,
            Self::Mul => l * r,
            Self::Div => l / r,
        }
    }

    /// Whether the operator's right operand counts against the running value,
    /// i.e. `-` within the additive group and `/` within the multiplicative one.
    pub(crate) const fn is_inverse(self) -> bool {
        matches!(self, Self::Sub | Self::Div)
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

/// Selects how the dice of a single roll are aggregated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// Sum every die.
    #[default]
    Sum,
    /// Keep only the highest die (`h`).
    KeepHighest,
    /// Keep only the lowest die (`l`).
    KeepLowest,
}

impl Modifier {
    pub(crate) fn from_suffix(c: Option<char>) -> Option<Self> {
        Some(match c {
            None => Self::Sum,
            Some('h') => Self::KeepHighest,
            Some('l') => Self::KeepLowest,
            Some(_) => return None,
        })
    }

    pub(crate) fn aggregate(self, rolls: impl IntoIterator<Item = UInt>) -> u64 {
        let values = rolls.into_iter().map(u64::from);
        match self {
            Self::Sum => values.fold(0, u64::saturating_add),
            Self::KeepHighest => values.max().unwrap_or(0),
            Self::KeepLowest => values.min().unwrap_or(0),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => Ok(()),
            Self::KeepHighest => f.write_char('h'),
            Self::KeepLowest => f.write_char('l'),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    pub use super::*;
    pub(crate) use crate::parse::ast::*;
    pub use BinaryOperator::*;

    pub trait ExpressionExt: Sized {
        fn lit(x: Float) -> Self;

        fn var(name: &str) -> Self;

        fn dice(num: usize, sides: UInt) -> Self;

        fn op_dice(num: usize, sides: UInt, modifier: Modifier) -> Self;

        fn bin(l: Self, op: BinaryOperator, r: Self) -> Self;
    }

    impl ExpressionExt for Expression {
        fn lit(x: Float) -> Self {
            Literal::new(x).into()
        }

        fn var(name: &str) -> Self {
            Reference::new(name).into()
        }

        fn dice(num: usize, sides: UInt) -> Self {
            Self::op_dice(num, sides, Modifier::Sum)
        }

        fn op_dice(num: usize, sides: UInt, modifier: Modifier) -> Self {
            let num = Num::new(num).unwrap();
            let sides = Sides::new(sides).unwrap();
            Roll::new(num, sides, modifier).into()
        }

        fn bin(l: Self, op: BinaryOperator, r: Self) -> Self {
            Operation::new(op, l, r).into()
        }
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(Modifier::Sum.aggregate([3, 1, 6]), 10);
        assert_eq!(Modifier::KeepHighest.aggregate([3, 1, 6]), 6);
        assert_eq!(Modifier::KeepLowest.aggregate([3, 1, 6]), 1);
        let big = (0..1000).map(|_| UInt::MAX);
        assert_eq!(Modifier::Sum.aggregate(big), 1000 * u64::from(UInt::MAX));
    }

    #[test]
    fn test_precedence_order() {
        assert!(Mul.precedence() > Add.precedence());
        assert_eq!(Sub.precedence(), Add.precedence());
        assert_eq!(Div.precedence(), Mul.precedence());
    }
}
