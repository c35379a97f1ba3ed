use super::error::ParseErrorKind;
use super::visit::{Accept, Visitor};
use crate::common::*;
use std::str::FromStr;

/// A parsed dice expression.
///
/// Trees are immutable once built: evaluation and simplification never modify a node,
/// they produce a value or a new tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[enum_dispatch::enum_dispatch(Accept)]
pub enum Expression {
    Literal(Literal),
    Reference(Reference),
    Roll(Roll),
    Operation(Operation),
}

impl Expression {
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn as_literal(&self) -> Option<Float> {
        match self {
            Self::Literal(lit) => Some(lit.value),
            _ => None,
        }
    }

    /// The precedence of the top-level operator, or `None` for an operand.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Operation(op) => Some(op.op.precedence()),
            _ => None,
        }
    }

    /// Names of every variable referenced, in left-to-right order. Repeats are kept.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Reference(r) => names.push(&r.name),
            Self::Operation(op) => {
                op.left.collect_references(names);
                op.right.collect_references(names);
            }
            Self::Literal(_) | Self::Roll(_) => {}
        }
    }

    pub fn has_rolls(&self) -> bool {
        match self {
            Self::Roll(_) => true,
            Self::Operation(op) => op.left.has_rolls() || op.right.has_rolls(),
            Self::Literal(_) | Self::Reference(_) => false,
        }
    }
}

impl From<Float> for Expression {
    fn from(x: Float) -> Self {
        Literal::new(x).into()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    pub value: Float,
}

impl Literal {
    pub fn new(value: Float) -> Self {
        Self { value }
    }
}

/// A named variable, resolved against a [`Scope`](crate::Scope) when evaluated.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    pub name: String,
}

impl Reference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    pub num: Num,
    pub sides: Sides,
    pub modifier: Modifier,
}

impl Roll {
    pub fn new(num: Num, sides: Sides, modifier: Modifier) -> Self {
        Self {
            num,
            sides,
            modifier,
        }
    }
}

impl FromStr for Roll {
    type Err = ParseErrorKind;

    /// Parses `<num>d<sides>` with an optional trailing `h` or `l`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, rest) = s.split_once('d').ok_or(ParseErrorKind::InvalidDice)?;
        let sides_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (sides, suffix) = rest.split_at(sides_end);

        let mut suffix = suffix.chars();
        let modifier = Modifier::from_suffix(suffix.next()).ok_or(ParseErrorKind::InvalidDice)?;
        if suffix.next().is_some() {
            return Err(ParseErrorKind::InvalidDice);
        }

        let num = num.parse().map_err(|_| ParseErrorKind::InvalidDice)?;
        let sides = sides.parse().map_err(|_| ParseErrorKind::InvalidDice)?;
        Ok(Self::new(num, sides, modifier))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    pub op: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Operation {
    pub fn new(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
