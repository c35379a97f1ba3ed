use crate::common::*;
use std::fmt;

/// The outcome of rolling one dice term.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollResult {
    pub sides: Sides,
    /// Every die, in the order it was rolled. Kept even when a modifier selects one.
    pub rolls: NonEmpty<UInt>,
    pub value: u64,
}

impl RollResult {
    pub(crate) fn new(sides: Sides, rolls: NonEmpty<UInt>, modifier: Modifier) -> Self {
        let value = modifier.aggregate(rolls.iter().copied());
        Self {
            sides,
            rolls,
            value,
        }
    }
}

impl fmt::Display for RollResult {
    /// Renders as `d20 [4, 17] = 17`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{} [", self.sides)?;
        for (i, x) in self.rolls.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "] = {}", self.value)
    }
}
