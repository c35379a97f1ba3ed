use super::{result::RollResult, roller::Roller};
use crate::common::*;
use crate::parse::{
    ast,
    visit::{Accept, Visitor},
};
use crate::scope::Scope;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Evaluates expressions against a variable [`Scope`], rolling dice with a [`Roller`].
///
/// Evaluation never fails: unbound names read as `0`, and division by zero follows
/// floating-point rules.
///
/// Dice counts are not capped. Without a sink, each roll is aggregated as it is drawn and
/// needs no memory per die. With a sink, every die is kept in its [`RollResult`], so a
/// term like `1000000000000d6` exhausts memory.
///
/// # Examples
/// ```
/// # use dice_calc::{parse, roller, RollContext};
/// # use std::collections::HashMap;
/// let vars = HashMap::from([("DEX".to_string(), 3.0)]);
/// let mut rolls = Vec::new();
/// let expr = parse("1d20 + DEX").unwrap();
///
/// let total = RollContext::new(&vars, roller::from_fn(|| 0.5))
///     .with_sink(&mut rolls)
///     .calc(&expr);
/// assert_eq!(total, 14.0);
/// assert_eq!(rolls[0].value, 11);
/// ```
pub struct RollContext<'s, S: ?Sized = (), R = DefaultRoller> {
    scope: &'s S,
    roller: R,
    sink: Option<&'s mut Vec<RollResult>>,
}

impl<'s, S: Scope + ?Sized, R: Roller> RollContext<'s, S, R> {
    pub fn new(scope: &'s S, roller: R) -> Self {
        Self {
            scope,
            roller,
            sink: None,
        }
    }

    /// Records every roll made by later evaluations into `sink`, in evaluation order.
    pub fn with_sink(mut self, sink: &'s mut Vec<RollResult>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn calc(&mut self, expr: &ast::Expression) -> Float {
        expr.accept(self)
    }

    fn roll_dice(&mut self, roll: &ast::Roll) -> RollResult {
        let first = self.roller.roll(roll.sides);
        let mut rolls = vec1![first];
        for _ in 1..roll.num.get() {
            rolls.push(self.roller.roll(roll.sides));
        }
        RollResult::new(roll.sides, rolls, roll.modifier)
    }
}

impl<S: Scope + ?Sized, R: Roller> Visitor for RollContext<'_, S, R> {
    type Output = Float;

    fn visit_literal(&mut self, lit: &ast::Literal) -> Self::Output {
        lit.value
    }

    fn visit_reference(&mut self, r: &ast::Reference) -> Self::Output {
        self.scope.get(&r.name).unwrap_or(0.0)
    }

    fn visit_roll(&mut self, roll: &ast::Roll) -> Self::Output {
        if self.sink.is_none() {
            let roller = &mut self.roller;
            let draws = (0..roll.num.get()).map(|_| roller.roll(roll.sides));
            return roll.modifier.aggregate(draws) as Float;
        }

        let result = self.roll_dice(roll);
        let value = result.value as Float;
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.push(result);
        }
        value
    }

    fn visit_operation(&mut self, op: &ast::Operation) -> Self::Output {
        let left = op.left.accept(self);
        let right = op.right.accept(self);
        op.op.apply(left, right)
    }
}
