mod ctx;
mod result;
pub mod roller;

use crate::common::Float;
use crate::parse::ast;
use crate::scope::Scope;

pub use ctx::{DefaultRoller, RollContext};
pub use result::RollResult;
pub use roller::Roller;

impl ast::Expression {
    /// Evaluates the expression, rolling each dice term once.
    ///
    /// When `sink` is given, one [`RollResult`] per dice term is appended to it in
    /// left-to-right order.
    pub fn calc<S, R>(&self, scope: &S, roller: R, sink: Option<&mut Vec<RollResult>>) -> Float
    where
        S: Scope + ?Sized,
        R: Roller,
    {
        let mut ctx = RollContext::new(scope, roller);
        if let Some(sink) = sink {
            ctx = ctx.with_sink(sink);
        }
        ctx.calc(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::roll::roller::StepRoller;
    use std::collections::BTreeMap;

    #[test]
    fn test_calc() {
        let vars = BTreeMap::from([("DEX".to_string(), 3.0)]);
        let expr = crate::parse("2d20h + DEX - 1").unwrap();
        let mut rolls = Vec::new();
        let total = expr.calc(&vars, StepRoller::new(4, 9), Some(&mut rolls));
        assert_eq!(total, 13.0 + 3.0 - 1.0);
        assert_eq!(rolls.len(), 1);
        assert_eq!(rolls[0].rolls.as_slice(), &[4, 13]);

        assert_eq!(expr.calc(&(), StepRoller::new(4, 9), None), 12.0);
    }
}
