use crate::common::{Float, Sides, UInt};
use rand::Rng;

/// A source of dice results.
///
/// Implementors only need to provide uniform samples in `[0, 1)`; [`Roller::roll`] maps
/// them onto a die. Every [`rand::Rng`] is a `Roller`, and [`from_fn`] adapts a plain
/// closure.
pub trait Roller {
    /// A uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> Float;

    /// A uniform integer in `[1, sides]`.
    fn roll(&mut self, sides: Sides) -> UInt {
        let sides = sides.get();
        let drawn = (self.next_unit() * Float::from(sides)).floor();
        // `u * sides` can round up to `sides` for `u` just below 1.
        (drawn as UInt).saturating_add(1).min(sides)
    }
}

impl<R: Rng> Roller for R {
    fn next_unit(&mut self) -> Float {
        self.gen::<Float>()
    }
}

/// A [`Roller`] backed by a closure returning samples in `[0, 1)`.
#[derive(Debug, Copy, Clone)]
pub struct FnRoller<F>(F);

pub fn from_fn<F: FnMut() -> Float>(f: F) -> FnRoller<F> {
    FnRoller(f)
}

impl<F: FnMut() -> Float> Roller for FnRoller<F> {
    fn next_unit(&mut self) -> Float {
        (self.0)()
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Yields `initial`, `initial + step`, ... wrapped into each die's range, and counts
    /// how often it was asked.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
        pub calls: usize,
    }

    impl StepRoller {
        pub fn new(initial: UInt, step: UInt) -> Self {
            Self {
                current: initial,
                step,
                calls: 0,
            }
        }
    }

    impl Roller for StepRoller {
        fn next_unit(&mut self) -> Float {
            unreachable!("StepRoller overrides roll")
        }

        fn roll(&mut self, sides: Sides) -> UInt {
            self.calls += 1;
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn d(sides: UInt) -> Sides {
        Sides::new(sides).unwrap()
    }

    #[test]
    fn test_unit_mapping() {
        assert_eq!(from_fn(|| 0.0).roll(d(20)), 1);
        assert_eq!(from_fn(|| 0.5).roll(d(20)), 11);
        assert_eq!(from_fn(|| 0.175).roll(d(20)), 4);
        assert_eq!(from_fn(|| 0.999_999_999).roll(d(20)), 20);
        assert_eq!(from_fn(|| 1.0 - Float::EPSILON / 2.0).roll(d(UInt::MAX)), UInt::MAX);
    }

    #[test]
    fn test_rng_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for sides in [1, 2, 6, 20, 100] {
            for _ in 0..500 {
                let x = rng.roll(d(sides));
                assert!((1..=sides).contains(&x));
            }
        }
    }

    #[test]
    fn test_step_roller() {
        let mut roller = StepRoller::new(5, 1);
        let rolls: Vec<_> = (0..4).map(|_| roller.roll(d(6))).collect();
        assert_eq!(rolls, vec![5, 6, 1, 2]);
        assert_eq!(roller.calls, 4);
    }
}
