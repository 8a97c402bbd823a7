use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// Source of die values. The blanket implementation hands every value in
/// `1..=sides` an equal chance.
pub trait Roller {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Deterministic roller stepping through face values. A step of 0 yields
    /// the same value forever.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
            Self {
                current: initial.get(),
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn roll(&mut self, sides: NonZeroUInt) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }
    }
}
