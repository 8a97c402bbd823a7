use crate::sim::SimError;
use std::fmt;
use std::num::NonZeroU32;
pub use vec1::vec1;

pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type Float = f64;

/// The value shown by a single die, always in `1..=DIE_SIDES`.
pub type DieValue = UInt;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Number of faces on the simulated dice.
pub const DIE_SIDES: UInt = 6;

/// The most dice a single roll may contain.
pub const MAX_DICE: UInt = 3;

/// How many dice are thrown per roll. Only 1, 2, or 3 are legal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DieCount(UInt);

impl DieCount {
    pub fn new(n: UInt) -> Result<Self, SimError> {
        if (1..=MAX_DICE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(SimError::invalid_parameter(format!(
                "die count must be between 1 and {}, got {}",
                MAX_DICE, n
            )))
        }
    }

    pub fn get(self) -> UInt {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DieCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<UInt> for DieCount {
    type Error = SimError;

    fn try_from(n: UInt) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_count_new() {
        for n in 1..=MAX_DICE {
            assert_eq!(DieCount::new(n).unwrap().get(), n);
        }
        assert!(matches!(DieCount::new(0), Err(SimError::InvalidParameter(_))));
        assert!(matches!(DieCount::new(4), Err(SimError::InvalidParameter(_))));
    }

    #[test]
    fn test_die_count_display() {
        assert_eq!(DieCount::new(2).unwrap().to_string(), "2");
    }
}
