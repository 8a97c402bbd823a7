use super::{
    error::SimError,
    roller::Roller,
    session::{match_tally, RollRecord, RollSession},
    SResult,
};
use crate::common::{vec1, DieCount, NonZeroUInt, DIE_SIDES};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Default cap on die draws per session.
pub const MAX_SESSION_ROLLS: usize = 100_000;

pub struct SimContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> SimContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    fn count_rolls(&mut self, n: usize) -> SResult<()> {
        self.rolls += n;
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(SimError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Simulate `roll_count` rolls of `die_count` dice. The whole session is
    /// generated before any consumer sees it; the match tallies accumulate
    /// while the records are produced.
    pub fn run(&mut self, die_count: DieCount, roll_count: usize) -> SResult<RollSession> {
        let sides = NonZeroUInt::new(DIE_SIDES).unwrap();
        // don't reserve memory for a request the roll cap will refuse
        let capacity = self.max_rolls.map_or(roll_count, |max| roll_count.min(max));
        let mut records = Vec::with_capacity(capacity);
        let mut doubles = 0;
        let mut triples = 0;
        for _ in 0..roll_count {
            self.count_rolls(die_count.as_usize())?;
            let mut values = vec1![self.roller.roll(sides)];
            for _ in 1..die_count.as_usize() {
                values.push(self.roller.roll(sides));
            }
            let (d, t) = match_tally(&values);
            doubles += d;
            triples += t;
            records.push(RollRecord::new(values));
        }
        log::debug!(
            "session generated: {} rolls of {} dice, {} doubles, {} triples",
            roll_count,
            die_count,
            doubles,
            triples
        );
        Ok(RollSession::new(die_count, records, doubles, triples))
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(Some(MAX_SESSION_ROLLS), rand::thread_rng())
    }
}
