//! Simulates rolling one to three six-sided dice, tabulates every roll, and
//! reports mean, median, mode, and the doubles/triples tallies.

mod common;
mod page;
mod request;
mod sim;

pub use common::{DieCount, DieValue, Float, UInt, DIE_SIDES, MAX_DICE};
pub use page::{MarkdownStringifier, Page, ResultsTable, SimpleStringifier, StatsPanel, Stringify};
pub use request::{ParseRequestError, Request};
pub use sim::{
    DefaultRoller, Roller, RollRecord, RollSession, SessionStats, SimContext, SimError,
    MAX_SESSION_ROLLS,
};

/// The result of one invocation. `stats` is absent when the session has no
/// values to aggregate (a zero-roll run), in which case the page renders an
/// empty table and a blank panel.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub session: RollSession,
    pub stats: Option<SessionStats>,
}

/// Simulate with the thread-local generator and the default roll cap.
pub fn simulate(die_count: DieCount, roll_count: usize) -> Result<Outcome, SimError> {
    let mut ctx = SimContext::default();
    outcome(ctx.run(die_count, roll_count)?)
}

/// Simulate with an explicit roller, unbounded.
pub fn simulate_with<R: Roller>(
    die_count: DieCount,
    roll_count: usize,
    roller: R,
) -> Result<Outcome, SimError> {
    let mut ctx = SimContext::new_unbounded(roller);
    outcome(ctx.run(die_count, roll_count)?)
}

fn outcome(session: RollSession) -> Result<Outcome, SimError> {
    let stats = match SessionStats::compute(&session) {
        Ok(stats) => Some(stats),
        Err(SimError::EmptyInput) => None,
        Err(e) => return Err(e),
    };
    Ok(Outcome { session, stats })
}
