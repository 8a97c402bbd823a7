mod ctx;
mod error;
mod roller;
mod session;
mod stats;

type SResult<T> = Result<T, SimError>;

pub use ctx::{DefaultRoller, SimContext, MAX_SESSION_ROLLS};
pub use error::SimError;
pub use roller::Roller;
pub use session::{RollRecord, RollSession};
pub use stats::SessionStats;

#[cfg(test)]
pub(crate) use roller::StepRoller;
