use super::{error::SimError, session::RollSession, SResult};
use crate::common::{DieValue, Float, UInt};
use std::collections::BTreeMap;

/// The five figures shown under the table. Mean and median are derived from
/// the session's flat value sequence; the match tallies are carried over
/// from the session untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub mean: Float,
    pub median: Float,
    pub mode: DieValue,
    pub doubles: UInt,
    pub triples: UInt,
}

impl SessionStats {
    pub fn compute(session: &RollSession) -> SResult<Self> {
        let values = session.flat_values();
        if values.is_empty() {
            return Err(SimError::EmptyInput);
        }
        Ok(Self {
            mean: mean_of(&values),
            median: median_of(&values),
            mode: mode_of(&values),
            doubles: session.doubles(),
            triples: session.triples(),
        })
    }
}

fn mean_of(values: &[DieValue]) -> Float {
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    round2(sum as Float / values.len() as Float)
}

// round half-up to two decimal places
fn round2(x: Float) -> Float {
    (x * 100.0).round() / 100.0
}

/// Median over a sorted copy; the caller's roll ordering is left alone
/// since the table renders rows in roll order.
fn median_of(values: &[DieValue]) -> Float {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Float::from(sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        Float::from(sorted[mid])
    }
}

// highest frequency wins; a tie goes to the smallest value
fn mode_of(values: &[DieValue]) -> DieValue {
    let mut counts = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0usize) += 1;
    }
    let mut best = (0usize, 0);
    for (&value, &count) in &counts {
        if count > best.0 {
            best = (count, value);
        }
    }
    best.1
}
