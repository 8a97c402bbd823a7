use crate::common::DieCount;
use crate::sim::SimError;
use std::str::FromStr;
use thiserror::Error;

/// One submission of the input form: how many dice, rolled how many times.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Request {
    pub die_count: DieCount,
    pub roll_count: usize,
}

impl FromStr for Request {
    type Err = ParseRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let dice = fields.next().ok_or(ParseRequestError::MissingField)?;
        let rolls = fields.next().ok_or(ParseRequestError::MissingField)?;
        if fields.next().is_some() {
            return Err(ParseRequestError::TrailingInput);
        }
        let die_count = dice
            .parse()
            .map_err(ParseRequestError::InvalidDieCount)
            .and_then(|n| DieCount::new(n).map_err(ParseRequestError::from))?;
        let roll_count = rolls.parse().map_err(ParseRequestError::InvalidRollCount)?;
        Ok(Self {
            die_count,
            roll_count,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseRequestError {
    #[error("expected \"<dice> <rolls>\"")]
    MissingField,
    #[error("unexpected input after \"<dice> <rolls>\"")]
    TrailingInput,
    #[error("invalid die count: {0}")]
    InvalidDieCount(std::num::ParseIntError),
    #[error("invalid roll count: {0}")]
    InvalidRollCount(std::num::ParseIntError),
    #[error("{0}")]
    Rejected(#[from] SimError),
}
