use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SimError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("no values to aggregate")]
    EmptyInput,
    #[error("too many dice rolled")]
    TooManyRolls,
}

impl SimError {
    pub fn invalid_parameter(msg: impl ToString) -> Self {
        Self::InvalidParameter(msg.to_string())
    }
}
