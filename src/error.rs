//! Errors raised when a field of contestants (or a distribution derived from one) is unfit for use.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidField {
    #[error("invalid odds {odds} for {name}: odds must be positive")]
    InvalidOdds { name: String, odds: i64 },

    #[error("duplicate contestant {0}")]
    DuplicateContestant(String),

    #[error("no contestants in field")]
    EmptyField,

    #[error("invalid probability {prob} for {name}: must lie in [0, 1]")]
    InvalidProbability { name: String, prob: f64 },

    #[error("{0}")]
    UnnormalizedDistribution(#[from] WrongBooksum),
}

#[derive(Debug, Error, PartialEq)]
#[error("expected probabilities summing to 1 ± {tolerance}, got {actual}")]
pub struct WrongBooksum {
    pub actual: f64,
    pub tolerance: f64,
}
