use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("Investment store unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid investment record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },
    #[error("Duplicate investment id {0}")]
    DuplicateId(i64),
    #[error("Calculation overflowed for investment {0}")]
    Overflow(i64),
    #[error("Failed reading investment seed: {0}")]
    Csv(#[from] csv::Error),
}
