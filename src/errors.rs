use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // sentinels own i32::MIN and i32::MAX, nothing else may take them.
    #[error("year {0} is outside of the indexable domain")]
    DomainBounds(i32),

    #[error("invalid range: first {first} is greater than last {last}")]
    InvalidRange { first: i32, last: i32 },

    #[error("invalid options {0}")]
    InvalidOptions(String),

    #[error("illegal state {0}")]
    IllegalState(String),

    // SetLoggerError isn't cloneable, so only the message is kept
    #[error("logger error: {0}")]
    Logger(String),
}

impl From<log::SetLoggerError> for Error {
    fn from(value: log::SetLoggerError) -> Self {
        Error::Logger(value.to_string())
    }
}
