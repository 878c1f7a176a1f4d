use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PingError {
    /// The application handle was missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
