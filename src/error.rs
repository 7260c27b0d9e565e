use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispersionError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DispersionError {
    /// The statistic is undefined for the given input, e.g. an empty sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
