use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A caller supplied a value that breaks a construction invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
