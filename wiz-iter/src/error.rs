use thiserror::Error;

/// Errors raised by the combinators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The two inputs of a zip have different lengths.
    #[error("zip: lengths differ ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
