use thiserror::Error;

/// Errors raised by the collection helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested position does not exist in the sequence.
    ///
    /// Carries the index as the caller passed it, before negative
    /// indices were resolved.
    #[error("nth: {0} out of slice bounds")]
    OutOfBounds(isize),
    /// An error from the lazy combinators.
    #[error(transparent)]
    Iter(#[from] wiz_iter::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
