//! Error types shared across the crate.

use thiserror::Error;

/// Error variants raised by construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit source did not yield the number of bits it advertised.
    #[error("invalid size: expected {expected} bits, but the source yielded {actual}")]
    InvalidSize {
        /// Number of bits the caller declared.
        expected: usize,
        /// Number of bits actually produced.
        actual: usize,
    },

    /// A query argument was outside the structure's bounds.
    #[error("argument out of range: {0}")]
    OutOfRange(usize),

    /// An internal consistency violation was detected during a query.
    ///
    /// This indicates a programming defect in the index construction, not a
    /// property of the input data.
    #[error("corrupted index: {0}")]
    Corrupted(&'static str),
}

/// A specialized [`Result`](std::result::Result) type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
