//! Error type shared by the ordered map and the classified collections.

use thiserror::Error;

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A strict lookup or removal named a key with no live mapping.
    #[error("key not found")]
    KeyNotFound,

    /// `pop` was called on a map with no live entries.
    #[error("collection is empty")]
    EmptyCollection,

    /// A staleness threshold that is negative, NaN or infinite.
    #[error("invalid staleness threshold {0}: must be finite and non-negative")]
    InvalidThreshold(f64),
}
