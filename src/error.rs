//! Error types for u-combopt.

use thiserror::Error;

/// Result type alias for u-combopt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for u-combopt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The price table does not cover every piece length up to the rod length.
    #[error("price table has {available} entries, rod length {length} needs at least {length}")]
    PriceTableTooShort { length: usize, available: usize },

    /// Revenue for a sub-rod does not fit in an `i64`.
    #[error("revenue overflows i64 at rod length {length}")]
    ProfitOverflow { length: usize },
}
