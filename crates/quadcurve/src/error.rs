//! Error types used across the crate.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when external data enters the grid model.
///
/// The curve transforms themselves are total; only the boundary
/// constructors can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied cells do not form a square power-of-two grid.
    #[error("Grid shape error: {0}")]
    Shape(String),

    /// A numeric direction code outside the closed `0..=10` set.
    #[error("Unknown direction code {0} (valid codes are 0..=10)")]
    Code(u8),
}
