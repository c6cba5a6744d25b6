//! Error types for lexorank-core

use thiserror::Error;

/// Result type alias using our error
pub type Result<T> = std::result::Result<T, RankError>;

/// Errors produced while generating or parsing ranks
///
/// All variants are recoverable. `NoRoomAvailable` in particular is an
/// expected outcome: the caller re-ranks a wider window of items and retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// More ranks requested than fit between two adjacent symbols in one pass
    #[error("Batch of {requested} ranks exceeds the maximum of {max}")]
    BatchTooLarge { requested: usize, max: usize },

    /// Bounds are equal, inverted, or adjacent at the reachable precision
    #[error("No room available between the given bounds")]
    NoRoomAvailable,

    /// Text does not follow the `bucket|major[:minor]` grammar
    #[error("Invalid rank format: {0}")]
    InvalidFormat(String),
}
