//! LexoRank Core - Sortable rank keys for reorderable lists
//!
//! Items in an ordered collection each store one rank string and are sorted
//! by plain byte-wise comparison. Inserting or moving items only computes
//! new ranks between the neighbours; existing items are never renumbered.
//!
//! It implements:
//! - Rank values with bucket partitioning and minor tiebreakers
//! - Batch generation of evenly spaced ranks between two bounds
//! - The `bucket|major[:minor]` textual encoding
//!
//! # Examples
//!
//! ```rust
//! use lexorank_core::{generate_ranks, parse_position, RankError};
//!
//! let first = parse_position("0|0").unwrap();
//! let last = parse_position("0|z").unwrap();
//!
//! // Insert three items between `first` and `last`
//! let ranks = generate_ranks(Some(&first), Some(&last), 3).unwrap();
//! let text: Vec<String> = ranks.iter().map(|p| p.to_string()).collect();
//! assert_eq!(text, vec!["0|F", "0|U", "0|j"]);
//!
//! // Adjacent ranks leave no room: the caller re-ranks a wider window
//! let a = parse_position("0|U").unwrap();
//! let b = parse_position("0|V").unwrap();
//! assert_eq!(generate_ranks(Some(&a), Some(&b), 1), Err(RankError::NoRoomAvailable));
//! ```

pub mod error;
pub mod rank;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use error::{RankError, Result};
pub use rank::alphabet::MAX_BATCH;
pub use rank::{
    format_position, generate_rank, generate_ranks, parse_position, split_interval, Bucket,
    IntervalSplitter, Position,
};
