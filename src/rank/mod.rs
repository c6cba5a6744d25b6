//! Rank generation: sortable string keys for reorderable lists
//!
//! This module contains the pieces that make up a rank:
//!
//! - **Alphabet:** the 62 ordered symbols ranks are written in
//! - **Position:** the rank value (`bucket`, `major`, optional `minor`)
//! - **Splitter:** N new ranks strictly between two neighbours
//! - **Padding:** keeps every rank of one batch the same length
//! - **Format:** the `bucket|major[:minor]` textual encoding
//!
//! # References
//!
//! - Atlassian LexoRank, as used for issue ordering in Jira

pub mod alphabet;
pub mod format;
pub mod padding;
pub mod position;
pub mod splitter;

pub use format::{format_position, parse_position};
pub use position::{Bucket, Position, BUCKET_COUNT};
pub use splitter::{generate_rank, generate_ranks, split_interval, IntervalSplitter};
