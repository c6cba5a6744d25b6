//! WASM bindings for LexoRank
//!
//! This module provides JavaScript-friendly bindings for rank generation.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::{generate_ranks_js, WasmPosition};
