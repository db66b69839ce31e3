//! lexweave - Deterministic semantic-model extraction from tagged tokens
//!
//! This crate re-exports all layers of the lexweave system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! ```text
//! Layer 1: lexweave_extract    — Clause walkers, subjects, coordinator
//!          lexweave_pattern    — Tag-grammar pattern engine
//! Layer 0: lexweave_foundation — Vocabulary, vectors, graph, shared types
//! ```

pub use lexweave_extract as extract;
pub use lexweave_foundation as foundation;
pub use lexweave_pattern as pattern;
