//! Clause walkers and orchestration for the lexweave semantic model.
//!
//! Each walker is a cursor-based pass over one sentence's tokens:
//!
//! - [`phrase`] - Contiguous noun / proper-noun phrase extraction
//! - [`noun_clause`] - Common-noun clauses feeding the global indices
//! - [`subject_clause`] - Proper-noun clauses feeding subject-private graphs
//! - [`attribute`] - Possession/quantity sub-clauses producing [`Attribute`]s
//! - [`agglomerate`] - Coordinated-adjective groups
//! - [`model`] - Corpus seeding and per-sentence dispatch
//!
//! Walkers share the same mutable indices through an explicit
//! [`SemanticSpaces`] context and hand the cursor back by returning their
//! stop index; the cursor never moves backward.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agglomerate;
pub mod attribute;
pub mod context;
pub mod model;
pub mod noun_clause;
pub mod phrase;
pub mod subject;
pub mod subject_clause;

pub use agglomerate::{Agglomerate, AgglomerateKind};
pub use attribute::Attribute;
pub use context::SemanticSpaces;
pub use model::SemanticModel;
pub use phrase::{Phrase, PhraseMode};
pub use subject::{Subject, SubjectRegistry};
