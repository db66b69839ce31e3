//! The vocabulary registry: an insertion-ordered word interner.
//!
//! Every word gets a stable [`WordId`] the first time it is seen; interning
//! the same string again returns the same id. The registry grows
//! monotonically and never shrinks. Identity is keyed by the string itself
//! with a collision-free reverse map, so two distinct words can never be
//! confused.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned word identifier.
///
/// Stable for the lifetime of the owning [`Vocabulary`]; ids are assigned in
/// insertion order starting at 0.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordId(pub(crate) u32);

impl WordId {
    /// Returns the raw index of this word.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.0)
    }
}

/// Insertion-ordered set of distinct words with stable interned ids.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vocabulary {
    /// Words in first-seen order.
    words: Vec<Arc<str>>,
    /// Map from word to its id.
    index: HashMap<Arc<str>, WordId>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a word, returning its [`WordId`].
    ///
    /// Re-interning an already-known word returns the existing id and leaves
    /// the registry unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the number of interned words exceeds `u32::MAX`.
    pub fn intern(&mut self, word: &str) -> WordId {
        if let Some(&id) = self.index.get(word) {
            return id;
        }

        let id = WordId(u32::try_from(self.words.len()).expect("too many interned words"));
        let arc: Arc<str> = word.into();
        self.words.push(arc.clone());
        self.index.insert(arc, id);
        id
    }

    /// Looks up the id of a word, if it has been interned.
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.index.get(word).copied()
    }

    /// Gets the word for an id.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Returns true if the word has been interned.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(AsRef::as_ref)
    }

    /// Unions another vocabulary into this one, preserving first-seen order.
    ///
    /// Words already present keep their ids; new words are appended in the
    /// other registry's order. `merge` with itself is a no-op.
    pub fn merge(&mut self, other: &Vocabulary) {
        for word in other.iter() {
            self.intern(word);
        }
    }
}
