//! The graph space: a sparse symmetric weighted association graph.
//!
//! Edges carry an affirmed (+1) or negated (−1) weight; an absent edge is
//! weight 0. The graph keeps its own lazily-grown word table, so edges may
//! involve words that are not (yet) globally registered — subject-private
//! graphs rely on this. Symmetry is enforced at the single mutation point:
//! linking (a, b) always links (b, a) with the same weight.

use std::collections::HashMap;
use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vocabulary::{Vocabulary, WordId};

/// Association weight of a present edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weight {
    /// Affirmed association (+1).
    Affirmed,
    /// Negated or contrasted association (−1).
    Negated,
}

impl Weight {
    /// Affirmed unless `negated`.
    #[must_use]
    pub fn from_negated(negated: bool) -> Self {
        if negated { Self::Negated } else { Self::Affirmed }
    }

    /// +1.0 or −1.0, the factor fed to the vector-space nudge.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::Affirmed => 1.0,
            Self::Negated => -1.0,
        }
    }
}

/// Sparse symmetric weighted adjacency over a private word table.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphSpace {
    words: Vocabulary,
    adjacency: Vec<HashMap<WordId, Weight>>,
}

impl GraphSpace {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a word in the graph's local table without linking it.
    ///
    /// Idempotent; returns the local id either way.
    pub fn emplace(&mut self, word: &str) -> WordId {
        let id = self.words.intern(word);
        if id.index() as usize == self.adjacency.len() {
            self.adjacency.push(HashMap::new());
        }
        id
    }

    /// Returns true if the word is in the graph's local table.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Sets the edge between two words, registering either lazily.
    ///
    /// The edge is stored in both directions atomically; linking a word to
    /// itself stores a single self-edge.
    pub fn link(&mut self, word1: &str, word2: &str, weight: Weight) {
        let a = self.emplace(word1);
        let b = self.emplace(word2);
        self.adjacency[a.index() as usize].insert(b, weight);
        self.adjacency[b.index() as usize].insert(a, weight);
    }

    /// Weight of the edge between two words, or `None` when absent.
    #[must_use]
    pub fn weight(&self, word1: &str, word2: &str) -> Option<Weight> {
        let a = self.words.id_of(word1)?;
        let b = self.words.id_of(word2)?;
        self.adjacency[a.index() as usize].get(&b).copied()
    }

    /// Neighbors of a word with their weights, in local-id order.
    ///
    /// Empty for an unknown word.
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<(&str, Weight)> {
        let Some(id) = self.words.id_of(word) else {
            return Vec::new();
        };
        let row = &self.adjacency[id.index() as usize];
        let mut entries: Vec<(WordId, Weight)> = row.iter().map(|(&n, &w)| (n, w)).collect();
        entries.sort_by_key(|(n, _)| *n);
        entries
            .into_iter()
            .filter_map(|(n, w)| self.words.word(n).map(|word| (word, w)))
            .collect()
    }

    /// Number of words in the local table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the local word table in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter()
    }

    /// Renders each word with its neighbor list, negated neighbors prefixed
    /// with "not", one entry per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for word in self.words.iter() {
            let neighbors = self
                .neighbors(word)
                .into_iter()
                .map(|(n, w)| match w {
                    Weight::Affirmed => n.to_string(),
                    Weight::Negated => format!("not {n}"),
                })
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "{word}: [{neighbors}]");
        }
        out
    }
}
