//! The shared mutable indices threaded through every clause walker.
//!
//! All walkers mutate the same four structures; they are bundled into one
//! context object passed down the call chain explicitly, never held as
//! ambient state.

use lexweave_foundation::{AdjectiveIndex, GraphSpace, Token, VectorSpace, Vocabulary};

/// The global vocabulary, vector space, association graph, and adjective
/// index mutated by whichever walker currently holds the cursor.
#[derive(Clone, Debug, Default)]
pub struct SemanticSpaces {
    /// Global word registry.
    pub vocabulary: Vocabulary,
    /// Global vector space.
    pub vectors: VectorSpace,
    /// Global association graph.
    pub graph: GraphSpace,
    /// Global adjective index.
    pub adjectives: AdjectiveIndex,
}

impl SemanticSpaces {
    /// Creates empty spaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a word in the vocabulary.
    pub fn register_word(&mut self, word: &str) {
        self.vocabulary.intern(word);
    }

    /// Registers a word in the vector space (one-hot on a new dimension if
    /// unseen).
    pub fn register_vector(&mut self, word: &str) {
        self.vectors.emplace(word);
    }

    /// Registers a word in the graph's local table.
    pub fn register_graph_word(&mut self, word: &str) {
        self.graph.emplace(word);
    }

    /// Registers a word in the vocabulary, vector space, and graph at once.
    pub fn register_all(&mut self, word: &str) {
        self.register_word(word);
        self.register_vector(word);
        self.register_graph_word(word);
    }

    /// Registers an adjective token: surface and lemma go into the
    /// vocabulary and graph, and the pair into the adjective index.
    pub fn register_adjective(&mut self, token: &Token) {
        self.register_word(&token.surface);
        self.register_word(&token.lemma);
        self.register_graph_word(&token.surface);
        self.register_graph_word(&token.lemma);
        self.adjectives.add(&token.surface, &token.lemma);
    }
}
