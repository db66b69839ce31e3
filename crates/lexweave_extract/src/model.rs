//! The global coordinator: corpus seeding and per-sentence dispatch.
//!
//! Seeding interns every distinct common-noun lemma across the corpus and
//! gives each its own one-hot dimension. Each sentence is then walked left
//! to right: a proper noun hands the cursor to the subject-clause walker, a
//! common noun to the noun-clause walker, and the coordinator resumes from
//! wherever the delegate stopped — the cursor never moves backward.

use lexweave_foundation::{GenderLexicon, Token};

use crate::context::SemanticSpaces;
use crate::subject::SubjectRegistry;
use crate::{noun_clause, subject_clause};

/// The complete semantic model built over a corpus.
#[derive(Clone, Debug, Default)]
pub struct SemanticModel {
    spaces: SemanticSpaces,
    subjects: SubjectRegistry,
    genders: GenderLexicon,
}

impl SemanticModel {
    /// Creates an empty model with an empty gender lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty model with the injected gender lexicon.
    #[must_use]
    pub fn with_genders(genders: GenderLexicon) -> Self {
        Self {
            genders,
            ..Self::default()
        }
    }

    /// Seeds the vocabulary, vector space, and graph with every distinct
    /// common-noun lemma in the corpus-wide token stream.
    pub fn seed<'a>(&mut self, corpus: impl IntoIterator<Item = &'a Token>) {
        for token in corpus {
            if token.is_common_noun() && !self.spaces.vocabulary.contains(&token.lemma) {
                self.spaces.register_all(&token.lemma);
            }
        }
    }

    /// Processes one sentence's tokens, dispatching to the clause walkers.
    pub fn process_sentence(&mut self, tokens: &[Token]) {
        let mut cursor = 0;
        while cursor < tokens.len() {
            let token = &tokens[cursor];
            let stop = if token.is_proper_noun() {
                subject_clause::walk(
                    tokens,
                    cursor,
                    &mut self.spaces,
                    &mut self.subjects,
                    &self.genders,
                )
            } else if token.is_common_noun() {
                noun_clause::walk(tokens, cursor, &mut self.spaces)
            } else {
                cursor
            };
            cursor = stop.max(cursor) + 1;
        }
    }

    /// Seeds from the whole corpus, then processes every sentence in order.
    pub fn build(&mut self, sentences: &[Vec<Token>]) {
        self.seed(sentences.iter().flatten());
        for sentence in sentences {
            self.process_sentence(sentence);
        }
    }

    /// The shared global indices.
    #[must_use]
    pub fn spaces(&self) -> &SemanticSpaces {
        &self.spaces
    }

    /// The subject registry.
    #[must_use]
    pub fn subjects(&self) -> &SubjectRegistry {
        &self.subjects
    }

    /// Renders the vector space for presentation.
    #[must_use]
    pub fn render_vectors(&self) -> String {
        self.spaces.vectors.render()
    }

    /// Renders the global association graph for presentation.
    #[must_use]
    pub fn render_graph(&self) -> String {
        self.spaces.graph.render()
    }

    /// Renders every subject for presentation.
    #[must_use]
    pub fn render_subjects(&self) -> String {
        self.subjects.render()
    }
}
