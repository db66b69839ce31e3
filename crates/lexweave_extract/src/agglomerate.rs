//! Coordinated-adjective agglomerates.
//!
//! A run of adjectives joined by "and"/"or", optionally negated, is
//! collected into an agglomerate pending application to a noun. A simple
//! agglomerate ("red or green") links the head to each adjective
//! independently; a complex one ("red and shiny") additionally synthesizes
//! one composite node named by joining the adjectives with " and ", links
//! it to the head, and links every member adjective to the composite.

use lexweave_foundation::{Token, Weight};

use crate::context::SemanticSpaces;

/// Whether the group was joined by "and" (complex) or not (simple).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgglomerateKind {
    /// Independent links from the head to each adjective.
    Simple,
    /// Adds a synthesized composite node for the whole group.
    Complex,
}

/// A collected run of coordinated adjectives pending application.
#[derive(Clone, Debug)]
pub struct Agglomerate {
    kind: AgglomerateKind,
    negated: bool,
    /// Where an in-run "not" split the accumulated adjectives: members
    /// before the split stay affirmed, members from it on are negated.
    negate_from: Option<usize>,
    head: String,
    adjectives: Vec<String>,
    /// Index of the last token the collection consumed; the caller resumes
    /// scanning right after it.
    pub resume: usize,
}

impl Agglomerate {
    /// Which kind of agglomerate this is.
    #[must_use]
    pub fn kind(&self) -> AgglomerateKind {
        self.kind
    }

    /// Returns true if the whole group is negated.
    #[must_use]
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The accumulated adjective surfaces.
    #[must_use]
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    /// Applies the group against its head alone.
    pub fn apply(&self, spaces: &mut SemanticSpaces) {
        match self.kind {
            AgglomerateKind::Simple => self.apply_simple(spaces),
            AgglomerateKind::Complex => self.apply_complex(spaces),
        }
    }

    fn apply_simple(&self, spaces: &mut SemanticSpaces) {
        if self.negated {
            match self.negate_from {
                // Negated before the run started.
                None => self.link_all(spaces, &self.adjectives, Weight::Negated),
                // Negated partway through the run.
                Some(split) => {
                    self.link_all(spaces, &self.adjectives[..split], Weight::Affirmed);
                    self.link_all(spaces, &self.adjectives[split..], Weight::Negated);
                }
            }
        } else {
            self.link_all(spaces, &self.adjectives, Weight::Affirmed);
        }
    }

    fn apply_complex(&self, spaces: &mut SemanticSpaces) {
        if self.negated {
            match self.negate_from {
                None => {
                    let composite = self.synthesize(spaces, &self.adjectives);
                    spaces.graph.link(&self.head, &composite, Weight::Negated);
                }
                Some(split) => {
                    let composite = self.synthesize(spaces, &self.adjectives[split..]);
                    spaces.graph.link(&self.head, &composite, Weight::Negated);
                    self.link_all(spaces, &self.adjectives[..split], Weight::Affirmed);
                }
            }
        } else {
            let composite = self.synthesize(spaces, &self.adjectives);
            spaces.graph.link(&self.head, &composite, Weight::Affirmed);
        }
    }

    /// Applies the group against a just-closed noun `gram` as well as the
    /// head. `post_update` marks a group collected after the noun had
    /// already been linked to the head, in which case the noun↔head edge is
    /// left alone.
    pub fn apply_to_noun(
        &self,
        spaces: &mut SemanticSpaces,
        gram: &str,
        negate_word: bool,
        post_update: bool,
    ) {
        match self.kind {
            AgglomerateKind::Simple => {
                self.apply_simple_to_noun(spaces, gram, negate_word, post_update);
            }
            AgglomerateKind::Complex => {
                self.apply_complex_to_noun(spaces, gram, post_update);
            }
        }
    }

    fn apply_simple_to_noun(
        &self,
        spaces: &mut SemanticSpaces,
        gram: &str,
        negate_word: bool,
        post_update: bool,
    ) {
        if self.negated {
            match self.negate_from {
                None => {
                    self.link_all(spaces, &self.adjectives, Weight::Negated);
                    for adjective in &self.adjectives {
                        spaces.graph.link(gram, adjective, Weight::Affirmed);
                    }
                    if !post_update {
                        spaces
                            .graph
                            .link(gram, &self.head, Weight::from_negated(negate_word));
                    }
                }
                Some(split) => {
                    // Partial reference behavior: the noun is not linked
                    // when the negation arrived mid-run.
                    self.link_all(spaces, &self.adjectives[..split], Weight::Affirmed);
                    self.link_all(spaces, &self.adjectives[split..], Weight::Negated);
                }
            }
        } else {
            self.link_all(spaces, &self.adjectives, Weight::Affirmed);
            for adjective in &self.adjectives {
                spaces.graph.link(gram, adjective, Weight::Affirmed);
            }
            spaces
                .graph
                .link(gram, &self.head, Weight::from_negated(negate_word));
        }
    }

    fn apply_complex_to_noun(&self, spaces: &mut SemanticSpaces, gram: &str, post_update: bool) {
        if self.negated {
            match self.negate_from {
                None => {
                    let composite = self.synthesize(spaces, &self.adjectives);
                    spaces.graph.link(&self.head, &composite, Weight::Negated);
                    spaces.graph.link(gram, &composite, Weight::Affirmed);
                    if !post_update {
                        spaces.graph.link(gram, &self.head, Weight::Negated);
                    }
                }
                Some(split) => {
                    let composite = self.synthesize(spaces, &self.adjectives[split..]);
                    spaces.graph.link(&self.head, &composite, Weight::Negated);
                    self.link_all(spaces, &self.adjectives[..split], Weight::Affirmed);
                    for adjective in &self.adjectives[..split] {
                        spaces.graph.link(gram, adjective, Weight::Affirmed);
                    }
                    spaces.graph.link(gram, &composite, Weight::Negated);
                    spaces.graph.link(gram, &self.head, Weight::Affirmed);
                }
            }
        } else {
            let composite = self.synthesize(spaces, &self.adjectives);
            spaces.graph.link(&self.head, &composite, Weight::Affirmed);
            spaces.graph.link(gram, &composite, Weight::Affirmed);
            spaces.graph.link(gram, &self.head, Weight::Affirmed);
        }
    }

    /// Registers the " and "-joined composite node and links every member
    /// adjective to it.
    fn synthesize(&self, spaces: &mut SemanticSpaces, members: &[String]) -> String {
        let composite = members.join(" and ");
        spaces.register_word(&composite);
        spaces.register_graph_word(&composite);
        for member in members {
            spaces.graph.link(&composite, member, Weight::Affirmed);
        }
        composite
    }

    fn link_all(&self, spaces: &mut SemanticSpaces, adjectives: &[String], weight: Weight) {
        for adjective in adjectives {
            spaces.graph.link(&self.head, adjective, weight);
        }
    }
}

/// Collects the coordinated-adjective run starting at `start` (which must
/// sit on an adjective).
///
/// The run alternates adjectives and "and"/"or" conjunctions; a comma
/// resets the alternation before any conjunction committed the group; a
/// leading "not" negates the rest of the run. Any other token stops the
/// collection.
pub fn collect(
    tokens: &[Token],
    start: usize,
    boundary: u32,
    head: &str,
    negated: bool,
    spaces: &mut SemanticSpaces,
) -> Agglomerate {
    let mut expect_adjective = true;
    let mut committed = false;
    let mut complex = false;
    let mut negated = negated;
    let mut negate_from = None;
    let mut adjectives: Vec<String> = Vec::new();

    let mut index = start;
    while index < tokens.len() {
        let token = &tokens[index];

        if index != start && token.position <= boundary {
            break;
        }

        if token.is_adjective() {
            if !expect_adjective {
                break;
            }
            expect_adjective = false;
            adjectives.push(token.surface.clone());
            spaces.register_adjective(token);
        } else if token.is_conjunction() {
            if expect_adjective {
                break;
            }
            if token.lemma_is("and") {
                complex = true;
            } else if token.lemma_is("or") {
                complex = false;
            } else {
                break;
            }
            committed = true;
            expect_adjective = true;
        } else if token.is_punctuation() {
            if token.lemma_is(",") {
                if committed {
                    break;
                }
                expect_adjective = true;
            }
        } else if token.is_adverb() {
            if committed || !token.lemma_is("not") {
                break;
            }
            negated = true;
            negate_from = Some(adjectives.len());
        } else {
            break;
        }

        index += 1;
    }

    Agglomerate {
        kind: if complex {
            AgglomerateKind::Complex
        } else {
            AgglomerateKind::Simple
        },
        negated,
        negate_from,
        head: head.to_string(),
        adjectives,
        resume: index.saturating_sub(1),
    }
}
