//! Attribute extraction for subject clauses about quantity or possession.
//!
//! Scans a sub-clause like "a lot of experience in games": nouns chain into
//! a head attribute, "of" demotes the pending head into the amplifier list
//! ("lot" amplifies "experience"), later nouns and adjectives describe the
//! attribute, and a verb token replaces the default "have". "and" closes
//! the attribute being built and starts a new one. Each closed attribute is
//! pushed onto the owning subject and linked into its private graph:
//! subject → verb → attribute, attribute → amplifiers/descriptors.

use lexweave_foundation::{Token, Weight};

use crate::context::SemanticSpaces;
use crate::phrase::{self, PhraseMode};
use crate::subject::Subject;

/// One extracted attribute, immutable once appended to a subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    amplifiers: Vec<String>,
    descriptors: Vec<String>,
    negated: bool,
}

impl Attribute {
    /// Creates an attribute record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        amplifiers: Vec<String>,
        descriptors: Vec<String>,
        negated: bool,
    ) -> Self {
        Self {
            name: name.into(),
            amplifiers,
            descriptors,
            negated,
        }
    }

    /// The head attribute noun.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amplifying nouns joined via "of" ("lot" in "a lot of experience").
    #[must_use]
    pub fn amplifiers(&self) -> &[String] {
        &self.amplifiers
    }

    /// Descriptive adjectives and trailing nouns ("game" in
    /// "experience in games").
    #[must_use]
    pub fn descriptors(&self) -> &[String] {
        &self.descriptors
    }

    /// Returns true if the attribute was negated by a leading "not".
    #[must_use]
    pub fn negated(&self) -> bool {
        self.negated
    }
}

/// Scans the attribute sub-clause starting at `start` (the "with"/wh token,
/// or the clause verb itself), attaching closed attributes to `subject` and
/// linking them in its private graph under `main`.
///
/// Returns the index the scan stopped at; the caller resumes after it. A
/// conjunction arriving before any head noun stops the scan, keeping
/// whatever was accumulated.
pub fn scan(
    main: &str,
    tokens: &[Token],
    start: usize,
    spaces: &mut SemanticSpaces,
    subject: &mut Subject,
) -> usize {
    if start >= tokens.len() {
        return start;
    }

    let boundary = tokens[start].position;
    let mut verb = String::from("have");
    let mut head: Option<String> = None;
    let mut amplifiers: Vec<String> = Vec::new();
    let mut adjectives: Vec<String> = Vec::new();
    let mut trailing: Vec<String> = Vec::new();
    let mut negated = false;

    let mut cursor = start;
    while cursor < tokens.len() {
        let token = &tokens[cursor];

        if cursor != start && token.position <= boundary {
            break;
        }

        if token.is_noun() {
            let noun_phrase = phrase::extract(tokens, cursor, PhraseMode::Noun);
            let gram = noun_phrase.lemma_text();
            cursor += noun_phrase.len() - 1;
            if head.is_none() {
                head = Some(gram);
            } else {
                trailing.push(gram);
            }
        } else if token.is_preposition() {
            if token.lemma_is("of") {
                // The pending noun amplifies the real head still to come.
                if let Some(demoted) = head.take() {
                    amplifiers.push(demoted);
                }
            }
            // "with" / "in" keep describing the current head.
        } else if token.is_verb() {
            verb = token.lemma.to_lowercase();
        } else if token.is_adverb() {
            negated = token.lemma_is("not");
        } else if token.is_adjective() {
            spaces.register_adjective(token);
            adjectives.push(token.surface.clone());
        } else if token.is_conjunction() && token.lemma_is("and") {
            let Some(name) = head.take() else {
                // Dangling conjunction: stop, keep the partial results.
                break;
            };
            flush(
                main, &verb, name, &amplifiers, &adjectives, &trailing, negated, spaces, subject,
            );
            amplifiers.clear();
            adjectives.clear();
            trailing.clear();
            negated = false;
        }

        cursor += 1;
    }

    if let Some(name) = head {
        flush(
            main, &verb, name, &amplifiers, &adjectives, &trailing, negated, spaces, subject,
        );
    }

    cursor
}

/// Closes one attribute: registers its words, writes the private-graph
/// links, and appends the record to the subject.
#[allow(clippy::too_many_arguments)]
fn flush(
    main: &str,
    verb: &str,
    name: String,
    amplifiers: &[String],
    adjectives: &[String],
    trailing: &[String],
    negated: bool,
    spaces: &mut SemanticSpaces,
    subject: &mut Subject,
) {
    spaces.register_word(verb);
    spaces.register_word(&name);
    for word in amplifiers.iter().chain(trailing) {
        spaces.register_word(word);
    }

    let graph = subject.graph_mut();
    graph.emplace(&name);
    graph.emplace(verb);
    for word in amplifiers.iter().chain(adjectives).chain(trailing) {
        graph.emplace(word);
    }

    graph.link(main, verb, Weight::Affirmed);
    graph.link(verb, &name, Weight::Affirmed);
    for word in adjectives.iter().chain(amplifiers).chain(trailing) {
        graph.link(&name, word, Weight::Affirmed);
    }

    let mut descriptors = adjectives.to_vec();
    descriptors.extend(trailing.iter().cloned());
    subject.push_attribute(Attribute::new(
        name,
        amplifiers.to_vec(),
        descriptors,
        negated,
    ));
}
