//! The proper-noun clause walker.
//!
//! Starting at a proper-noun token, extracts the full name phrase, builds
//! its candidate alias set, and resolves it against the subject registry by
//! weighted longest match — creating a new subject (gender from the
//! injected lexicon) when nothing matches. A following copular "be" opens a
//! description scan over the subject's *private* graph; "with" or a
//! wh-pronoun inside it, or a non-copular verb right after the name, hands
//! the clause to the attribute scan. Reaching the end of the sentence
//! before any verb still leaves the subject created with its aliases.

use lexweave_foundation::{GenderLexicon, Token, Weight};

use crate::attribute;
use crate::context::SemanticSpaces;
use crate::phrase::{self, PhraseMode};
use crate::subject::{self, Subject, SubjectRegistry};

/// Walks one proper-noun clause starting at `start` and returns the index
/// it stopped at.
pub fn walk(
    tokens: &[Token],
    start: usize,
    spaces: &mut SemanticSpaces,
    registry: &mut SubjectRegistry,
    genders: &GenderLexicon,
) -> usize {
    if start >= tokens.len() {
        return start;
    }

    let boundary = tokens[start].position + 1;
    let name_phrase = phrase::extract(tokens, start, PhraseMode::Proper);
    if name_phrase.is_empty() {
        return start;
    }
    let mut cursor = start + name_phrase.len();

    let mut aliases = subject::build_aliases(&name_phrase);

    let subject_index = match registry.find_best(&aliases) {
        None => {
            // The first token becomes the main name, the rest aliases.
            let first = aliases.remove(0);
            let mut created = Subject::new(&first, genders.gender_of(&first));
            for alias in &aliases {
                created.add_alias(alias);
            }
            spaces.register_word(&first);
            registry.push(created)
        }
        Some(index) => {
            let found = registry.get_mut(index).expect("index from find_best");
            // Ownership is exact: a candidate that merely resolves by word
            // containment ("Smith" against "John Smith") still becomes an
            // alias of its own.
            for alias in &aliases {
                found.add_alias(alias);
            }
            index
        }
    };
    for alias in &aliases {
        spaces.register_word(alias);
    }

    let main = registry
        .get(subject_index)
        .expect("subject just resolved")
        .name()
        .to_string();
    let subject = registry
        .get_mut(subject_index)
        .expect("subject just resolved");

    if cursor >= tokens.len() {
        return cursor;
    }

    let token = &tokens[cursor];
    if !token.is_verb() {
        return cursor;
    }

    if !token.lemma_is("be") {
        // Non-copular clause ("John has ..."): everything after the name is
        // an attribute clause; the verb token itself sets the verb used.
        return attribute::scan(&main, tokens, cursor, spaces, subject);
    }
    cursor += 1;

    let mut negated = false;
    let mut pending_noun = false;
    let mut accumulator: Vec<String> = Vec::new();

    while cursor < tokens.len() {
        let token = &tokens[cursor];

        if cursor != start && token.position <= boundary {
            break;
        }

        if token.is_noun() {
            let noun_phrase = phrase::extract(tokens, cursor, PhraseMode::Noun);
            let gram = noun_phrase.lemma_text();
            spaces.register_all(&gram);
            cursor += noun_phrase.len() - 1;

            subject.graph_mut().emplace(&gram);
            subject
                .graph_mut()
                .link(&main, &gram, Weight::from_negated(negated));
            for deferred in &accumulator {
                subject.graph_mut().link(&gram, deferred, Weight::Affirmed);
            }
            negated = false;
            pending_noun = false;
        } else if token.is_adjective() {
            spaces.register_adjective(token);
            subject.graph_mut().emplace(&token.surface);
            subject
                .graph_mut()
                .link(&main, &token.surface, Weight::from_negated(negated));
            if pending_noun {
                accumulator.push(token.surface.clone());
            }
        } else if token.is_adverb() {
            negated = token.lemma_is("not");
        } else if token.is_conjunction() {
            if token.lemma_is("but") {
                negated = false;
            } else if token.lemma_is("neither") || token.lemma_is("nor") {
                negated = true;
            }
        } else if token.is_preposition() {
            if token.lemma_is("with") {
                cursor = attribute::scan(&main, tokens, cursor, spaces, subject);
            }
            // "of" / "in" outside an attribute clause carry nothing here.
        } else if token.is_determiner() {
            accumulator.clear();
            pending_noun = true;
        } else if token.is_wh_pronoun() {
            cursor = attribute::scan(&main, tokens, cursor, spaces, subject);
        }

        cursor += 1;
    }

    cursor
}
