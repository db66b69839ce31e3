//! The common-noun clause walker.
//!
//! Starting at a common-noun token, extracts the head noun phrase and, when
//! a copular "be" follows, scans the rest of the clause: nouns link to the
//! head in the global graph (negated under a pending "not") and pull the
//! two vectors together; adjectives fold into agglomerates, deferred until
//! the next noun when a determiner announced one; conjunctions, commas and
//! adverbs adjust the local negation state.

use lexweave_foundation::{Token, Weight};

use crate::agglomerate::{self, Agglomerate};
use crate::context::SemanticSpaces;
use crate::phrase::{self, PhraseMode};

/// Walks one clause starting at `start` and returns the index it stopped
/// at; the caller resumes scanning from the next token.
pub fn walk(tokens: &[Token], start: usize, spaces: &mut SemanticSpaces) -> usize {
    if start >= tokens.len() {
        return start;
    }

    let boundary = tokens[start].position + 1;
    let mut negated = false;
    let mut pending_noun = false;
    let mut agglomerates: Vec<Agglomerate> = Vec::new();
    let mut last_noun: Option<String> = None;

    let head_phrase = phrase::extract(tokens, start, PhraseMode::Noun);
    let head = head_phrase.lemma_text();
    spaces.register_all(&head);

    let mut cursor = start + head_phrase.len();
    if cursor >= tokens.len() {
        return cursor;
    }

    let token = &tokens[cursor];
    if !token.is_verb() {
        return cursor;
    }
    if token.lemma_is("be") {
        cursor += 1;
    }

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

            let weight = Weight::from_negated(negated);
            spaces.graph.link(&head, &gram, weight);
            spaces.vectors.nudge(&head, &gram, weight.signum());

            negated = false;
            pending_noun = false;
            let all_negated = agglomerates.iter().all(Agglomerate::negated);
            for group in agglomerates.drain(..) {
                group.apply_to_noun(spaces, &gram, all_negated, false);
            }
            last_noun = Some(gram);
        } else if token.is_adjective() {
            spaces.register_adjective(token);
            let group =
                agglomerate::collect(tokens, cursor, boundary + 1, &head, negated, spaces);
            cursor = group.resume;
            if pending_noun {
                agglomerates.push(group);
            } else if let Some(gram) = &last_noun {
                group.apply_to_noun(spaces, gram, false, true);
            } else {
                group.apply(spaces);
            }
        } else if token.is_adverb() {
            negated = token.lemma_is("not");
        } else if token.is_conjunction() {
            if token.lemma_is("but") {
                // Contrastive reset.
                negated = false;
            } else if token.lemma_is("neither") || token.lemma_is("nor") {
                negated = true;
            }
            // "and", "or", "either": no local state change.
        } else if token.is_determiner() {
            // A noun is coming; defer agglomerates until it closes.
            pending_noun = true;
        } else if token.is_punctuation() {
            if token.lemma_is(",") {
                negated = false;
            }
        }

        cursor += 1;
    }

    cursor
}
