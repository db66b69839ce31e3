//! Scenario tests for common-noun clauses.

use lexweave_extract::{SemanticModel, SemanticSpaces, noun_clause};
use lexweave_foundation::Weight;

use crate::sentence;

// =============================================================================
// Negation
// =============================================================================

#[test]
fn the_cat_is_not_happy() {
    let tokens = sentence(&[
        ("The", "the", "DT"),
        ("cat", "cat", "NN"),
        ("is", "be", "VBZ"),
        ("not", "not", "RB"),
        ("happy", "happy", "JJ"),
    ]);
    let mut model = SemanticModel::new();
    model.build(&[tokens]);

    assert_eq!(
        model.spaces().graph.weight("cat", "happy"),
        Some(Weight::Negated)
    );
}

#[test]
fn negation_resets_after_the_next_noun() {
    // "The cat is not a dog and is an animal" — only the first link is
    // negated.
    let tokens = sentence(&[
        ("The", "the", "DT"),
        ("cat", "cat", "NN"),
        ("is", "be", "VBZ"),
        ("not", "not", "RB"),
        ("a", "a", "DT"),
        ("dog", "dog", "NN"),
        ("and", "and", "CC"),
        ("is", "be", "VBZ"),
        ("an", "a", "DT"),
        ("animal", "animal", "NN"),
    ]);
    let mut spaces = SemanticSpaces::new();
    noun_clause::walk(&tokens, 1, &mut spaces);

    assert_eq!(spaces.graph.weight("cat", "dog"), Some(Weight::Negated));
    assert_eq!(spaces.graph.weight("cat", "animal"), Some(Weight::Affirmed));
}

// =============================================================================
// Coordinated adjectives
// =============================================================================

#[test]
fn the_car_is_red_and_shiny() {
    let tokens = sentence(&[
        ("The", "the", "DT"),
        ("car", "car", "NN"),
        ("is", "be", "VBZ"),
        ("red", "red", "JJ"),
        ("and", "and", "CC"),
        ("shiny", "shiny", "JJ"),
    ]);
    let mut model = SemanticModel::new();
    model.build(&[tokens]);

    let graph = &model.spaces().graph;
    assert_eq!(
        graph.weight("car", "red and shiny"),
        Some(Weight::Affirmed)
    );
    assert_eq!(
        graph.weight("red and shiny", "red"),
        Some(Weight::Affirmed)
    );
    assert_eq!(
        graph.weight("red and shiny", "shiny"),
        Some(Weight::Affirmed)
    );
}

#[test]
fn or_coordination_stays_independent() {
    // "The apple is red or green" — no composite node.
    let tokens = sentence(&[
        ("The", "the", "DT"),
        ("apple", "apple", "NN"),
        ("is", "be", "VBZ"),
        ("red", "red", "JJ"),
        ("or", "or", "CC"),
        ("green", "green", "JJ"),
    ]);
    let mut spaces = SemanticSpaces::new();
    noun_clause::walk(&tokens, 1, &mut spaces);

    assert_eq!(spaces.graph.weight("apple", "red"), Some(Weight::Affirmed));
    assert_eq!(
        spaces.graph.weight("apple", "green"),
        Some(Weight::Affirmed)
    );
    assert!(!spaces.graph.contains("red or green"));
    assert!(!spaces.graph.contains("red and green"));
}

// =============================================================================
// Vocabulary & adjective index side effects
// =============================================================================

#[test]
fn adjectives_land_in_the_index_with_their_lemmas() {
    let tokens = sentence(&[
        ("The", "the", "DT"),
        ("cat", "cat", "NN"),
        ("is", "be", "VBZ"),
        ("happier", "happy", "JJR"),
    ]);
    let mut spaces = SemanticSpaces::new();
    noun_clause::walk(&tokens, 1, &mut spaces);

    assert_eq!(spaces.adjectives.lemma_of("happier"), Some("happy"));
    assert!(spaces.vocabulary.contains("happier"));
    assert!(spaces.vocabulary.contains("happy"));
}

#[test]
fn predicate_nouns_pull_vectors_closer() {
    let tokens = sentence(&[
        ("The", "the", "DT"),
        ("cat", "cat", "NN"),
        ("is", "be", "VBZ"),
        ("an", "a", "DT"),
        ("animal", "animal", "NN"),
    ]);
    let mut spaces = SemanticSpaces::new();
    spaces.register_all("cat");
    spaces.register_all("animal");
    noun_clause::walk(&tokens, 1, &mut spaces);

    let cat = spaces.vectors.get("cat").unwrap();
    let animal = spaces.vectors.get("animal").unwrap();
    let dot: f64 = cat
        .as_slice()
        .iter()
        .zip(animal.as_slice())
        .map(|(a, b)| a * b)
        .sum();
    assert!(dot > 0.0, "affirmed link must pull vectors together");
}
