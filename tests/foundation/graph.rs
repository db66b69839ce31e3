//! Integration tests for the graph space.

use lexweave_foundation::{GraphSpace, Weight};

// =============================================================================
// Symmetry
// =============================================================================

#[test]
fn every_link_is_stored_symmetrically() {
    let mut graph = GraphSpace::new();
    graph.link("cat", "animal", Weight::Affirmed);
    graph.link("cat", "happy", Weight::Negated);
    graph.link("dog", "animal", Weight::Affirmed);

    for (a, b) in [("cat", "animal"), ("cat", "happy"), ("dog", "animal")] {
        assert_eq!(graph.weight(a, b), graph.weight(b, a));
    }
}

#[test]
fn overwriting_keeps_symmetry() {
    let mut graph = GraphSpace::new();
    graph.link("cat", "dog", Weight::Affirmed);
    graph.link("dog", "cat", Weight::Negated);

    assert_eq!(graph.weight("cat", "dog"), Some(Weight::Negated));
    assert_eq!(graph.weight("dog", "cat"), Some(Weight::Negated));
}

// =============================================================================
// Local word table
// =============================================================================

#[test]
fn edges_may_involve_unregistered_words() {
    // The graph's own entry list grows lazily; no global registry needed.
    let mut graph = GraphSpace::new();
    graph.link("red and shiny", "red", Weight::Affirmed);

    assert!(graph.contains("red and shiny"));
    assert_eq!(
        graph.weight("red", "red and shiny"),
        Some(Weight::Affirmed)
    );
}

#[test]
fn absent_edges_and_words_are_empty_results() {
    let mut graph = GraphSpace::new();
    graph.emplace("cat");

    assert_eq!(graph.weight("cat", "dog"), None);
    assert!(graph.neighbors("ghost").is_empty());
}

#[test]
fn render_resolves_local_words() {
    let mut graph = GraphSpace::new();
    graph.link("cat", "animal", Weight::Affirmed);
    graph.link("cat", "happy", Weight::Negated);

    let rendered = graph.render();
    assert!(rendered.contains("cat: [animal, not happy]"));
    assert!(rendered.contains("animal: [cat]"));
}
