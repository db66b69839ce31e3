//! Scenario tests for subjects: alias resolution, gender, private graphs.

use lexweave_extract::{SemanticModel, Subject, SubjectRegistry};
use lexweave_foundation::{Gender, GenderLexicon, Weight};

use crate::sentence;

fn lexicon() -> GenderLexicon {
    GenderLexicon::from_name_lists(["John", "James"], ["Mary", "Anna"])
}

// =============================================================================
// Alias resolution
// =============================================================================

#[test]
fn surname_mention_attaches_to_existing_subject() {
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[
        sentence(&[("John", "John", "NNP"), ("Smith", "Smith", "NNP")]),
        sentence(&[
            ("Smith", "Smith", "NNP"),
            ("is", "be", "VBZ"),
            ("happy", "happy", "JJ"),
        ]),
    ]);

    assert_eq!(model.subjects().len(), 1);
    let subject = model.subjects().get(0).unwrap();
    assert_eq!(subject.name(), "John");
    assert_eq!(
        subject.graph().weight("John", "happy"),
        Some(Weight::Affirmed)
    );
}

#[test]
fn distinct_names_create_distinct_subjects() {
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[
        sentence(&[("John", "John", "NNP")]),
        sentence(&[("Mary", "Mary", "NNP")]),
    ]);

    assert_eq!(model.subjects().len(), 2);
    assert_eq!(model.subjects().get(0).unwrap().gender(), Gender::Male);
    assert_eq!(model.subjects().get(1).unwrap().gender(), Gender::Female);
}

#[test]
fn middle_names_become_aliases() {
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[sentence(&[
        ("John", "John", "NNP"),
        ("Ronald", "Ronald", "NNP"),
        ("Smith", "Smith", "NNP"),
    ])]);

    let subject = model.subjects().get(0).unwrap();
    assert_eq!(subject.name(), "John");
    for alias in ["John Ronald Smith", "Ronald Smith", "Ronald", "John Smith"] {
        assert!(
            subject.aliases().iter().any(|a| a == alias),
            "missing alias {alias}"
        );
    }
}

#[test]
fn nobiliary_names_keep_the_particled_full_form() {
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[sentence(&[
        ("Anna", "Anna", "NNP"),
        ("de", "de", "NNP"),
        ("la", "la", "NNP"),
        ("Cruz", "Cruz", "NNP"),
    ])]);

    let subject = model.subjects().get(0).unwrap();
    assert_eq!(subject.name(), "Anna");
    assert!(subject.aliases().iter().any(|a| a == "Anna de la Cruz"));
    assert!(subject.aliases().iter().any(|a| a == "Anna Cruz"));
}

#[test]
fn weighted_match_prefers_longer_aliases() {
    let mut registry = SubjectRegistry::new();
    registry.push(Subject::new("Smith", Gender::Neutral));
    let mut full = Subject::new("John", Gender::Male);
    full.add_alias("John Smith");
    registry.push(full);

    let best = registry.find_best(&["John Smith".to_string()]).unwrap();
    assert_eq!(registry.get(best).unwrap().name(), "John");
}

// =============================================================================
// Descriptions & partial extraction
// =============================================================================

#[test]
fn description_goes_to_the_private_graph_only() {
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[sentence(&[
        ("Mary", "Mary", "NNP"),
        ("is", "be", "VBZ"),
        ("a", "a", "DT"),
        ("doctor", "doctor", "NN"),
    ])]);

    let subject = model.subjects().get(0).unwrap();
    assert_eq!(
        subject.graph().weight("Mary", "doctor"),
        Some(Weight::Affirmed)
    );
    assert_eq!(model.spaces().graph.weight("Mary", "doctor"), None);
}

#[test]
fn name_without_clause_still_registers_the_subject() {
    // End of sentence right after the name: partial extraction is valid.
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[sentence(&[("John", "John", "NNP"), (".", ".", ".")])]);

    assert_eq!(model.subjects().len(), 1);
    assert_eq!(model.subjects().get(0).unwrap().name(), "John");
}

#[test]
fn repeat_mentions_never_delete_subjects() {
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[
        sentence(&[("John", "John", "NNP")]),
        sentence(&[("John", "John", "NNP")]),
        sentence(&[("John", "John", "NNP")]),
    ]);
    assert_eq!(model.subjects().len(), 1);
}

#[test]
fn render_resolves_subject_words() {
    let mut model = SemanticModel::with_genders(lexicon());
    model.build(&[sentence(&[
        ("John", "John", "NNP"),
        ("is", "be", "VBZ"),
        ("happy", "happy", "JJ"),
    ])]);

    let rendered = model.render_subjects();
    assert!(rendered.contains("name: 'John'"));
    assert!(rendered.contains("happy"));
}
