//! Scenario tests for attribute extraction.

use lexweave_extract::SemanticModel;
use lexweave_foundation::{GenderLexicon, Weight};

use crate::sentence;

fn model() -> SemanticModel {
    SemanticModel::with_genders(GenderLexicon::from_name_lists(
        ["John"],
        Vec::<String>::new(),
    ))
}

#[test]
fn john_has_a_lot_of_experience_in_games() {
    let mut model = model();
    model.build(&[sentence(&[
        ("John", "John", "NNP"),
        ("has", "have", "VBZ"),
        ("a", "a", "DT"),
        ("lot", "lot", "NN"),
        ("of", "of", "IN"),
        ("experience", "experience", "NN"),
        ("in", "in", "IN"),
        ("games", "game", "NNS"),
    ])]);

    let subject = model.subjects().get(0).unwrap();
    let attributes = subject.attributes();
    assert_eq!(attributes.len(), 1);

    let attribute = &attributes[0];
    assert_eq!(attribute.name(), "experience");
    assert_eq!(attribute.amplifiers(), ["lot"]);
    assert_eq!(attribute.descriptors(), ["game"]);
    assert!(!attribute.negated());
}

#[test]
fn attribute_links_reach_the_private_graph() {
    let mut model = model();
    model.build(&[sentence(&[
        ("John", "John", "NNP"),
        ("has", "have", "VBZ"),
        ("experience", "experience", "NN"),
    ])]);

    let graph = model.subjects().get(0).unwrap().graph();
    assert_eq!(graph.weight("John", "have"), Some(Weight::Affirmed));
    assert_eq!(graph.weight("have", "experience"), Some(Weight::Affirmed));
}

#[test]
fn coordinated_attributes_split_on_and() {
    let mut model = model();
    model.build(&[sentence(&[
        ("John", "John", "NNP"),
        ("has", "have", "VBZ"),
        ("experience", "experience", "NN"),
        ("and", "and", "CC"),
        ("knowledge", "knowledge", "NN"),
    ])]);

    let subject = model.subjects().get(0).unwrap();
    let attributes = subject.attributes();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].name(), "experience");
    assert_eq!(attributes[1].name(), "knowledge");
}

#[test]
fn copular_with_clause_uses_default_have() {
    // "John is a veteran with experience" — the verb defaults to "have".
    let mut model = model();
    model.build(&[sentence(&[
        ("John", "John", "NNP"),
        ("is", "be", "VBZ"),
        ("a", "a", "DT"),
        ("veteran", "veteran", "NN"),
        ("with", "with", "IN"),
        ("experience", "experience", "NN"),
    ])]);

    let subject = model.subjects().get(0).unwrap();
    assert_eq!(subject.attributes().len(), 1);
    assert_eq!(subject.attributes()[0].name(), "experience");
    assert_eq!(
        subject.graph().weight("John", "have"),
        Some(Weight::Affirmed)
    );
    assert_eq!(
        subject.graph().weight("John", "veteran"),
        Some(Weight::Affirmed)
    );
}

#[test]
fn attributes_are_immutable_once_attached() {
    let mut model = model();
    model.build(&[
        sentence(&[
            ("John", "John", "NNP"),
            ("has", "have", "VBZ"),
            ("experience", "experience", "NN"),
        ]),
        sentence(&[
            ("John", "John", "NNP"),
            ("has", "have", "VBZ"),
            ("knowledge", "knowledge", "NN"),
        ]),
    ]);

    let subject = model.subjects().get(0).unwrap();
    // The second mention appended; the first record is unchanged.
    assert_eq!(subject.attributes().len(), 2);
    assert_eq!(subject.attributes()[0].name(), "experience");
    assert_eq!(subject.attributes()[1].name(), "knowledge");
}
