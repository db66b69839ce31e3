//! Integration tests for the consume tiling over token streams.

use lexweave_foundation::Token;
use lexweave_pattern::compile;

fn tagged(tagged: &[(&str, &str)]) -> Vec<Token> {
    tagged
        .iter()
        .enumerate()
        .map(|(i, (surface, tag))| {
            Token::new(*surface, *surface, *tag, u32::try_from(i + 1).unwrap())
        })
        .collect()
}

#[test]
fn matches_are_non_overlapping_and_left_to_right() {
    let pattern = compile("<JJ>*<NN>+").unwrap();
    let tokens = tagged(&[
        ("big", "JJ"),
        ("cat", "NN"),
        ("is", "VBZ"),
        ("small", "JJ"),
        ("dog", "NN"),
        ("food", "NN"),
    ]);

    let matches = pattern.consume(&tokens);
    assert_eq!(matches.len(), 2);

    let mut last_position = 0;
    for m in &matches {
        for token in m.tokens() {
            assert!(
                token.position > last_position,
                "spans must advance strictly"
            );
            last_position = token.position;
        }
    }
    assert_eq!(matches[0].text(), "big cat");
    assert_eq!(matches[1].text(), "small dog food");
}

#[test]
fn text_joins_surfaces_with_single_spaces() {
    let pattern = compile("<NNP>+").unwrap();
    let tokens = tagged(&[("John", "NNP"), ("Ronald", "NNP"), ("Smith", "NNP")]);

    let matches = pattern.consume(&tokens);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text(), "John Ronald Smith");
}

#[test]
fn failed_positions_advance_by_one() {
    let pattern = compile("<NN>").unwrap();
    let tokens = tagged(&[("very", "RB"), ("very", "RB"), ("hungry", "JJ")]);
    assert!(pattern.consume(&tokens).is_empty());
}

#[test]
fn alternation_covers_both_phrase_shapes() {
    let pattern = compile("<NNP>+|<JJ><NN>").unwrap();
    let tokens = tagged(&[
        ("John", "NNP"),
        ("Smith", "NNP"),
        ("likes", "VBZ"),
        ("hot", "JJ"),
        ("tea", "NN"),
    ]);

    let matches = pattern.consume(&tokens);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].text(), "John Smith");
    assert_eq!(matches[1].text(), "hot tea");
}

#[test]
fn consume_terminates_on_zero_width_grammars() {
    let pattern = compile("<XYZ>*").unwrap();
    let tokens = tagged(&[("a", "DT"), ("b", "DT"), ("c", "DT"), ("d", "DT")]);

    // Every position matches zero-width; the scan still ends.
    let matches = pattern.consume(&tokens);
    assert_eq!(matches.len(), tokens.len());
}

#[test]
fn match_accessors_expose_tokens() {
    let pattern = compile("<DT><NN>").unwrap();
    let tokens = tagged(&[("the", "DT"), ("cat", "NN")]);

    let matches = pattern.consume(&tokens);
    let m = &matches[0];
    assert_eq!(m.len(), 2);
    assert_eq!(m.first().unwrap().surface, "the");
    assert_eq!(m.last().unwrap().surface, "cat");
    assert_eq!(m.get(1).unwrap().surface, "cat");
    assert!(m.get(2).is_none());
}
