//! Integration tests for grammar compilation.

use lexweave_foundation::ErrorKind;
use lexweave_pattern::compile;

// =============================================================================
// Accepted grammars
// =============================================================================

#[test]
fn noun_phrase_grammar_compiles() {
    assert!(compile("<DT>?<JJ>*<NN>+").is_ok());
}

#[test]
fn alternation_splits_the_remainder() {
    assert!(compile("<NNP>+|<DT>?<NN>").is_ok());
}

#[test]
fn groups_nest() {
    assert!(compile("((<JJ>|<RB>)+<CC>)?<NN>").is_ok());
}

#[test]
fn tag_bodies_are_full_regexes() {
    assert!(compile("<NN(S|PS?)?>").is_ok());
    assert!(compile("<VB[DZ]>").is_ok());
}

// =============================================================================
// Rejected grammars
// =============================================================================

fn expect_syntax_error(grammar: &str) -> String {
    match compile(grammar).unwrap_err().kind {
        ErrorKind::PatternSyntax { message, .. } => message,
        other => panic!("expected a pattern syntax error, got {other:?}"),
    }
}

#[test]
fn unterminated_tag() {
    assert!(expect_syntax_error("<NN><VB").contains("unterminated tag"));
}

#[test]
fn unterminated_group() {
    assert!(expect_syntax_error("(<NN>|<VB>").contains("unterminated group"));
}

#[test]
fn quantifier_without_atom() {
    assert!(expect_syntax_error("+<NN>").contains("no preceding atom"));
}

#[test]
fn unknown_symbol() {
    assert!(expect_syntax_error("<NN>&<VB>").contains("unrecognized quantifier"));
}

#[test]
fn compile_never_panics_on_arbitrary_input() {
    for grammar in ["", ")", "((", "<>", "<NN>**", "|", "a", "<N N>"] {
        // Either a pattern or a structured error; no panic either way.
        let _ = compile(grammar);
    }
}
