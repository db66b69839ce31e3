//! Compiled patterns and the greedy left-to-right tiling matcher.
//!
//! A [`Pattern`] is a tree of tag atoms, sequences, quantified repeats, and
//! alternations. [`Pattern::consume`] scans a token sequence once, emitting
//! a non-overlapping tiling of matches — not an exhaustive search.

use std::fmt;

use lexweave_foundation::Token;
use regex::Regex;

/// Quantifier attached to an atom or group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RepeatKind {
    /// `*` — zero or more, greedy.
    ZeroOrMore,
    /// `+` — one or more, greedy.
    OneOrMore,
    /// `?` — zero or one, greedy.
    ZeroOrOne,
}

impl RepeatKind {
    fn symbol(self) -> char {
        match self {
            Self::ZeroOrMore => '*',
            Self::OneOrMore => '+',
            Self::ZeroOrOne => '?',
        }
    }
}

/// A compiled tag-grammar pattern.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// `<REGEX>` — one token whose tag matches the regex (unanchored).
    Tag(Regex),
    /// Concatenation of sub-patterns.
    Sequence(Vec<Pattern>),
    /// A quantified sub-pattern.
    Repeat {
        /// The quantified pattern.
        inner: Box<Pattern>,
        /// Which quantifier.
        kind: RepeatKind,
    },
    /// `A|B` — first alternative that matches wins.
    Alternate(Box<Pattern>, Box<Pattern>),
}

impl Pattern {
    /// Returns true if the pattern matches at the start of `tokens`.
    #[must_use]
    pub fn test(&self, tokens: &[Token]) -> bool {
        match self {
            Self::Tag(regex) => tokens.first().is_some_and(|t| regex.is_match(&t.tag)),
            Self::Sequence(patterns) => {
                let mut rest = tokens;
                for pattern in patterns {
                    if !pattern.test(rest) {
                        return false;
                    }
                    let skip = pattern.skip(rest);
                    rest = &rest[skip.min(rest.len())..];
                }
                true
            }
            Self::Repeat { inner, kind } => match kind {
                RepeatKind::ZeroOrMore | RepeatKind::ZeroOrOne => !tokens.is_empty(),
                RepeatKind::OneOrMore => inner.test(tokens),
            },
            Self::Alternate(a, b) => a.test(tokens) || b.test(tokens),
        }
    }

    /// Tokens consumed by a match at the start of `tokens`, in order.
    ///
    /// Empty when the pattern does not match (or matches zero-width).
    #[must_use]
    pub fn matched<'t>(&self, tokens: &'t [Token]) -> Vec<&'t Token> {
        match self {
            Self::Tag(_) => {
                if self.test(tokens) {
                    vec![&tokens[0]]
                } else {
                    Vec::new()
                }
            }
            Self::Sequence(patterns) => {
                let mut rest = tokens;
                let mut result = Vec::new();
                for pattern in patterns {
                    if !pattern.test(rest) {
                        return Vec::new();
                    }
                    result.extend(pattern.matched(rest));
                    let skip = pattern.skip(rest);
                    rest = &rest[skip.min(rest.len())..];
                }
                result
            }
            Self::Repeat { inner, kind } => {
                if !inner.test(tokens) {
                    return Vec::new();
                }
                match kind {
                    RepeatKind::ZeroOrOne => inner.matched(tokens),
                    RepeatKind::ZeroOrMore | RepeatKind::OneOrMore => {
                        let mut rest = tokens;
                        let mut result = Vec::new();
                        while inner.test(rest) {
                            let skip = inner.skip(rest);
                            if skip == 0 {
                                break;
                            }
                            result.extend(inner.matched(rest));
                            rest = &rest[skip.min(rest.len())..];
                        }
                        result
                    }
                }
            }
            Self::Alternate(a, b) => {
                if a.test(tokens) {
                    a.matched(tokens)
                } else if b.test(tokens) {
                    b.matched(tokens)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Number of tokens a match at the start of `tokens` consumes.
    #[must_use]
    pub fn skip(&self, tokens: &[Token]) -> usize {
        self.matched(tokens).len()
    }

    /// Scans `tokens` left to right, producing the greedy non-overlapping
    /// tiling of matches.
    ///
    /// At each position a successful match is recorded and the scan
    /// advances by the number of tokens consumed — at least 1 even for a
    /// zero-width match, so the scan always terminates; a failed position
    /// advances by 1.
    #[must_use]
    pub fn consume<'t>(&self, tokens: &'t [Token]) -> Vec<PatternMatch<'t>> {
        let mut results = Vec::new();
        let mut rest = tokens;
        while !rest.is_empty() {
            if self.test(rest) {
                let matched = self.matched(rest);
                let advance = matched.len().max(1).min(rest.len());
                results.push(PatternMatch::new(matched));
                rest = &rest[advance..];
            } else {
                rest = &rest[1..];
            }
        }
        results
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(regex) => write!(f, "<{}>", regex.as_str()),
            Self::Sequence(patterns) => {
                for pattern in patterns {
                    write!(f, "{pattern}")?;
                }
                Ok(())
            }
            Self::Repeat { inner, kind } => write!(f, "{inner}{}", kind.symbol()),
            Self::Alternate(a, b) => write!(f, "({a}|{b})"),
        }
    }
}

/// One match produced by [`Pattern::consume`]: the consumed tokens in order.
#[derive(Clone, Debug)]
pub struct PatternMatch<'t> {
    tokens: Vec<&'t Token>,
}

impl<'t> PatternMatch<'t> {
    pub(crate) fn new(tokens: Vec<&'t Token>) -> Self {
        Self { tokens }
    }

    /// The consumed tokens.
    #[must_use]
    pub fn tokens(&self) -> &[&'t Token] {
        &self.tokens
    }

    /// Consumed surfaces joined with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.surface.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Consumed lemmas joined with single spaces.
    #[must_use]
    pub fn lemma_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.lemma.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of consumed tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true for a zero-width match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index` within the match.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'t Token> {
        self.tokens.get(index).copied()
    }

    /// First consumed token.
    #[must_use]
    pub fn first(&self) -> Option<&'t Token> {
        self.tokens.first().copied()
    }

    /// Last consumed token.
    #[must_use]
    pub fn last(&self) -> Option<&'t Token> {
        self.tokens.last().copied()
    }
}
