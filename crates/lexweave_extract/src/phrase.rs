//! Contiguous noun-phrase extraction.
//!
//! A phrase ("gram") is a maximal contiguous run of noun tokens starting at
//! a given position. The run stops at the first token whose tag does not
//! qualify for the mode, or whose position fails to strictly increase past
//! the start — positions restart at 1 on a sentence boundary.

use lexweave_foundation::Token;

/// Which tags qualify for the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhraseMode {
    /// Any noun, common or proper.
    Noun,
    /// Proper nouns only.
    Proper,
}

impl PhraseMode {
    fn qualifies(self, token: &Token) -> bool {
        match self {
            Self::Noun => token.is_noun(),
            Self::Proper => token.is_proper_noun(),
        }
    }
}

/// A maximal contiguous noun run.
#[derive(Clone, Debug)]
pub struct Phrase<'t> {
    tokens: &'t [Token],
}

impl<'t> Phrase<'t> {
    /// The consumed tokens.
    #[must_use]
    pub fn tokens(&self) -> &'t [Token] {
        self.tokens
    }

    /// First token of the run.
    #[must_use]
    pub fn first(&self) -> Option<&'t Token> {
        self.tokens.first()
    }

    /// Number of consumed tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lemmas joined with single spaces.
    #[must_use]
    pub fn lemma_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.lemma.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Surfaces joined with single spaces.
    #[must_use]
    pub fn surface_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.surface.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extracts the maximal noun run starting at `start`.
///
/// Empty when `start` is past the end or the starting token does not
/// qualify.
#[must_use]
pub fn extract(tokens: &[Token], start: usize, mode: PhraseMode) -> Phrase<'_> {
    if start >= tokens.len() {
        return Phrase { tokens: &[] };
    }

    let start_position = tokens[start].position;
    let mut end = start;
    while end < tokens.len() {
        let token = &tokens[end];
        if end != start && token.position <= start_position {
            break;
        }
        if !mode.qualifies(token) {
            break;
        }
        end += 1;
    }

    Phrase {
        tokens: &tokens[start..end],
    }
}
