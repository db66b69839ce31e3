//! Tagged tokens and part-of-speech predicates.
//!
//! Tokens arrive from an external tagger: one ordered stream per sentence,
//! each token exposing a surface form, a lemma, a Penn Treebank tag, and a
//! 1-based position within its sentence. Positions strictly increase inside
//! a sentence; the extraction walkers use a position that fails to increase
//! as a span boundary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nobiliary particles recognized inside proper-noun phrases.
const NOBILIARY_PARTICLES: &[&str] = &["of", "von", "de", "la"];

/// A part-of-speech-tagged, lemmatized token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// Surface form as it appeared in the text.
    pub surface: String,
    /// Lemmatized form.
    pub lemma: String,
    /// Penn Treebank part-of-speech tag.
    pub tag: String,
    /// 1-based position within the owning sentence.
    pub position: u32,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        surface: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
        position: u32,
    ) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            tag: tag.into(),
            position,
        }
    }

    /// Any noun, common or proper (`NN*`).
    #[must_use]
    pub fn is_noun(&self) -> bool {
        self.tag.starts_with("NN")
    }

    /// Common noun (`NN*` but not `NNP*`).
    #[must_use]
    pub fn is_common_noun(&self) -> bool {
        self.tag.starts_with("NN") && !self.tag.starts_with("NNP")
    }

    /// Proper noun (`NNP*`).
    #[must_use]
    pub fn is_proper_noun(&self) -> bool {
        self.tag.starts_with("NNP")
    }

    /// Verb, any form (`VB*`).
    #[must_use]
    pub fn is_verb(&self) -> bool {
        self.tag.starts_with("VB")
    }

    /// Adjective (`JJ*`).
    #[must_use]
    pub fn is_adjective(&self) -> bool {
        self.tag.starts_with("JJ")
    }

    /// Adverb (`RB*`).
    #[must_use]
    pub fn is_adverb(&self) -> bool {
        self.tag.starts_with("RB")
    }

    /// Personal pronoun (`PRP` or `PRP$`).
    #[must_use]
    pub fn is_pronoun(&self) -> bool {
        self.tag.starts_with("PRP")
    }

    /// Possessive pronoun (`PRP$`).
    #[must_use]
    pub fn is_possessive_pronoun(&self) -> bool {
        self.tag == "PRP$"
    }

    /// Preposition or subordinating conjunction (`IN`).
    #[must_use]
    pub fn is_preposition(&self) -> bool {
        self.tag.starts_with("IN")
    }

    /// Determiner (`DT`).
    #[must_use]
    pub fn is_determiner(&self) -> bool {
        self.tag == "DT"
    }

    /// Coordinating conjunction (`CC`).
    #[must_use]
    pub fn is_conjunction(&self) -> bool {
        self.tag == "CC"
    }

    /// Modal auxiliary (`MD`).
    #[must_use]
    pub fn is_modal(&self) -> bool {
        self.tag == "MD"
    }

    /// Infinitival "to" (`TO`).
    #[must_use]
    pub fn is_to(&self) -> bool {
        self.tag == "TO"
    }

    /// Sentence-final punctuation tag (`.`).
    #[must_use]
    pub fn is_punctuation(&self) -> bool {
        self.tag == "."
    }

    /// Wh-pronoun (`WP` or `WP$`).
    #[must_use]
    pub fn is_wh_pronoun(&self) -> bool {
        self.tag == "WP" || self.tag == "WP$"
    }

    /// Nobiliary particle inside a proper-noun phrase ("of", "von", "de",
    /// "la" tagged as a proper noun).
    #[must_use]
    pub fn is_nobiliary_particle(&self) -> bool {
        self.is_proper_noun()
            && NOBILIARY_PARTICLES
                .iter()
                .any(|p| self.surface.eq_ignore_ascii_case(p))
    }

    /// Case-insensitive lemma comparison.
    #[must_use]
    pub fn lemma_is(&self, lemma: &str) -> bool {
        self.lemma.eq_ignore_ascii_case(lemma)
    }
}
