//! Gender resolution from injected name lists and the closed pronoun set.
//!
//! The core never reads name lists from disk; the caller supplies them.
//! Pronoun lookup is a fixed closed set — anything outside it is an
//! [`UnrecognizedPronoun`](crate::error::ErrorKind::UnrecognizedPronoun)
//! error that callers are expected to catch and default on.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MALE_PRONOUNS: &[&str] = &["he", "him", "his", "himself"];
const FEMALE_PRONOUNS: &[&str] = &["she", "her", "hers", "herself"];
const NEUTRAL_PRONOUNS: &[&str] = &["it", "its", "itself"];

/// Grammatical gender of a subject.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    /// Unknown or inanimate.
    #[default]
    Neutral,
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Returns true if the two genders are compatible; `Neutral` is
    /// compatible with everything.
    #[must_use]
    pub fn similar(a: Gender, b: Gender) -> bool {
        a == Gender::Neutral || b == Gender::Neutral || a == b
    }

    /// Resolves a pronoun from the fixed closed set
    /// {he,him,his,himself,she,her,hers,herself,it,its,itself}.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnrecognizedPronoun`] for any word outside the
    /// set.
    ///
    /// [`ErrorKind::UnrecognizedPronoun`]: crate::error::ErrorKind::UnrecognizedPronoun
    pub fn from_pronoun(pronoun: &str) -> Result<Gender> {
        let matches = |set: &[&str]| set.iter().any(|p| pronoun.eq_ignore_ascii_case(p));

        if matches(MALE_PRONOUNS) {
            Ok(Gender::Male)
        } else if matches(FEMALE_PRONOUNS) {
            Ok(Gender::Female)
        } else if matches(NEUTRAL_PRONOUNS) {
            Ok(Gender::Neutral)
        } else {
            Err(Error::unrecognized_pronoun(pronoun))
        }
    }
}

/// Name → gender lookup built from externally supplied name lists.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenderLexicon {
    male: HashSet<String>,
    female: HashSet<String>,
}

impl GenderLexicon {
    /// Creates an empty lexicon; every name resolves to `Neutral`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lexicon from male and female name lists.
    ///
    /// Names are matched case-insensitively; the male list wins on overlap.
    pub fn from_name_lists<M, F>(male: M, female: F) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            male: male.into_iter().map(|n| n.into().to_lowercase()).collect(),
            female: female
                .into_iter()
                .map(|n| n.into().to_lowercase())
                .collect(),
        }
    }

    /// Gender of a name, `Neutral` when unlisted.
    #[must_use]
    pub fn gender_of(&self, name: &str) -> Gender {
        let lowered = name.to_lowercase();
        if self.male.contains(&lowered) {
            Gender::Male
        } else if self.female.contains(&lowered) {
            Gender::Female
        } else {
            Gender::Neutral
        }
    }
}
