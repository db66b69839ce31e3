//! Error types for the lexweave system.
//!
//! Uses `thiserror` for ergonomic error definition. Only two conditions are
//! genuine errors: a malformed tag-grammar string and a pronoun outside the
//! closed lookup set. Every other "miss" (unknown word, unmatched alias,
//! absent edge) is an ordinary `Option`/empty result that callers branch on.

use thiserror::Error;

/// The main error type for lexweave operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a pattern syntax error at a byte offset in the grammar string.
    #[must_use]
    pub fn pattern_syntax(message: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::PatternSyntax {
            message: message.into(),
            offset,
        })
    }

    /// Creates an unrecognized pronoun error.
    #[must_use]
    pub fn unrecognized_pronoun(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedPronoun(word.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed tag-grammar string. Fatal at compile time, never recovered.
    #[error("pattern syntax error at offset {offset}: {message}")]
    PatternSyntax {
        /// Description of the syntax problem.
        message: String,
        /// Byte offset into the grammar string.
        offset: usize,
    },

    /// A pronoun outside the fixed closed set. Callers catch this and
    /// default rather than abort the corpus pass.
    #[error("unrecognized pronoun: {0}")]
    UnrecognizedPronoun(String),
}

/// Result type alias using the lexweave [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
