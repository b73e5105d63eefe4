//! Error type shared by the constraint engine and its loaders

use crate::core::WordError;
use thiserror::Error;

/// The errors the helper can produce.
///
/// Every variant is scoped to one piece of input: an engine call that fails
/// leaves the constraint state exactly as it was.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A feedback index lies outside the word.
    #[error("index {index} is out of range (positions are 0 to 4)")]
    InvalidIndex { index: usize },

    /// A position was reported both correct and misplaced.
    #[error("index {index} cannot be both correct and misplaced")]
    OverlappingIndex { index: usize },

    /// The guess is not a valid word.
    #[error("malformed word: {0}")]
    MalformedWord(#[from] WordError),

    /// A feedback string could not be parsed.
    #[error("malformed feedback \"{0}\"")]
    MalformedFeedback(String),

    /// The lexicon has no words in it.
    #[error("the word list is empty")]
    EmptyLexicon,

    #[error("could not read word list")]
    Io(#[from] std::io::Error),
}

impl SolverError {
    /// True for both kinds of bad feedback index: out of range or reported twice
    #[must_use]
    pub const fn is_invalid_index(&self) -> bool {
        matches!(
            self,
            Self::InvalidIndex { .. } | Self::OverlappingIndex { .. }
        )
    }
}

/// Result alias used throughout the library
pub type Result<T, E = SolverError> = std::result::Result<T, E>;
