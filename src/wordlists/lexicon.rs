//! The immutable list of candidate words

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::error::{Result, SolverError};
use log::info;
use std::path::Path;

/// An ordered, non-empty list of words
///
/// Loaded once and shared read-only by every solver built on it.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Wrap a list of words
    ///
    /// # Errors
    /// Returns `EmptyLexicon` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(SolverError::EmptyLexicon);
        }
        Ok(Self { words })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    /// Returns `EmptyLexicon` if the embedded list was built empty.
    pub fn embedded() -> Result<Self> {
        let lexicon = Self::new(words_from_slice(WORDS))?;
        info!("loaded {} embedded words", lexicon.len());
        Ok(lexicon)
    }

    /// Load a word list file
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read and `EmptyLexicon` if it has no
    /// valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lexicon = Self::new(load_from_file(path.as_ref())?)?;
        info!(
            "loaded {} words from {}",
            lexicon.len(),
            path.as_ref().display()
        );
        Ok(lexicon)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a lexicon cannot be built empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
