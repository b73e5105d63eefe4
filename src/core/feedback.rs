//! Per-round feedback from the game
//!
//! Feedback is two sets of positions: letters in the right place and letters in
//! the word but elsewhere. Every other position is absent. It can be written as
//! index lists (`"0 1"`, `"4"`) or as a mark string:
//! - 'G'/'g'/🟩 for right place
//! - 'Y'/'y'/🟨 for misplaced
//! - '-'/'_'/'.'/⬜ for absent

use super::WORD_LENGTH;
use crate::error::{Result, SolverError};
use std::collections::BTreeSet;

/// Feedback for a single guess
///
/// Always valid: indexes are in range and the two sets are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    correct: BTreeSet<usize>,
    misplaced: BTreeSet<usize>,
}

impl Feedback {
    /// Build feedback from correct and misplaced positions
    ///
    /// # Errors
    /// - `InvalidIndex` if a position is not in `0..5`
    /// - `OverlappingIndex` if a position appears in both sets
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Feedback;
    ///
    /// let feedback = Feedback::new([0, 1], [4]).unwrap();
    /// assert_eq!(feedback.absent().collect::<Vec<_>>(), vec![2, 3]);
    ///
    /// assert!(Feedback::new([5], []).is_err());
    /// assert!(Feedback::new([1], [1]).is_err());
    /// ```
    pub fn new(
        correct: impl IntoIterator<Item = usize>,
        misplaced: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let correct: BTreeSet<usize> = correct.into_iter().collect();
        let misplaced: BTreeSet<usize> = misplaced.into_iter().collect();

        if let Some(&index) = correct
            .iter()
            .chain(misplaced.iter())
            .find(|&&index| index >= WORD_LENGTH)
        {
            return Err(SolverError::InvalidIndex { index });
        }

        if let Some(&index) = correct.intersection(&misplaced).next() {
            return Err(SolverError::OverlappingIndex { index });
        }

        Ok(Self { correct, misplaced })
    }

    /// Parse a mark string such as `"GY--G"` or `"🟩🟨⬜⬜🟩"`
    ///
    /// # Errors
    /// Returns `MalformedFeedback` if the string is not exactly five marks.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Feedback;
    ///
    /// let a = Feedback::from_marks("GY--G").unwrap();
    /// let b = Feedback::from_marks("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn from_marks(s: &str) -> Result<Self> {
        let malformed = || SolverError::MalformedFeedback(s.to_string());
        let marks: Vec<char> = s.trim().chars().collect();

        if marks.len() != WORD_LENGTH {
            return Err(malformed());
        }

        let mut correct = BTreeSet::new();
        let mut misplaced = BTreeSet::new();
        for (position, mark) in marks.into_iter().enumerate() {
            match mark {
                'G' | 'g' | '🟩' => {
                    correct.insert(position);
                }
                'Y' | 'y' | '🟨' => {
                    misplaced.insert(position);
                }
                '-' | '_' | '.' | '⬜' | '⬛' => {}
                _ => return Err(malformed()),
            }
        }

        Ok(Self { correct, misplaced })
    }

    /// Parse the two index lists the line prompt asks for
    ///
    /// Indexes may be separated by spaces or commas; either list may be empty.
    ///
    /// # Errors
    /// Returns `MalformedFeedback` for tokens that are not numbers, and the
    /// index errors of [`Feedback::new`].
    pub fn from_index_lists(correct: &str, misplaced: &str) -> Result<Self> {
        Self::new(parse_indexes(correct)?, parse_indexes(misplaced)?)
    }

    /// Positions confirmed correct
    #[must_use]
    pub const fn correct(&self) -> &BTreeSet<usize> {
        &self.correct
    }

    /// Positions whose letter is in the word somewhere else
    #[must_use]
    pub const fn misplaced(&self) -> &BTreeSet<usize> {
        &self.misplaced
    }

    /// Positions in neither set, in ascending order
    pub fn absent(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WORD_LENGTH).filter(|p| !self.correct.contains(p) && !self.misplaced.contains(p))
    }

    /// True if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct.len() == WORD_LENGTH
    }

    /// Render as `🟩🟨⬜⬜🟩`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        (0..WORD_LENGTH)
            .map(|p| {
                if self.correct.contains(&p) {
                    '🟩'
                } else if self.misplaced.contains(&p) {
                    '🟨'
                } else {
                    '⬜'
                }
            })
            .collect()
    }

    /// Render as `GY--G`
    #[must_use]
    pub fn to_marks(&self) -> String {
        (0..WORD_LENGTH)
            .map(|p| {
                if self.correct.contains(&p) {
                    'G'
                } else if self.misplaced.contains(&p) {
                    'Y'
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_marks(s)
    }
}

fn parse_indexes(list: &str) -> Result<Vec<usize>> {
    list.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| SolverError::MalformedFeedback(list.to_string()))
        })
        .collect()
}
