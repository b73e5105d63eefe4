//! Accumulated knowledge about the hidden word
//!
//! A `ConstraintState` is a plain value: folding a round of feedback into it
//! produces a new state and never mutates the old one, so callers decide when
//! the new knowledge takes effect.

use crate::core::{Feedback, LetterSet, Word};
use crate::error::Result;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Everything learned from the guesses so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    correct_positions: BTreeMap<usize, u8>,
    misplaced_pairs: BTreeSet<(usize, u8)>,
    excluded_letters: LetterSet,
}

impl ConstraintState {
    /// The state before any guess: every word is admitted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct_positions.is_empty()
            && self.misplaced_pairs.is_empty()
            && self.excluded_letters.is_empty()
    }

    /// Letters pinned to an exact position
    #[must_use]
    pub const fn correct_positions(&self) -> &BTreeMap<usize, u8> {
        &self.correct_positions
    }

    /// Letters in the word, each paired with a position it is not at
    #[must_use]
    pub const fn misplaced_pairs(&self) -> &BTreeSet<(usize, u8)> {
        &self.misplaced_pairs
    }

    /// Letters known to be absent from the word
    #[must_use]
    pub const fn excluded_letters(&self) -> LetterSet {
        self.excluded_letters
    }

    /// Letters known to be in the word, placed or not
    #[must_use]
    pub fn known_present(&self) -> LetterSet {
        self.correct_positions
            .values()
            .copied()
            .chain(self.misplaced_pairs.iter().map(|&(_, letter)| letter))
            .collect()
    }

    /// Letters the helper already has an answer for, present or absent
    #[must_use]
    pub fn tested_letters(&self) -> LetterSet {
        self.excluded_letters.union(self.known_present())
    }

    /// Fold one round of feedback into a new state
    ///
    /// Correct positions overwrite earlier entries for the same position,
    /// misplaced pairs accumulate, and absent letters join the exclusions
    /// unless the letter is known present. A letter green or yellow in one slot
    /// and grey in another is therefore never excluded, and a letter excluded
    /// in an earlier round is released once a later round proves it present.
    #[must_use]
    pub fn apply(&self, guess: &Word, feedback: &Feedback) -> Self {
        let new_right: BTreeMap<usize, u8> = feedback
            .correct()
            .iter()
            .map(|&position| (position, guess.char_at(position)))
            .collect();
        let new_misplaced: BTreeSet<(usize, u8)> = feedback
            .misplaced()
            .iter()
            .map(|&position| (position, guess.char_at(position)))
            .collect();
        let new_absent: LetterSet = feedback
            .absent()
            .map(|position| guess.char_at(position))
            .collect();

        let mut next = self.clone();
        next.correct_positions.extend(new_right);
        next.misplaced_pairs.extend(new_misplaced);
        next.excluded_letters = next
            .excluded_letters
            .union(new_absent)
            .difference(next.known_present());

        debug!(
            "analyze {guess} {}: {} -> {}",
            feedback.to_marks(),
            self,
            next
        );
        next
    }

    /// Validate raw index sets and fold them in
    ///
    /// # Errors
    /// Returns `InvalidIndex` or `OverlappingIndex` for bad indexes; `self` is
    /// untouched either way.
    pub fn analyze(&self, guess: &Word, correct: &[usize], misplaced: &[usize]) -> Result<Self> {
        let feedback = Feedback::new(correct.iter().copied(), misplaced.iter().copied())?;
        Ok(self.apply(guess, &feedback))
    }

    /// True if the word satisfies every constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        has_confirmed_positions(word, &self.correct_positions)
            && has_misplaced_letters(word, &self.misplaced_pairs)
            && excludes_none(word, self.excluded_letters)
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let right: Vec<String> = self
            .correct_positions
            .iter()
            .map(|(position, &letter)| format!("{position}:{}", letter as char))
            .collect();
        let misplaced: Vec<String> = self
            .misplaced_pairs
            .iter()
            .map(|&(position, letter)| format!("{position}:{}", letter as char))
            .collect();

        write!(
            f,
            "right {{{}}} misplaced {{{}}} excluded {}",
            right.join(", "),
            misplaced.join(", "),
            self.excluded_letters
        )
    }
}

/// True iff the word has each confirmed letter at its position
#[must_use]
pub fn has_confirmed_positions(word: &Word, correct_positions: &BTreeMap<usize, u8>) -> bool {
    correct_positions
        .iter()
        .all(|(&position, &letter)| word.char_at(position) == letter)
}

/// True iff the word contains every misplaced letter, and none at a position
/// it was reported misplaced from
#[must_use]
pub fn has_misplaced_letters(word: &Word, misplaced_pairs: &BTreeSet<(usize, u8)>) -> bool {
    misplaced_pairs
        .iter()
        .all(|&(_, letter)| word.has_letter(letter))
        && misplaced_pairs
            .iter()
            .all(|&(position, letter)| word.char_at(position) != letter)
}

/// True iff the word contains no excluded letter
#[inline]
#[must_use]
pub const fn excludes_none(word: &Word, excluded_letters: LetterSet) -> bool {
    word.letters().is_disjoint(excluded_letters)
}
