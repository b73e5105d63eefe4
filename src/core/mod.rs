//! Core domain types for Wordle
//!
//! Words, letter sets, per-round feedback and the letter frequency table.
//! Everything here is immutable once built and cheap to share.

mod feedback;
mod frequency;
mod letters;
mod word;

pub use feedback::Feedback;
pub use frequency::FrequencyTable;
pub use letters::{ALPHABET_LEN, LetterSet};
pub use word::{WORD_LENGTH, Word, WordError};
