//! Word lists for the helper
//!
//! Provides the embedded lexicon compiled into the binary, a loader for custom
//! word list files, and the `Lexicon` wrapper every solver works against.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use lexicon::Lexicon;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_not_trivial() {
        assert!(WORDS_COUNT > 1000, "Expected a full lexicon, got {WORDS_COUNT}");
    }
}
