//! Letter-frequency scoring
//!
//! Scores are only defined for words with five distinct letters: a guess that
//! repeats a letter wastes a slot that could have tested something new.

use super::ConstraintState;
use crate::core::{FrequencyTable, LetterSet, Word};

/// Sum of the frequency weights of the word's letters
///
/// Returns `None` for words with a repeated letter.
///
/// # Examples
/// ```
/// use wordle_helper::core::{FrequencyTable, Word};
/// use wordle_helper::solver::scoring::letter_score;
///
/// let table = FrequencyTable::from_pairs([(b'a', 10), (b'b', 1), (b'c', 5)]);
/// assert_eq!(letter_score(&Word::new("abcxy").unwrap(), &table), Some(16));
/// assert_eq!(letter_score(&Word::new("aabcx").unwrap(), &table), None);
/// ```
#[must_use]
pub fn letter_score(word: &Word, table: &FrequencyTable) -> Option<u64> {
    weighted_score(word, table, |_| 1)
}

/// Letter score with every vowel (a, e, i, o, u, y) multiplied by `boost`
///
/// Returns `None` for words with a repeated letter.
#[must_use]
pub fn vowel_weighted_score(word: &Word, table: &FrequencyTable, boost: u64) -> Option<u64> {
    weighted_score(word, table, |letter| {
        if LetterSet::VOWELS.contains(letter) {
            boost
        } else {
            1
        }
    })
}

fn weighted_score(
    word: &Word,
    table: &FrequencyTable,
    multiplier: impl Fn(u8) -> u64,
) -> Option<u64> {
    if word.has_repeated_letters() {
        return None;
    }
    // Saturates so an oversized boost still ranks vowel-heavy words first
    Some(word.chars().iter().fold(0u64, |total, &letter| {
        total.saturating_add(u64::from(table.weight(letter)).saturating_mul(multiplier(letter)))
    }))
}

/// Letters worth testing next, most frequent first
///
/// A letter is suggested when it is in the frequency table, has not been
/// tested yet, and occurs in at least one surviving candidate.
#[must_use]
pub fn suggested_letters(
    table: &FrequencyTable,
    state: &ConstraintState,
    candidates: &[&Word],
) -> Vec<u8> {
    let in_candidates: LetterSet = candidates
        .iter()
        .fold(LetterSet::EMPTY, |acc, word| acc.union(word.letters()));

    let letters = table
        .letters()
        .difference(state.tested_letters())
        .intersection(in_candidates);

    table.rank(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn letter_score_sums_weights() {
        let table = FrequencyTable::from_pairs([(b'a', 10), (b'b', 1), (b'c', 5)]);
        assert_eq!(letter_score(&word("abcxy"), &table), Some(16));
    }

    #[test]
    fn letter_score_skips_repeats() {
        let table = FrequencyTable::from_pairs([(b'a', 10), (b'b', 1), (b'c', 5)]);
        assert_eq!(letter_score(&word("aabcx"), &table), None);
        assert_eq!(letter_score(&word("speed"), &FrequencyTable::default()), None);
    }

    #[test]
    fn letter_score_with_default_table() {
        // s + l + a + t + e
        let expected = 1553 + 872 + 1213 + 896 + 1650;
        assert_eq!(
            letter_score(&word("slate"), &FrequencyTable::default()),
            Some(expected)
        );
    }

    #[test]
    fn vowel_boost_is_exact() {
        let table = FrequencyTable::from_pairs([(b'e', 1650)]);
        assert_eq!(vowel_weighted_score(&word("ebcdf"), &table, 100), Some(165_000));
    }

    #[test]
    fn vowel_boost_counts_y_and_leaves_consonants() {
        let table = FrequencyTable::from_pairs([(b'y', 2), (b'r', 3)]);
        // y boosted to 200, r stays 3
        assert_eq!(vowel_weighted_score(&word("rynbd"), &table, 100), Some(203));
    }

    #[test]
    fn huge_vowel_boost_saturates() {
        let table = FrequencyTable::default();
        assert_eq!(
            vowel_weighted_score(&word("audio"), &table, u64::MAX / 2),
            Some(u64::MAX)
        );
        // consonant-only words are unaffected by the boost
        assert_eq!(
            vowel_weighted_score(&word("crwth"), &table, u64::MAX),
            letter_score(&word("crwth"), &table)
        );
    }

    #[test]
    fn vowel_weighted_skips_repeats() {
        assert_eq!(
            vowel_weighted_score(&word("eerie"), &FrequencyTable::default(), 100),
            None
        );
    }

    #[test]
    fn suggestions_exclude_tested_letters() {
        let table = FrequencyTable::default();
        let lexicon = [word("crane"), word("sloth")];
        let candidates: Vec<&Word> = lexicon.iter().collect();
        let state = ConstraintState::new()
            .analyze(&word("crane"), &[4], &[0])
            .unwrap();

        let suggested = suggested_letters(&table, &state, &candidates);
        // c, e tested present; r, a, n tested absent
        assert_eq!(suggested, b"sotlh");
    }

    #[test]
    fn suggestions_limited_to_candidate_letters() {
        let table = FrequencyTable::default();
        let lexicon = [word("abbey")];
        let candidates: Vec<&Word> = lexicon.iter().collect();

        let suggested = suggested_letters(&table, &ConstraintState::new(), &candidates);
        assert_eq!(suggested, b"eayb");
    }

    #[test]
    fn no_candidates_no_suggestions() {
        let suggested =
            suggested_letters(&FrequencyTable::default(), &ConstraintState::new(), &[]);
        assert!(suggested.is_empty());
    }
}
