//! Letter popularity weights
//!
//! The default table holds letter counts taken over a Wordle guess list. Only the
//! relative order of the weights matters to the scorers.

use super::LetterSet;
use super::letters::ALPHABET_LEN;

/// Corpus letter counts used when no other table is supplied
const DEFAULT_WEIGHTS: [(u8, u32); ALPHABET_LEN] = [
    (b'q', 24),
    (b'j', 47),
    (b'z', 50),
    (b'x', 53),
    (b'v', 175),
    (b'w', 258),
    (b'f', 293),
    (b'b', 363),
    (b'k', 364),
    (b'g', 369),
    (b'm', 439),
    (b'y', 464),
    (b'h', 492),
    (b'p', 506),
    (b'u', 533),
    (b'c', 583),
    (b'd', 620),
    (b'n', 723),
    (b'i', 850),
    (b'l', 872),
    (b't', 896),
    (b'o', 1017),
    (b'r', 1033),
    (b'a', 1213),
    (b's', 1553),
    (b'e', 1650),
];

/// Immutable mapping from letter to popularity weight
///
/// Letters never given a weight are absent from the table and weigh zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    weights: [u32; ALPHABET_LEN],
    letters: LetterSet,
}

impl FrequencyTable {
    /// Build a table from `(letter, weight)` pairs
    ///
    /// Letters are normalized to lowercase; non-letters are ignored. A letter listed
    /// twice keeps its last weight.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_pairs([(b'a', 10), (b'b', 1), (b'c', 5)]);
    /// assert_eq!(table.weight(b'a'), 10);
    /// assert_eq!(table.weight(b'z'), 0);
    /// ```
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u8, u32)>) -> Self {
        let mut weights = [0; ALPHABET_LEN];
        let mut letters = LetterSet::EMPTY;
        for (letter, weight) in pairs {
            let letter = letter.to_ascii_lowercase();
            if letter.is_ascii_lowercase() {
                weights[usize::from(letter - b'a')] = weight;
                letters.insert(letter);
            }
        }
        Self { weights, letters }
    }

    /// Weight of a letter, zero for letters outside the table
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: u8) -> u32 {
        if self.letters.contains(letter) {
            self.weights[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Letters that have an entry in the table
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Order letters by descending weight, ties alphabetically
    #[must_use]
    pub fn rank(&self, letters: LetterSet) -> Vec<u8> {
        let mut ranked: Vec<u8> = letters.iter().collect();
        ranked.sort_by(|&a, &b| self.weight(b).cmp(&self.weight(a)));
        ranked
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_WEIGHTS)
    }
}
