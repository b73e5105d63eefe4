//! Shared helpers for integration tests

#![allow(dead_code)]

use wordle_helper::core::{ALPHABET_LEN, Feedback, WORD_LENGTH, Word};

pub fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

/// Feedback the game would give for `guess` against `answer`
///
/// Greens first, then yellows left to right while unmatched copies of the
/// letter remain in the answer.
pub fn feedback_for(guess: &Word, answer: &Word) -> Feedback {
    let guess = guess.chars();
    let answer = answer.chars();

    let mut correct = Vec::new();
    let mut unmatched = [0u8; ALPHABET_LEN];
    for position in 0..WORD_LENGTH {
        if guess[position] == answer[position] {
            correct.push(position);
        } else {
            unmatched[usize::from(answer[position] - b'a')] += 1;
        }
    }

    let mut misplaced = Vec::new();
    for position in 0..WORD_LENGTH {
        if guess[position] == answer[position] {
            continue;
        }
        let slot = &mut unmatched[usize::from(guess[position] - b'a')];
        if *slot > 0 {
            *slot -= 1;
            misplaced.push(position);
        }
    }

    Feedback::new(correct, misplaced).unwrap()
}
