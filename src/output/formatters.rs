//! Formatting utilities for terminal output

use crate::core::Word;
use crate::solver::ScoredWord;

/// Join letters with spaces: `e s a r`
#[must_use]
pub fn format_letters(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&letter| (letter as char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated list of the first `limit` words, with a count of the rest
#[must_use]
pub fn format_words(words: &[&Word], limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(|w| w.text()).collect();
    with_remainder(shown.join(", "), words.len(), limit)
}

/// `word (score)` entries for the first `limit` ranked words
#[must_use]
pub fn format_scored(ranked: &[ScoredWord<'_>], limit: usize) -> String {
    let shown: Vec<String> = ranked
        .iter()
        .take(limit)
        .map(|s| format!("{} ({})", s.word, s.score))
        .collect();
    with_remainder(shown.join(", "), ranked.len(), limit)
}

fn with_remainder(list: String, total: usize, limit: usize) -> String {
    if total > limit {
        format!("{list} … +{} more", total - limit)
    } else {
        list
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn letters_joined_with_spaces() {
        assert_eq!(format_letters(b"esa"), "e s a");
        assert_eq!(format_letters(b""), "");
    }

    #[test]
    fn words_truncated_with_count() {
        let owned = words(&["crane", "slate", "irate"]);
        let refs: Vec<&Word> = owned.iter().collect();

        assert_eq!(format_words(&refs, 5), "crane, slate, irate");
        assert_eq!(format_words(&refs, 2), "crane, slate … +1 more");
    }

    #[test]
    fn scored_entries_show_score() {
        let owned = words(&["crane", "slate"]);
        let ranked = [
            ScoredWord { word: &owned[1], score: 6184 },
            ScoredWord { word: &owned[0], score: 5202 },
        ];
        assert_eq!(format_scored(&ranked, 1), "slate (6184) … +1 more");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
