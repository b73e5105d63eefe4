//! One-shot analysis command
//!
//! Folds a list of rounds given on the command line and reports on the result.

use crate::core::{Feedback, Word};
use crate::error::{Result, SolverError};
use crate::solver::{Recommendations, Solver};

/// Parse one round written as `WORD=MARKS` or `WORD:CORRECT:MISPLACED`
///
/// # Errors
///
/// Returns `MalformedWord`, `MalformedFeedback` or an index error for bad input.
///
/// # Examples
/// ```
/// use wordle_helper::commands::analyze::parse_round;
///
/// let (guess, feedback) = parse_round("abcde:0,1:4").unwrap();
/// assert_eq!(guess.text(), "abcde");
/// assert_eq!(feedback.to_marks(), "GG--Y");
///
/// let (_, same) = parse_round("abcde=GG--Y").unwrap();
/// assert_eq!(feedback, same);
/// ```
pub fn parse_round(round: &str) -> Result<(Word, Feedback)> {
    if let Some((word, marks)) = round.split_once('=') {
        return Ok((Word::new(word.trim())?, Feedback::from_marks(marks)?));
    }

    let mut parts = round.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(word), Some(correct), misplaced) => Ok((
            Word::new(word.trim())?,
            Feedback::from_index_lists(correct, misplaced.unwrap_or(""))?,
        )),
        _ => Err(SolverError::MalformedFeedback(round.to_string())),
    }
}

/// Apply every round in order and return the final report
///
/// All rounds are parsed before any is applied, so a bad round leaves the
/// solver untouched.
///
/// # Errors
///
/// Returns the first parse error among `rounds`.
pub fn analyze_rounds<'a, S: AsRef<str>>(
    solver: &mut Solver<'a>,
    rounds: &[S],
) -> Result<Recommendations<'a>> {
    let parsed = rounds
        .iter()
        .map(|round| parse_round(round.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    for (guess, feedback) in parsed {
        solver.apply(guess, feedback);
    }
    Ok(solver.recommendations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyTable;
    use crate::solver::RankerConfig;
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn parse_marks_round() {
        let (guess, feedback) = parse_round("CRANE=gy--g").unwrap();
        assert_eq!(guess.text(), "crane");
        assert_eq!(feedback, Feedback::new([0, 4], [1]).unwrap());
    }

    #[test]
    fn parse_index_round_without_misplaced() {
        let (_, feedback) = parse_round("crane:0 4").unwrap();
        assert_eq!(feedback, Feedback::new([0, 4], []).unwrap());
    }

    #[test]
    fn parse_rejects_bad_rounds() {
        assert!(matches!(
            parse_round("crane"),
            Err(SolverError::MalformedFeedback(_))
        ));
        assert!(matches!(
            parse_round("cran=GGGGG"),
            Err(SolverError::MalformedWord(_))
        ));
        assert!(parse_round("crane:5:").unwrap_err().is_invalid_index());
    }

    #[test]
    fn rounds_fold_in_order() {
        let lexicon = Lexicon::new(words_from_slice(&["abcde", "edcba", "fghij", "abyss"]))
            .unwrap();
        let table = FrequencyTable::default();
        let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());

        let report = analyze_rounds(&mut solver, &["abcde:0,1:4"]).unwrap();
        assert!(report.candidates.is_empty());
        assert_eq!(solver.history().len(), 1);
    }

    #[test]
    fn bad_round_applies_nothing() {
        let lexicon = Lexicon::embedded().unwrap();
        let table = FrequencyTable::default();
        let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());

        let result = analyze_rounds(&mut solver, &["crane=GY--G", "slate=XXXXX"]);
        assert!(result.is_err());
        assert!(solver.state().is_empty());
    }
}
