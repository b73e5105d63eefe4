//! Main solver interface

use super::filter::filter_candidates;
use super::scoring::suggested_letters;
use super::strategy::{RankerConfig, RankingContext, RankingStrategy, ScoredWord, StrategyKind};
use super::ConstraintState;
use crate::core::{Feedback, FrequencyTable, LetterSet, Word};
use crate::error::Result;
use crate::wordlists::Lexicon;
use log::info;

/// Everything the helper has to say after a round
#[derive(Debug, Clone)]
pub struct Recommendations<'a> {
    /// The state the report was computed from
    pub state: ConstraintState,
    /// Words still consistent with the state, in lexicon order
    pub candidates: Vec<&'a Word>,
    /// Untested letters that occur in some candidate, most frequent first
    pub suggestions: Vec<u8>,
    pub best_of_possible: Vec<ScoredWord<'a>>,
    pub best_fresh: Vec<ScoredWord<'a>>,
    pub best_fresh_vowel_weighted: Vec<ScoredWord<'a>>,
    /// Only computed when the vowel-weighted list runs short
    pub last_ditch_fresh: Option<Vec<ScoredWord<'a>>>,
}

impl<'a> Recommendations<'a> {
    /// Compute candidates, suggestions and every ranked list for a state
    #[must_use]
    pub fn compute(
        lexicon: &'a [Word],
        table: &FrequencyTable,
        config: RankerConfig,
        state: &ConstraintState,
    ) -> Self {
        let candidates = filter_candidates(lexicon, state);
        let suggestions = suggested_letters(table, state, &candidates);

        let ctx = RankingContext {
            lexicon,
            candidates: &candidates,
            state,
            table,
            suggestions: suggestions.iter().copied().collect::<LetterSet>(),
            config,
        };

        let best_of_possible = StrategyKind::BestOfPossible.rank(&ctx);
        let best_fresh = StrategyKind::BestFresh.rank(&ctx);
        let best_fresh_vowel_weighted = StrategyKind::BestFreshVowelWeighted.rank(&ctx);
        let last_ditch_fresh = (best_fresh_vowel_weighted.len() < config.last_ditch_threshold)
            .then(|| StrategyKind::LastDitchFresh.rank(&ctx));

        Self {
            state: state.clone(),
            candidates,
            suggestions,
            best_of_possible,
            best_fresh,
            best_fresh_vowel_weighted,
            last_ditch_fresh,
        }
    }

    /// The ranked list a strategy produced, if it ran this round
    #[must_use]
    pub fn ranked(&self, kind: StrategyKind) -> Option<&[ScoredWord<'a>]> {
        match kind {
            StrategyKind::BestOfPossible => Some(self.best_of_possible.as_slice()),
            StrategyKind::BestFresh => Some(self.best_fresh.as_slice()),
            StrategyKind::BestFreshVowelWeighted => Some(self.best_fresh_vowel_weighted.as_slice()),
            StrategyKind::LastDitchFresh => self.last_ditch_fresh.as_deref(),
        }
    }

    /// The single best guess: a possible answer if any, otherwise a fresh word
    #[must_use]
    pub fn top_pick(&self) -> Option<&'a Word> {
        self.best_of_possible
            .first()
            .or_else(|| self.best_fresh_vowel_weighted.first())
            .or_else(|| self.last_ditch_fresh.as_ref().and_then(|l| l.first()))
            .map(|scored| scored.word)
            .or_else(|| self.candidates.first().copied())
    }
}

/// Interactive solving session
///
/// Owns one `ConstraintState` and the guesses that built it. The lexicon and
/// frequency table are borrowed read-only, so any number of sessions can share
/// them.
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    table: &'a FrequencyTable,
    config: RankerConfig,
    state: ConstraintState,
    history: Vec<(Word, Feedback)>,
}

impl<'a> Solver<'a> {
    /// Create a new solver with an empty state
    ///
    /// # Parameters
    /// - `lexicon`: Words to filter and rank
    /// - `table`: Letter weights for scoring
    /// - `config`: Ranking tunables
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, table: &'a FrequencyTable, config: RankerConfig) -> Self {
        Self {
            lexicon,
            table,
            config,
            state: ConstraintState::new(),
            history: Vec::new(),
        }
    }

    /// Fold validated feedback for a guess into the state and report
    pub fn apply(&mut self, guess: Word, feedback: Feedback) -> Recommendations<'a> {
        self.state = self.state.apply(&guess, &feedback);
        self.history.push((guess, feedback));
        self.recommendations()
    }

    /// Validate a raw guess and index sets, fold them in, and report
    ///
    /// # Errors
    /// - `MalformedWord` if `guess` is not five letters
    /// - `InvalidIndex`/`OverlappingIndex` for bad index sets
    ///
    /// The state is unchanged on error.
    pub fn analyze(
        &mut self,
        guess: &str,
        correct: &[usize],
        misplaced: &[usize],
    ) -> Result<Recommendations<'a>> {
        let guess = Word::new(guess)?;
        let feedback = Feedback::new(correct.iter().copied(), misplaced.iter().copied())?;
        Ok(self.apply(guess, feedback))
    }

    /// Forget every guess
    pub fn reset(&mut self) {
        info!("reset after {} guesses", self.history.len());
        self.state = ConstraintState::new();
        self.history.clear();
    }

    /// Drop the last guess and rebuild the state from the rest
    ///
    /// Returns the removed guess, or `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        let last = self.history.pop()?;
        self.state = self
            .history
            .iter()
            .fold(ConstraintState::new(), |state, (guess, feedback)| {
                state.apply(guess, feedback)
            });
        Some(last)
    }

    /// Report for the current state
    #[must_use]
    pub fn recommendations(&self) -> Recommendations<'a> {
        Recommendations::compute(self.lexicon.words(), self.table, self.config, &self.state)
    }

    /// Words consistent with the current state
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        filter_candidates(self.lexicon.words(), &self.state)
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// Guesses folded into the state, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }
}
