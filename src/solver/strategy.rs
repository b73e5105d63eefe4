//! Guess ranking strategies
//!
//! Defines the `RankingStrategy` trait and its concrete implementations. Each
//! strategy picks a pool of words and a score; ranking sorts the pool by score,
//! highest first, keeping lexicon order between equal scores.

use super::ConstraintState;
use super::scoring::{letter_score, vowel_weighted_score};
use crate::core::{FrequencyTable, LetterSet, Word};

/// Tunables for the ranking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerConfig {
    /// Multiplier applied to vowel weights by the vowel-weighted strategy
    pub vowel_boost: u64,
    /// Run the last-ditch strategy when the vowel-weighted list is shorter than this
    pub last_ditch_threshold: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            vowel_boost: 100,
            last_ditch_threshold: 3,
        }
    }
}

/// A word and the score a strategy gave it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'w> {
    pub word: &'w Word,
    pub score: u64,
}

/// Everything a strategy may look at for one round
pub struct RankingContext<'w, 'c> {
    pub lexicon: &'w [Word],
    pub candidates: &'c [&'w Word],
    pub state: &'c ConstraintState,
    pub table: &'c FrequencyTable,
    pub suggestions: LetterSet,
    pub config: RankerConfig,
}

/// A strategy for ranking guesses
pub trait RankingStrategy {
    /// Words eligible for this strategy
    fn pool<'w>(&self, ctx: &RankingContext<'w, '_>) -> Vec<&'w Word>;

    /// Score of a pool word, `None` to leave it out
    fn score(&self, word: &Word, ctx: &RankingContext<'_, '_>) -> Option<u64>;

    /// Score the pool and sort it, best first
    ///
    /// Words with a repeated letter never appear in the output.
    fn rank<'w>(&self, ctx: &RankingContext<'w, '_>) -> Vec<ScoredWord<'w>> {
        let mut ranked: Vec<ScoredWord<'w>> = self
            .pool(ctx)
            .into_iter()
            .filter(|word| !word.has_repeated_letters())
            .filter_map(|word| self.score(word, ctx).map(|score| ScoredWord { word, score }))
            .collect();

        // Stable: equal scores keep lexicon order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

/// Most letter-rich word still consistent with every constraint
pub struct BestOfPossible;

impl RankingStrategy for BestOfPossible {
    fn pool<'w>(&self, ctx: &RankingContext<'w, '_>) -> Vec<&'w Word> {
        ctx.candidates.to_vec()
    }

    fn score(&self, word: &Word, ctx: &RankingContext<'_, '_>) -> Option<u64> {
        letter_score(word, ctx.table)
    }
}

/// Lexicon words made only of untested letters
fn fresh_pool<'w>(ctx: &RankingContext<'w, '_>, avoid: LetterSet) -> Vec<&'w Word> {
    ctx.lexicon
        .iter()
        .filter(|word| word.letters().is_disjoint(avoid))
        .collect()
}

/// Word that tests the most frequent letters not yet tried
///
/// Ignores whether the word could be the answer.
pub struct BestFresh;

impl RankingStrategy for BestFresh {
    fn pool<'w>(&self, ctx: &RankingContext<'w, '_>) -> Vec<&'w Word> {
        fresh_pool(ctx, ctx.state.tested_letters())
    }

    fn score(&self, word: &Word, ctx: &RankingContext<'_, '_>) -> Option<u64> {
        letter_score(word, ctx.table)
    }
}

/// Like [`BestFresh`], with vowels weighted up by `RankerConfig::vowel_boost`
pub struct BestFreshVowelWeighted;

impl RankingStrategy for BestFreshVowelWeighted {
    fn pool<'w>(&self, ctx: &RankingContext<'w, '_>) -> Vec<&'w Word> {
        fresh_pool(ctx, ctx.state.tested_letters())
    }

    fn score(&self, word: &Word, ctx: &RankingContext<'_, '_>) -> Option<u64> {
        vowel_weighted_score(word, ctx.table, ctx.config.vowel_boost)
    }
}

/// Fallback when few fresh words remain
///
/// Vowels may be reused even if already tested; the score is how many
/// suggested letters the word covers.
pub struct LastDitchFresh;

impl RankingStrategy for LastDitchFresh {
    fn pool<'w>(&self, ctx: &RankingContext<'w, '_>) -> Vec<&'w Word> {
        fresh_pool(
            ctx,
            ctx.state.tested_letters().difference(LetterSet::VOWELS),
        )
    }

    fn score(&self, word: &Word, ctx: &RankingContext<'_, '_>) -> Option<u64> {
        Some(word.letters().intersection(ctx.suggestions).len() as u64)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    BestOfPossible,
    BestFresh,
    BestFreshVowelWeighted,
    LastDitchFresh,
}

impl StrategyKind {
    /// Every strategy, in display order
    pub const ALL: [Self; 4] = [
        Self::BestOfPossible,
        Self::BestFresh,
        Self::BestFreshVowelWeighted,
        Self::LastDitchFresh,
    ];

    /// Short name used in reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BestOfPossible => "best-of-possible",
            Self::BestFresh => "best-fresh",
            Self::BestFreshVowelWeighted => "best-fresh-vowel-weighted",
            Self::LastDitchFresh => "last-ditch-fresh",
        }
    }
}

impl RankingStrategy for StrategyKind {
    fn pool<'w>(&self, ctx: &RankingContext<'w, '_>) -> Vec<&'w Word> {
        match self {
            Self::BestOfPossible => BestOfPossible.pool(ctx),
            Self::BestFresh => BestFresh.pool(ctx),
            Self::BestFreshVowelWeighted => BestFreshVowelWeighted.pool(ctx),
            Self::LastDitchFresh => LastDitchFresh.pool(ctx),
        }
    }

    fn score(&self, word: &Word, ctx: &RankingContext<'_, '_>) -> Option<u64> {
        match self {
            Self::BestOfPossible => BestOfPossible.score(word, ctx),
            Self::BestFresh => BestFresh.score(word, ctx),
            Self::BestFreshVowelWeighted => BestFreshVowelWeighted.score(word, ctx),
            Self::LastDitchFresh => LastDitchFresh.score(word, ctx),
        }
    }
}
