//! Constraint engine and guess ranking
//!
//! Feedback is folded into a `ConstraintState`, the lexicon is filtered against
//! it, and the survivors are ranked by letter-frequency strategies.

mod constraints;
mod engine;
pub mod filter;
pub mod scoring;
pub mod strategy;

pub use constraints::{
    ConstraintState, excludes_none, has_confirmed_positions, has_misplaced_letters,
};
pub use engine::{Recommendations, Solver};
pub use filter::filter_candidates;
pub use strategy::{RankerConfig, RankingStrategy, ScoredWord, StrategyKind};
