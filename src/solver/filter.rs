//! Candidate filtering
//!
//! A full scan of the lexicon per round. The lexicon is a few thousand words,
//! so recomputing is cheaper than keeping a cache coherent.

use super::ConstraintState;
use crate::core::Word;
use log::{debug, info};

/// Words consistent with every constraint, in lexicon order
#[must_use]
pub fn filter_candidates<'a>(lexicon: &'a [Word], state: &ConstraintState) -> Vec<&'a Word> {
    let candidates: Vec<&Word> = lexicon.iter().filter(|word| state.admits(word)).collect();

    debug!("filter: {} of {} words admitted", candidates.len(), lexicon.len());
    if candidates.is_empty() && !lexicon.is_empty() {
        info!("no word satisfies {state}");
    }

    candidates
}
