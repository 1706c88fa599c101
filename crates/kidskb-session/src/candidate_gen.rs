use rand::seq::SliceRandom;
use tracing::debug;

use kidskb_core::history::History;
use kidskb_core::vocabulary::Vocabulary;

use super::SuggestionEngine;

/// A prefix match in suggestion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub word: String,
    pub identifier: String,
    /// Already committed once; skipped while fresher words remain.
    pub in_history: bool,
}

/// Prefix matches for `typed`, shortest identifier first, each marked with
/// whether the history already holds it.
pub fn rank_candidates(vocab: &Vocabulary, typed: &str, history: &History) -> Vec<RankedCandidate> {
    vocab
        .prefix_matches(typed)
        .into_iter()
        .map(|e| RankedCandidate {
            word: e.word.clone(),
            identifier: e.identifier.clone(),
            in_history: history.contains(&e.word),
        })
        .collect()
}

impl SuggestionEngine {
    /// Pick the ghost completion for `typed`.
    ///
    /// The first candidate not yet in the history wins. When every match is
    /// already used and recycling is on, a random match is suggested again.
    pub(super) fn pick_suggestion(&mut self, typed: &str, history: &History) -> Option<String> {
        let ranked = rank_candidates(&self.vocabulary, typed, history);
        if let Some(fresh) = ranked.iter().find(|c| !c.in_history) {
            return Some(fresh.word.clone());
        }
        if !self.config.recycle_when_exhausted {
            return None;
        }
        let recycled = ranked.choose(&mut self.rng).map(|c| c.word.clone());
        if let Some(word) = &recycled {
            debug!(typed, word = %word, "all matches used, recycling");
        }
        recycled
    }
}
