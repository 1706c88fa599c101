//! Suggestion engine and keyboard session for the kids keyboard.
//!
//! `SuggestionEngine` turns one key press plus the current `SessionState`
//! into the next state and a `KeyResponse` describing what the host should
//! render (text with ghost completion, picture, highlighted key) and which
//! side effects to fire. `KeyboardSession` drives the engine against the
//! host's collaborators.

pub(crate) mod types;

mod candidate_gen;
pub mod collaborators;
mod key_handlers;
mod keyboard;
pub mod layout;
mod resolve;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use kidskb_core::settings::{settings, Settings};
use kidskb_core::vocabulary::Vocabulary;

pub use candidate_gen::{rank_candidates, RankedCandidate};
pub use keyboard::KeyboardSession;
pub use types::{
    DisplayText, Highlight, ImageAction, KeyEvent, KeyResponse, SessionState, SideEffects,
};

/// Engine tunables, normally taken from the global settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub input_pulse_ms: u64,
    pub match_pulse_ms: u64,
    pub recycle_when_exhausted: bool,
}

impl EngineConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            input_pulse_ms: s.haptics.input_pulse_ms,
            match_pulse_ms: s.haptics.match_pulse_ms,
            recycle_when_exhausted: s.suggestion.recycle_when_exhausted,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}

/// Stateless apart from its RNG: all editing state lives in `SessionState`.
pub struct SuggestionEngine {
    vocabulary: Arc<Vocabulary>,
    config: EngineConfig,
    /// Only used to recycle an already-used word when all matches are exhausted.
    rng: StdRng,
}

impl SuggestionEngine {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            config: EngineConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic recycle picks (tests, replay).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
