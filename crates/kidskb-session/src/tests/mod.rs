mod keyboard;

use std::sync::Arc;

use kidskb_core::history::History;
use kidskb_core::vocabulary::Vocabulary;

use super::types::{KeyEvent, KeyResponse, SessionState};
use super::{EngineConfig, SuggestionEngine};

pub(super) const TEST_IDENTIFIERS: &[&str] = &[
    "a_cat",
    "a_car",
    "a_card",
    "a_dog",
    "a_fish",
    "a_ice_cream",
    "a_igloo",
    // not an illustration: ignored by the vocabulary
    "ic_launcher",
];

pub(super) fn make_test_vocab() -> Arc<Vocabulary> {
    Arc::new(Vocabulary::from_identifiers(TEST_IDENTIFIERS.iter().copied(), "a_").unwrap())
}

pub(super) fn vocab_of(identifiers: &[&str]) -> Arc<Vocabulary> {
    Arc::new(Vocabulary::from_identifiers(identifiers.iter().copied(), "a_").unwrap())
}

pub(super) fn test_config() -> EngineConfig {
    EngineConfig {
        input_pulse_ms: 10,
        match_pulse_ms: 100,
        recycle_when_exhausted: true,
    }
}

pub(super) fn make_engine(vocab: Arc<Vocabulary>) -> SuggestionEngine {
    SuggestionEngine::new(vocab)
        .with_config(test_config())
        .with_seed(7)
}

/// Lower-case state with the given history.
pub(super) fn lower_state(history: &[&str]) -> SessionState {
    SessionState::new(History::from_words(history.iter().copied())).with_upper_case(false)
}

pub(super) fn letter_key(c: char) -> KeyEvent {
    if c == ' ' {
        KeyEvent::Space
    } else {
        KeyEvent::Letter(c)
    }
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(
    engine: &mut SuggestionEngine,
    state: &mut SessionState,
    s: &str,
) -> Vec<KeyResponse> {
    s.chars()
        .map(|c| engine.handle_key(state, letter_key(c)))
        .collect()
}
