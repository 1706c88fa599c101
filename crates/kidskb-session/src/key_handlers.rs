use tracing::{debug_span, trace};

use super::types::{KeyEvent, KeyResponse, SessionState};
use super::SuggestionEngine;

impl SuggestionEngine {
    /// Process a key event on an owned state and return the next state.
    pub fn on_key_event(
        &mut self,
        state: SessionState,
        key: KeyEvent,
    ) -> (SessionState, KeyResponse) {
        let mut state = state;
        let resp = self.handle_key(&mut state, key);
        (state, resp)
    }

    /// Process a key event in place. Returns a KeyResponse describing what the caller should do.
    pub fn handle_key(&mut self, state: &mut SessionState, key: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?key).entered();

        let navigated = match key {
            // Shift only re-renders key labels; text and highlight stay.
            KeyEvent::Shift => return self.toggle_case(state),

            KeyEvent::Letter(c) if !c.is_ascii_alphabetic() => {
                trace!(?c, "ignoring non-letter key");
                return KeyResponse::not_consumed();
            }

            KeyEvent::Clear => {
                state.text_input.clear();
                state.suggestion.clear();
                false
            }

            KeyEvent::Delete => {
                state.text_input.pop();
                false
            }

            KeyEvent::HistoryBack => {
                navigate_history(state, -1);
                true
            }

            KeyEvent::HistoryForward => {
                navigate_history(state, 1);
                true
            }

            KeyEvent::Letter(c) => {
                let c = if state.is_upper_case {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                };
                type_char(state, c);
                false
            }

            KeyEvent::Space => {
                type_char(state, ' ');
                false
            }
        };

        trim_leading_whitespace(&mut state.text_input);
        self.resolve(state, navigated)
    }

    fn toggle_case(&self, state: &mut SessionState) -> KeyResponse {
        state.is_upper_case = !state.is_upper_case;
        let mut resp = KeyResponse::consumed();
        resp.relabel = Some(state.is_upper_case);
        resp.side_effects
            .haptic_pulses
            .push(self.config.input_pulse_ms);
        resp
    }
}

/// Append a typed character, or start a new word when the text already
/// equals the ghosted suggestion.
fn type_char(state: &mut SessionState, c: char) {
    if !state.suggestion.is_empty() && state.text_input.eq_ignore_ascii_case(&state.suggestion) {
        state.text_input.clear();
    }
    state.text_input.push(c);
}

fn navigate_history(state: &mut SessionState, delta: i32) {
    let word = if delta < 0 {
        state.history.back()
    } else {
        state.history.forward()
    };
    if let Some(word) = word.map(str::to_string) {
        state.text_input = word.clone();
        state.suggestion = word;
    }
}

fn trim_leading_whitespace(text: &mut String) {
    let trimmed = text.len() - text.trim_start().len();
    if trimmed > 0 {
        text.drain(..trimmed);
    }
}
