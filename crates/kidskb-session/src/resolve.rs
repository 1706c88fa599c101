use tracing::debug;

use kidskb_core::history::HistoryChange;
use kidskb_core::text::{eq_ignore_case, recase, starts_with_ignore_case};
use kidskb_core::vocabulary::VocabEntry;

use super::types::{DisplayText, Highlight, ImageAction, KeyResponse, SessionState};
use super::SuggestionEngine;

impl SuggestionEngine {
    /// Resolution phase: runs after every edit. Either commits an exact
    /// vocabulary match or refreshes the ghost suggestion.
    pub(super) fn resolve(&mut self, state: &mut SessionState, navigated: bool) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        resp.side_effects
            .haptic_pulses
            .push(self.config.input_pulse_ms);

        if let Some(entry) = self.vocabulary.lookup_exact(&state.text_input) {
            self.commit_match(state, entry, navigated, &mut resp);
            return resp;
        }

        resp.image = ImageAction::Clear;

        if state.text_input.is_empty() {
            state.suggestion.clear();
            resp.display = Some(DisplayText::default());
            resp.highlight = Some(Highlight::Idle);
            return resp;
        }

        if !starts_with_ignore_case(&state.suggestion, &state.text_input) {
            state.suggestion.clear();
        }
        if state.suggestion.is_empty() {
            if let Some(word) = self.pick_suggestion(&state.text_input, &state.history) {
                state.suggestion = word;
            }
        }

        if !state.suggestion.is_empty() && !eq_ignore_case(&state.suggestion, &state.text_input) {
            state.suggestion = recase(&state.suggestion, state.is_upper_case);
            let ghost = state
                .suggestion
                .get(state.text_input.len()..)
                .unwrap_or_default()
                .to_string();
            let next = ghost.chars().next().map(|c| c.to_ascii_lowercase());
            resp.highlight = Some(next.map_or(Highlight::Typing, Highlight::Next));
            resp.display = Some(DisplayText {
                typed: state.text_input.clone(),
                ghost,
            });
        } else {
            resp.display = Some(DisplayText::plain(state.text_input.clone()));
            resp.highlight = Some(Highlight::Typing);
        }
        resp
    }

    fn commit_match(
        &self,
        state: &mut SessionState,
        entry: &VocabEntry,
        navigated: bool,
        resp: &mut KeyResponse,
    ) {
        debug!(word = %entry.word, navigated, "exact match");
        state.suggestion.clear();

        resp.display = Some(DisplayText::plain(recase(&entry.word, state.is_upper_case)));
        resp.highlight = Some(Highlight::Matched);
        resp.image = ImageAction::Show {
            identifier: entry.identifier.clone(),
        };
        resp.side_effects
            .haptic_pulses
            .push(self.config.match_pulse_ms);
        resp.side_effects.announce = Some(entry.word.clone());

        // Words reached through back/forward are already in the history.
        if !navigated && state.history.commit(&entry.word) == HistoryChange::Appended {
            resp.side_effects.save_history = true;
        }
    }
}
