use tracing::{debug, warn};

use kidskb_core::history::History;
use kidskb_core::settings::settings;

use super::collaborators::{
    Haptics, HistoryStore, ImageResolver, NoHaptics, NullHistoryStore, Silent, Speaker,
};
use super::types::{ImageAction, KeyEvent, KeyResponse, SessionState};
use super::SuggestionEngine;

/// Owns the editing state and runs each key press against the engine,
/// then carries out the requested side effects on the host collaborators.
pub struct KeyboardSession<R: ImageResolver> {
    engine: SuggestionEngine,
    state: SessionState,
    sound_on: bool,

    images: R,
    image: Option<R::Image>,

    store: Box<dyn HistoryStore + Send>,
    haptics: Box<dyn Haptics + Send>,
    speaker: Box<dyn Speaker + Send>,
}

impl<R: ImageResolver> KeyboardSession<R> {
    pub fn new(engine: SuggestionEngine, images: R) -> Self {
        Self {
            engine,
            state: SessionState::default(),
            sound_on: settings().keyboard.sound_on,
            images,
            image: None,
            store: Box::new(NullHistoryStore),
            haptics: Box::new(NoHaptics),
            speaker: Box::new(Silent),
        }
    }

    /// Session with its history loaded from `store`.
    pub fn open(
        engine: SuggestionEngine,
        images: R,
        store: impl HistoryStore + Send + 'static,
    ) -> Self {
        Self::new(engine, images).with_history_store(store)
    }

    /// Attach a history store and load the saved history from it.
    /// A failing store leaves the history empty.
    pub fn with_history_store(mut self, store: impl HistoryStore + Send + 'static) -> Self {
        let words = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load history, starting empty");
            Vec::new()
        });
        debug!(count = words.len(), "history loaded");
        self.state.history = History::from_words(words);
        self.store = Box::new(store);
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + Send + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn with_speaker(mut self, speaker: impl Speaker + Send + 'static) -> Self {
        self.speaker = Box::new(speaker);
        self
    }

    pub fn with_sound(mut self, on: bool) -> Self {
        self.sound_on = on;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Picture currently on screen.
    pub fn image(&self) -> Option<&R::Image> {
        self.image.as_ref()
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    /// Flip the sound flag; editing state is untouched.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        self.sound_on
    }

    /// Handle a key by its label. Unknown or empty labels are ignored.
    pub fn handle_label(&mut self, label: &str) -> KeyResponse {
        match KeyEvent::from_label(label) {
            Some(key) => self.handle_key(key),
            None => KeyResponse::not_consumed(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResponse {
        let resp = self.engine.handle_key(&mut self.state, key);
        self.perform(&resp);
        resp
    }

    fn perform(&mut self, resp: &KeyResponse) {
        for &millis in &resp.side_effects.haptic_pulses {
            if let Err(e) = self.haptics.pulse(millis) {
                warn!(error = %e, millis, "haptic pulse failed");
            }
        }

        match &resp.image {
            ImageAction::Keep => {}
            ImageAction::Clear => self.image = None,
            ImageAction::Show { identifier } => {
                self.image = self.images.resolve(identifier);
                if self.image.is_none() {
                    warn!(identifier = %identifier, "no picture for word");
                }
            }
        }

        if let Some(word) = &resp.side_effects.announce {
            if self.sound_on {
                if let Err(e) = self.speaker.speak(word) {
                    warn!(error = %e, "speech failed");
                }
            }
        }

        if resp.side_effects.save_history {
            if let Err(e) = self.store.save(self.state.history.words()) {
                warn!(error = %e, "could not save history");
            }
        }
    }
}
