use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use kidskb_core::history::History;
use kidskb_session::collaborators::{FileHistoryStore, IdentifierImages};
use kidskb_session::layout::{Palette, Theme};
use kidskb_session::{KeyEvent, KeyResponse, KeyboardSession, SuggestionEngine};

use super::resources::KkVocabulary;
use super::types::{convert_to_events, labels_for, KkKey, KkKeyLabel};
use super::{KkError, KkKeyResponse};

/// One keyboard. Pictures, vibration and speech are left to the host and
/// reported as events; history is loaded from and saved to `history_path`.
#[derive(uniffi::Object)]
pub struct KkSession {
    session: Mutex<KeyboardSession<IdentifierImages>>,
    palette: Palette,
    dark: AtomicBool,
}

#[uniffi::export]
impl KkSession {
    #[uniffi::constructor]
    pub(super) fn new(vocabulary: Arc<KkVocabulary>, history_path: Option<String>) -> Arc<Self> {
        let engine = SuggestionEngine::new(Arc::clone(&vocabulary.inner));
        let session = KeyboardSession::new(engine, IdentifierImages);
        let session = match history_path {
            Some(path) => session.with_history_store(FileHistoryStore::new(path)),
            None => session,
        };
        debug!(
            words = vocabulary.inner.len(),
            history = session.state().history.len(),
            "keyboard session created"
        );
        Arc::new(Self {
            session: Mutex::new(session),
            palette: Palette::default(),
            dark: AtomicBool::new(false),
        })
    }

    /// Handle a key by its label (`"a"`, `"SHIFT"`, `"◀"`...).
    fn handle_key(&self, label: String) -> KkKeyResponse {
        let mut session = self.lock();
        let resp = session.handle_label(&label);
        self.convert(resp, session.sound_on())
    }

    fn handle_event(&self, key: KkKey) -> KkKeyResponse {
        let Some(event) = key.to_key_event() else {
            return self.convert(KeyResponse::not_consumed(), false);
        };
        self.handle(event)
    }

    fn set_dark_theme(&self, dark: bool) {
        self.dark.store(dark, Ordering::Relaxed);
    }

    fn set_sound(&self, on: bool) {
        let mut session = self.lock();
        if session.sound_on() != on {
            session.toggle_sound();
        }
    }

    fn sound_on(&self) -> bool {
        self.lock().sound_on()
    }

    fn is_upper_case(&self) -> bool {
        self.lock().state().is_upper_case
    }

    /// Current letter key labels, for the initial layout.
    fn key_labels(&self) -> Vec<KkKeyLabel> {
        labels_for(self.is_upper_case())
    }

    fn history(&self) -> Vec<String> {
        self.lock().state().history.words().to_vec()
    }

    fn save_history(&self, path: String) -> Result<(), KkError> {
        let words = self.history();
        History::from_words(words)
            .save(Path::new(&path))
            .map_err(|e| KkError::Io {
                msg: format!("{path}: {e}"),
            })
    }
}

impl KkSession {
    fn lock(&self) -> MutexGuard<'_, KeyboardSession<IdentifierImages>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn theme(&self) -> Theme {
        if self.dark.load(Ordering::Relaxed) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn handle(&self, key: KeyEvent) -> KkKeyResponse {
        let mut session = self.lock();
        let resp = session.handle_key(key);
        self.convert(resp, session.sound_on())
    }

    fn convert(&self, resp: KeyResponse, sound_on: bool) -> KkKeyResponse {
        convert_to_events(resp, &self.palette, self.theme(), sound_on)
    }
}
