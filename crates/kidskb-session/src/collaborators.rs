//! Narrow contracts for the host services a keyboard session drives.
//!
//! Every call is fire-and-forget from the engine's point of view: failures
//! are reported back so the session can log them, never to abort a key press.

use std::path::{Path, PathBuf};

use kidskb_core::history::History;

#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("history store: {0}")]
    Store(String),
    #[error("haptics: {0}")]
    Haptics(String),
    #[error("speech: {0}")]
    Speech(String),
}

/// Durable storage for the committed-word history.
pub trait HistoryStore {
    fn load(&self) -> Result<Vec<String>, CollaboratorError>;
    fn save(&self, words: &[String]) -> Result<(), CollaboratorError>;
}

/// Resource lookup from asset identifier to something the host can render.
pub trait ImageResolver {
    type Image;
    fn resolve(&self, identifier: &str) -> Option<Self::Image>;
}

pub trait Haptics {
    fn pulse(&self, millis: u64) -> Result<(), CollaboratorError>;
}

pub trait Speaker {
    fn speak(&self, text: &str) -> Result<(), CollaboratorError>;
}

/// History kept in a KKHS file.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<String>, CollaboratorError> {
        History::open(&self.path)
            .map(|h| h.words().to_vec())
            .map_err(|e| CollaboratorError::Store(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, words: &[String]) -> Result<(), CollaboratorError> {
        History::from_words(words.iter().cloned())
            .save(&self.path)
            .map_err(|e| CollaboratorError::Store(format!("{}: {e}", self.path.display())))
    }
}

/// Keeps nothing.
pub struct NullHistoryStore;

impl HistoryStore for NullHistoryStore {
    fn load(&self) -> Result<Vec<String>, CollaboratorError> {
        Ok(Vec::new())
    }

    fn save(&self, _words: &[String]) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _millis: u64) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

pub struct Silent;

impl Speaker for Silent {
    fn speak(&self, _text: &str) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Pictures stored as `<dir>/<identifier>.png`.
pub struct DirImageResolver {
    dir: PathBuf,
}

impl DirImageResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageResolver for DirImageResolver {
    type Image = PathBuf;

    fn resolve(&self, identifier: &str) -> Option<PathBuf> {
        let path = self.dir.join(format!("{identifier}.png"));
        path.is_file().then_some(path)
    }
}

/// Hands back the identifier itself; for hosts that resolve pictures later.
pub struct IdentifierImages;

impl ImageResolver for IdentifierImages {
    type Image = String;

    fn resolve(&self, identifier: &str) -> Option<String> {
        Some(identifier.to_string())
    }
}
