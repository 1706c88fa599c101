pub mod config_ops;
pub mod history_ops;
pub mod play_ops;
pub mod suggest_ops;
pub mod vocab_ops;

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use kidskb_core::history::{History, HistoryError};
use kidskb_core::settings::SettingsError;
use kidskb_core::vocabulary::{Vocabulary, VocabularyError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
    #[error("history: {0}")]
    History(#[from] HistoryError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Install custom settings. Must run before anything reads `settings()`.
pub fn init_settings(path: &Path) -> Result<(), CliError> {
    let content = std::fs::read_to_string(path)?;
    kidskb_core::settings::init_custom(content)?;
    debug!(path = %path.display(), "custom settings installed");
    Ok(())
}

/// The manifest at `path`, or the builtin vocabulary.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Arc<Vocabulary>, CliError> {
    let vocab = match path {
        Some(p) => Vocabulary::open(p)?,
        None => Vocabulary::builtin().clone(),
    };
    debug!(words = vocab.len(), builtin = path.is_none(), "vocabulary loaded");
    Ok(Arc::new(vocab))
}

/// The history at `path`, or an empty one.
pub fn load_history(path: Option<&Path>) -> Result<History, CliError> {
    let history = match path {
        Some(p) => History::open(p)?,
        None => History::new(),
    };
    debug!(words = history.len(), "history loaded");
    Ok(history)
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::{LevelFilter, STATIC_MAX_LEVEL};

    use super::*;

    #[test]
    fn warnings_are_compiled_in() {
        assert!(STATIC_MAX_LEVEL >= LevelFilter::WARN, "{STATIC_MAX_LEVEL}");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn trace_feature_caps_at_debug() {
        assert_eq!(STATIC_MAX_LEVEL, LevelFilter::DEBUG);
    }

    #[test]
    fn missing_paths_fall_back() {
        assert!(load_history(None).unwrap().is_empty());
        assert!(!load_vocabulary(None).unwrap().is_empty());
    }
}
