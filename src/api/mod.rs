//! UniFFI export layer: type-safe host bindings for the kids keyboard.
//!
//! Each public type here maps to a generated Kotlin/Swift class, record or enum.

mod resources;
mod session;
mod types;

pub use resources::KkVocabulary;
pub use session::KkSession;
pub use types::{KkError, KkEvent, KkKey, KkKeyColor, KkKeyLabel, KkKeyResponse};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), KkError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KkError::Io {
        msg: format!("{path}: {e}"),
    })?;
    kidskb_core::settings::init_custom(content)
        .map_err(|e| KkError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    kidskb_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn vocabulary_default_manifest() -> String {
    kidskb_core::vocabulary::DEFAULT_MANIFEST.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_resources_exported() {
        assert!(settings_default_config().contains("[haptics]"));
        assert!(vocabulary_default_manifest().contains("a_ice_cream"));
        assert!(!engine_version().is_empty());
    }

    #[test]
    fn missing_settings_file_is_io_error() {
        let err = settings_load_config("/nonexistent/kidskb.toml".into()).unwrap_err();
        assert!(matches!(err, KkError::Io { .. }));
    }

    #[test]
    fn vocabulary_queries() {
        let vocab = KkVocabulary::builtin();
        assert_eq!(vocab.lookup("Teddy Bear".into()).as_deref(), Some("a_teddy_bear"));
        assert_eq!(vocab.lookup("tedd".into()), None);
        assert!(vocab.words().contains(&"fire truck".to_string()));
        assert_eq!(vocab.prefix_matches("fire t".into()), ["fire truck"]);
    }

    #[test]
    fn bad_manifest_is_invalid_data() {
        let Err(err) = KkVocabulary::from_manifest("a_cat\na_Bad-Name\n".into()) else {
            panic!("manifest should be rejected");
        };
        assert!(matches!(err, KkError::InvalidData { .. }));

        let Err(err) = KkVocabulary::open("/nonexistent/vocab.txt".into()) else {
            panic!("missing file should be rejected");
        };
        assert!(matches!(err, KkError::Io { .. }));
    }
}
