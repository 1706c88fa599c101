use std::path::Path;
use std::sync::Arc;

use kidskb_core::vocabulary::{Vocabulary, VocabularyError};

use super::KkError;

pub(super) fn vocabulary_error(e: VocabularyError) -> KkError {
    match e {
        VocabularyError::Io(e) => KkError::Io { msg: e.to_string() },
        other => KkError::InvalidData {
            msg: other.to_string(),
        },
    }
}

#[derive(uniffi::Object)]
pub struct KkVocabulary {
    pub(crate) inner: Arc<Vocabulary>,
}

#[uniffi::export]
impl KkVocabulary {
    /// The words shipped with the keyboard.
    #[uniffi::constructor]
    pub(crate) fn builtin() -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(Vocabulary::builtin().clone()),
        })
    }

    #[uniffi::constructor]
    pub(crate) fn open(path: String) -> Result<Arc<Self>, KkError> {
        let vocab = Vocabulary::open(Path::new(&path)).map_err(vocabulary_error)?;
        Ok(Arc::new(Self {
            inner: Arc::new(vocab),
        }))
    }

    /// Build from the host's asset identifier list, one per line.
    #[uniffi::constructor]
    pub(crate) fn from_manifest(text: String) -> Result<Arc<Self>, KkError> {
        let vocab = Vocabulary::from_manifest(&text).map_err(vocabulary_error)?;
        Ok(Arc::new(Self {
            inner: Arc::new(vocab),
        }))
    }

    pub(crate) fn words(&self) -> Vec<String> {
        self.inner.iter().map(|e| e.word.clone()).collect()
    }

    /// Asset identifier for `word`, ignoring case.
    pub(crate) fn lookup(&self, word: String) -> Option<String> {
        self.inner.lookup_exact(&word).map(|e| e.identifier.clone())
    }

    pub(crate) fn prefix_matches(&self, prefix: String) -> Vec<String> {
        self.inner
            .prefix_matches(&prefix)
            .into_iter()
            .map(|e| e.word.clone())
            .collect()
    }
}
