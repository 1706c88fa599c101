//! Vocabulary index: the fixed set of illustrated words the keyboard accepts.
//!
//! Words are keyed by their lowercase display form; each keeps the asset
//! identifier used for image lookup. Built once from a manifest and never
//! mutated afterwards.

mod manifest;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::settings::settings;
use crate::text::{identifier_to_word, word_key};

pub use manifest::parse_manifest;

/// Embedded default manifest.
pub const DEFAULT_MANIFEST: &str = include_str!("default_vocabulary.txt");

/// Identifier prefix used by [`DEFAULT_MANIFEST`].
pub const DEFAULT_PREFIX: &str = "a_";

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid identifier {identifier:?}")]
    InvalidIdentifier { line: usize, identifier: String },
}

/// One illustrated word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    /// Asset identifier, e.g. `a_ice_cream`.
    pub identifier: String,
    /// Display word, e.g. `ice cream`.
    pub word: String,
}

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// word_key(word) → entry
    entries: BTreeMap<String, VocabEntry>,
}

impl Vocabulary {
    /// Process-wide vocabulary parsed from [`DEFAULT_MANIFEST`].
    pub fn builtin() -> &'static Vocabulary {
        static INSTANCE: OnceLock<Vocabulary> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Self::parse(DEFAULT_MANIFEST, DEFAULT_PREFIX)
                .expect("embedded vocabulary manifest must be valid")
        })
    }

    /// Load a manifest file using the configured identifier prefix.
    pub fn open(path: &Path) -> Result<Self, VocabularyError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_manifest(&text)
    }

    /// Parse manifest text using the configured identifier prefix.
    pub fn from_manifest(text: &str) -> Result<Self, VocabularyError> {
        Self::parse(text, &settings().vocabulary.identifier_prefix)
    }

    pub fn parse(text: &str, prefix: &str) -> Result<Self, VocabularyError> {
        let identifiers = parse_manifest(text)?;
        Self::from_numbered(identifiers, prefix)
    }

    /// Build from a list of asset identifiers. Identifiers without `prefix`
    /// are not illustrations and are skipped.
    pub fn from_identifiers<I, S>(identifiers: I, prefix: &str) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let numbered = identifiers
            .into_iter()
            .enumerate()
            .map(|(idx, id)| (idx + 1, id.as_ref().trim().to_string()));
        Self::from_numbered(numbered, prefix)
    }

    fn from_numbered<I>(identifiers: I, prefix: &str) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        let mut entries = BTreeMap::new();
        for (line, identifier) in identifiers {
            let Some(stem) = identifier.strip_prefix(prefix) else {
                debug!(line, identifier = %identifier, "skipping non-illustration identifier");
                continue;
            };
            if !is_valid_stem(stem) {
                return Err(VocabularyError::InvalidIdentifier { line, identifier });
            }
            let word = identifier_to_word(&stem.to_ascii_lowercase());
            entries
                .entry(word_key(&word))
                .or_insert(VocabEntry { identifier, word });
        }
        debug!(words = entries.len(), "vocabulary built");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in word order.
    pub fn iter(&self) -> impl Iterator<Item = &VocabEntry> {
        self.entries.values()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup_exact(word).is_some()
    }

    /// Case-insensitive exact match.
    pub fn lookup_exact(&self, word: &str) -> Option<&VocabEntry> {
        if word.is_empty() {
            return None;
        }
        self.entries.get(&word_key(word))
    }

    /// All entries whose word starts with `prefix` (case-insensitive),
    /// shortest identifier first, ties by identifier. An empty prefix
    /// matches nothing.
    pub fn prefix_matches(&self, prefix: &str) -> Vec<&VocabEntry> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let key = word_key(prefix);
        let mut out: Vec<&VocabEntry> = self
            .entries
            .range(key.clone()..)
            .take_while(|(k, _)| k.starts_with(&key))
            .map(|(_, e)| e)
            .collect();
        out.sort_by(|a, b| {
            a.identifier
                .len()
                .cmp(&b.identifier.len())
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
        out
    }
}

fn is_valid_stem(stem: &str) -> bool {
    !stem.is_empty()
        && stem.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_')
        && stem.bytes().any(|b| b.is_ascii_alphabetic())
}
