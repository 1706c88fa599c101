//! History of committed words, browsable with back/forward keys.
//!
//! Insertion order is preserved and words are unique ignoring case. The
//! cursor always points at a valid entry while the history is non-empty.

mod persistence;
#[cfg(test)]
mod tests;

use std::io;

use serde::{Deserialize, Serialize};

use crate::text::eq_ignore_case;

const MAGIC: &[u8; 4] = b"KKHS";
const VERSION: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected KKHS)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// Flat serialization format for bincode.
#[derive(Serialize, Deserialize)]
struct HistoryData {
    words: Vec<String>,
}

/// Outcome of [`History::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    /// The word was new and is now the last entry.
    Appended,
    /// The word was already present; the cursor moved to it.
    Existing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    words: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored words, dropping case-insensitive duplicates.
    /// The cursor starts at the first entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut h = Self::new();
        for w in words {
            let w = w.into();
            if !w.is_empty() && !h.contains(&w) {
                h.words.push(w);
            }
        }
        h
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Cursor position; `None` while empty.
    pub fn cursor(&self) -> Option<usize> {
        (!self.words.is_empty()).then_some(self.cursor)
    }

    pub fn current(&self) -> Option<&str> {
        self.words.get(self.cursor).map(String::as_str)
    }

    /// Move the cursor; returns false (and leaves it) when out of range.
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index < self.words.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| eq_ignore_case(w, word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Record a committed word and point the cursor at it.
    pub fn commit(&mut self, word: &str) -> HistoryChange {
        match self.position(word) {
            Some(idx) => {
                self.cursor = idx;
                HistoryChange::Existing
            }
            None => {
                self.words.push(word.to_string());
                self.cursor = self.words.len() - 1;
                HistoryChange::Appended
            }
        }
    }

    /// Step back, wrapping to the last entry.
    pub fn back(&mut self) -> Option<&str> {
        self.step(-1)
    }

    /// Step forward, wrapping to the first entry.
    pub fn forward(&mut self) -> Option<&str> {
        self.step(1)
    }

    fn step(&mut self, delta: i32) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        self.cursor = cyclic_index(self.cursor, delta, self.words.len());
        self.current()
    }
}

fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current.min(count - 1) as i64;
    let n = count as i64;
    ((c + delta as i64).rem_euclid(n)) as usize
}
