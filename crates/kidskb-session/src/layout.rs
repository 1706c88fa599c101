//! Keyboard layout: which keys exist, their labels and their colors.
//!
//! One keyed mapping replaces per-key view updates; hosts iterate the
//! returned lists and apply each entry to the matching key view.

use kidskb_core::settings::{settings, PaletteColors};

use super::types::Highlight;

/// A key that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    Letter(char),
    Space,
    Clear,
    Delete,
}

impl KeyId {
    /// All highlightable keys in layout order: `a`..`z`, space, clear, delete.
    pub fn all() -> impl Iterator<Item = KeyId> {
        ('a'..='z')
            .map(KeyId::Letter)
            .chain([KeyId::Space, KeyId::Clear, KeyId::Delete])
    }

    /// Stable name used across the FFI boundary.
    pub fn name(&self) -> String {
        match self {
            KeyId::Letter(c) => c.to_string(),
            KeyId::Space => "space".to_string(),
            KeyId::Clear => "clear".to_string(),
            KeyId::Delete => "delete".to_string(),
        }
    }
}

impl Highlight {
    /// The key this highlight lights up.
    pub fn key(&self) -> Option<KeyId> {
        match *self {
            Highlight::Idle => None,
            Highlight::Typing => Some(KeyId::Delete),
            Highlight::Matched => Some(KeyId::Clear),
            Highlight::Next(' ') => Some(KeyId::Space),
            Highlight::Next(c) if c.is_ascii_alphabetic() => {
                Some(KeyId::Letter(c.to_ascii_lowercase()))
            }
            Highlight::Next(_) => None,
        }
    }
}

/// Label for each letter key in the given case.
pub fn key_labels(upper: bool) -> Vec<(KeyId, char)> {
    ('a'..='z')
        .map(|c| {
            let label = if upper { c.to_ascii_uppercase() } else { c };
            (KeyId::Letter(c), label)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Theme-aware ARGB colors for keys and ghost text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: PaletteColors,
}

impl Palette {
    pub fn new(colors: PaletteColors) -> Self {
        Self { colors }
    }

    pub fn ghost(&self, theme: Theme) -> u32 {
        match theme {
            Theme::Light => self.colors.ghost_light,
            Theme::Dark => self.colors.ghost_dark,
        }
    }

    fn other_key(&self, theme: Theme) -> u32 {
        match theme {
            Theme::Light => self.colors.other_key_light,
            Theme::Dark => self.colors.other_key_dark,
        }
    }

    /// Background color for every key: the highlighted key gets `next_key`.
    pub fn key_colors(&self, highlight: Highlight, theme: Theme) -> Vec<(KeyId, u32)> {
        let lit = highlight.key();
        let other = self.other_key(theme);
        KeyId::all()
            .map(|key| {
                let color = if Some(key) == lit {
                    self.colors.next_key
                } else {
                    other
                };
                (key, color)
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(*settings().colors())
    }
}
