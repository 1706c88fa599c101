use kidskb_session::layout::{key_labels, Palette, Theme};
use kidskb_session::{ImageAction, KeyEvent, KeyResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KkError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct KkKeyColor {
    /// `a`..`z`, `space`, `clear` or `delete`.
    pub key: String,
    pub argb: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct KkKeyLabel {
    pub key: String,
    pub label: String,
}

/// Event-driven response from handle_key / handle_event.
#[derive(Debug, uniffi::Record)]
pub struct KkKeyResponse {
    pub consumed: bool,
    pub events: Vec<KkEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KkKey {
    Letter { letter: String },
    Space,
    Shift,
    Clear,
    Delete,
    HistoryBack,
    HistoryForward,
}

impl KkKey {
    /// `None` for a `Letter` that is not exactly one character.
    pub(super) fn to_key_event(&self) -> Option<KeyEvent> {
        let key = match self {
            KkKey::Letter { letter } => {
                let mut chars = letter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyEvent::Letter(c),
                    _ => return None,
                }
            }
            KkKey::Space => KeyEvent::Space,
            KkKey::Shift => KeyEvent::Shift,
            KkKey::Clear => KeyEvent::Clear,
            KkKey::Delete => KeyEvent::Delete,
            KkKey::HistoryBack => KeyEvent::HistoryBack,
            KkKey::HistoryForward => KeyEvent::HistoryForward,
        };
        Some(key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KkEvent {
    SetText {
        typed: String,
        ghost: String,
        ghost_argb: u32,
    },
    ShowImage {
        identifier: String,
    },
    ClearImage,
    SetKeyColors {
        colors: Vec<KkKeyColor>,
    },
    SetKeyLabels {
        labels: Vec<KkKeyLabel>,
    },
    Vibrate {
        millis: u64,
    },
    Speak {
        text: String,
    },
    SaveHistory,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn labels_for(upper: bool) -> Vec<KkKeyLabel> {
    key_labels(upper)
        .into_iter()
        .map(|(key, label)| KkKeyLabel {
            key: key.name(),
            label: label.to_string(),
        })
        .collect()
}

pub(super) fn convert_to_events(
    resp: KeyResponse,
    palette: &Palette,
    theme: Theme,
    sound_on: bool,
) -> KkKeyResponse {
    let mut events = Vec::new();

    // 1. Text
    if let Some(d) = resp.display {
        events.push(KkEvent::SetText {
            typed: d.typed,
            ghost: d.ghost,
            ghost_argb: palette.ghost(theme),
        });
    }

    // 2. Picture
    match resp.image {
        ImageAction::Show { identifier } => events.push(KkEvent::ShowImage { identifier }),
        ImageAction::Clear => events.push(KkEvent::ClearImage),
        ImageAction::Keep => {}
    }

    // 3. Key colors
    if let Some(highlight) = resp.highlight {
        let colors = palette
            .key_colors(highlight, theme)
            .into_iter()
            .map(|(key, argb)| KkKeyColor {
                key: key.name(),
                argb,
            })
            .collect();
        events.push(KkEvent::SetKeyColors { colors });
    }

    // 4. Key labels
    if let Some(upper) = resp.relabel {
        events.push(KkEvent::SetKeyLabels {
            labels: labels_for(upper),
        });
    }

    // 5. Side effects
    for millis in resp.side_effects.haptic_pulses {
        events.push(KkEvent::Vibrate { millis });
    }
    if let (Some(text), true) = (resp.side_effects.announce, sound_on) {
        events.push(KkEvent::Speak { text });
    }
    if resp.side_effects.save_history {
        events.push(KkEvent::SaveHistory);
    }

    KkKeyResponse {
        consumed: resp.consumed,
        events,
    }
}
