mod state;
pub use state::*;

/// Logical key press. Hosts translate their key views into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Letter(char),
    Space,
    Shift,
    Clear,
    Delete,
    HistoryBack,
    HistoryForward,
}

impl KeyEvent {
    /// Parse the label of a keyboard key. Empty or unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "" => None,
            " " | "SPACE" => Some(Self::Space),
            "SHIFT" => Some(Self::Shift),
            "CLEAR" => Some(Self::Clear),
            "DELETE" => Some(Self::Delete),
            "BACK" | "◀" => Some(Self::HistoryBack),
            "NEXT" | "▶" => Some(Self::HistoryForward),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}

/// Which key the host should light up next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Nothing typed: no key lit.
    Idle,
    /// Text typed without a usable suggestion: the DELETE key is lit.
    Typing,
    /// Text matches a vocabulary word: the CLEAR key is lit.
    Matched,
    /// Next letter (or space) of the ghosted suggestion.
    Next(char),
}

/// Typed text followed by de-emphasized ghost text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayText {
    pub typed: String,
    pub ghost: String,
}

impl DisplayText {
    pub fn plain(text: String) -> Self {
        Self {
            typed: text,
            ghost: String::new(),
        }
    }

    pub fn has_ghost(&self) -> bool {
        !self.ghost.is_empty()
    }

    /// Typed and ghost text joined, as rendered.
    pub fn full(&self) -> String {
        format!("{}{}", self.typed, self.ghost)
    }
}

/// Picture action — exactly one of three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageAction {
    /// Leave the current picture as-is.
    Keep,
    /// Show the picture for this asset identifier.
    Show { identifier: String },
    /// Remove the picture.
    Clear,
}

/// Orthogonal side-effects that accompany a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideEffects {
    /// Haptic pulses to fire, in order, in milliseconds.
    pub haptic_pulses: Vec<u64>,
    /// Committed word to read aloud (subject to the host's sound flag).
    pub announce: Option<String>,
    /// History gained an entry and should be persisted.
    pub save_history: bool,
}

/// Response from `handle_key`, returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    /// `None` leaves the text view unchanged.
    pub display: Option<DisplayText>,
    /// `None` leaves the key highlight unchanged.
    pub highlight: Option<Highlight>,
    pub image: ImageAction,
    /// `Some(upper)` when letter key labels must be re-rendered.
    pub relabel: Option<bool>,
    pub side_effects: SideEffects,
}

impl KeyResponse {
    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            display: None,
            highlight: None,
            image: ImageAction::Keep,
            relabel: None,
            side_effects: SideEffects::default(),
        }
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    /// Identifier of the picture to show, if any.
    pub fn image_identifier(&self) -> Option<&str> {
        match &self.image {
            ImageAction::Show { identifier } => Some(identifier),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.highlight == Some(Highlight::Matched)
    }
}
