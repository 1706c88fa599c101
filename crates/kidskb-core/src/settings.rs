//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub haptics: HapticSettings,
    pub keyboard: KeyboardSettings,
    pub suggestion: SuggestionSettings,
    pub vocabulary: VocabularySettings,
    palette: PaletteSettings,
    /// Parsed `[palette]` colors.
    #[serde(skip)]
    colors: PaletteColors,
}

impl Settings {
    pub fn colors(&self) -> &PaletteColors {
        &self.colors
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HapticSettings {
    pub input_pulse_ms: u64,
    pub match_pulse_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyboardSettings {
    pub start_upper_case: bool,
    pub sound_on: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    pub recycle_when_exhausted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VocabularySettings {
    pub identifier_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PaletteSettings {
    next_key: String,
    other_key_light: String,
    other_key_dark: String,
    ghost_light: String,
    ghost_dark: String,
}

/// ARGB colors, one per palette slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteColors {
    pub next_key: u32,
    pub other_key_light: u32,
    pub other_key_dark: u32,
    pub ghost_light: u32,
    pub ghost_dark: u32,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.colors = parse_palette(&s.palette)?;
    Ok(s)
}

/// Parse `#AARRGGBB` (or `#RRGGBB`, treated as opaque) into an ARGB value.
pub fn parse_argb(value: &str) -> Option<u32> {
    let hex = value.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        8 => u32::from_str_radix(hex, 16).ok(),
        6 => u32::from_str_radix(hex, 16).ok().map(|rgb| 0xFF00_0000 | rgb),
        _ => None,
    }
}

fn parse_palette(p: &PaletteSettings) -> Result<PaletteColors, SettingsError> {
    let color = |field: &str, value: &str| {
        parse_argb(value).ok_or_else(|| SettingsError::InvalidValue {
            field: format!("palette.{field}"),
            reason: format!("expected #AARRGGBB or #RRGGBB, got {value:?}"),
        })
    };
    Ok(PaletteColors {
        next_key: color("next_key", &p.next_key)?,
        other_key_light: color("other_key_light", &p.other_key_light)?,
        other_key_dark: color("other_key_dark", &p.other_key_dark)?,
        ghost_light: color("ghost_light", &p.ghost_light)?,
        ghost_dark: color("ghost_dark", &p.ghost_dark)?,
    })
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(haptics.input_pulse_ms);
    check_positive!(haptics.match_pulse_ms);

    let prefix = &s.vocabulary.identifier_prefix;
    if !prefix.bytes().all(|b| b.is_ascii_lowercase() || b == b'_') {
        return Err(SettingsError::InvalidValue {
            field: "vocabulary.identifier_prefix".to_string(),
            reason: "only lowercase ASCII letters and '_' are allowed".to_string(),
        });
    }

    Ok(())
}
