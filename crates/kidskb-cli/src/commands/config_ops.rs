use std::path::Path;

use kidskb_core::settings::{parse_settings_toml, Settings};

use super::CliError;

pub fn settings_export() {
    print!("{}", kidskb_core::settings::default_toml());
}

/// Parse and validate a settings file without installing it.
pub fn settings_validate(file: &Path) -> Result<Settings, CliError> {
    let content = std::fs::read_to_string(file)?;
    Ok(parse_settings_toml(&content)?)
}

pub fn settings_summary(s: &Settings) -> String {
    format!(
        "OK: haptics.input_pulse_ms={}, haptics.match_pulse_ms={}, suggestion.recycle_when_exhausted={}, vocabulary.identifier_prefix={:?}",
        s.haptics.input_pulse_ms,
        s.haptics.match_pulse_ms,
        s.suggestion.recycle_when_exhausted,
        s.vocabulary.identifier_prefix,
    )
}
