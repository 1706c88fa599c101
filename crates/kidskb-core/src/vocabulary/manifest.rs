use super::VocabularyError;

/// Parse manifest text into `(line_number, identifier)` pairs.
///
/// - one identifier per line, surrounding whitespace trimmed
/// - blank lines and `#` comments are ignored
/// - an identifier containing whitespace is rejected
pub fn parse_manifest(text: &str) -> Result<Vec<(usize, String)>, VocabularyError> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.chars().any(char::is_whitespace) {
            return Err(VocabularyError::InvalidIdentifier {
                line: idx + 1,
                identifier: line.to_string(),
            });
        }
        out.push((idx + 1, line.to_string()));
    }
    Ok(out)
}
