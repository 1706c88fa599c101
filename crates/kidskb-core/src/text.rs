//! Case-insensitive helpers for keyboard words.
//!
//! Words are ASCII letters and spaces, so comparisons fold ASCII case only.

/// Identity form of a word.
pub fn word_key(word: &str) -> String {
    word.to_ascii_lowercase()
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// `haystack` starts with `prefix`, ignoring ASCII case.
pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack.len() >= prefix.len()
        && haystack.is_char_boundary(prefix.len())
        && haystack[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Render `word` in the keyboard's current letter case.
pub fn recase(word: &str, upper: bool) -> String {
    if upper {
        word.to_ascii_uppercase()
    } else {
        word.to_ascii_lowercase()
    }
}

/// Turn an asset identifier's word part (`ice_cream`) into a display word (`ice cream`).
pub fn identifier_to_word(stem: &str) -> String {
    stem.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_ignores_case() {
        assert!(starts_with_ignore_case("CAT", "ca"));
        assert!(starts_with_ignore_case("cat", ""));
        assert!(!starts_with_ignore_case("ca", "cat"));
        assert!(!starts_with_ignore_case("dog", "c"));
    }

    #[test]
    fn recase_whole_word() {
        assert_eq!(recase("Ice Cream", true), "ICE CREAM");
        assert_eq!(recase("Ice Cream", false), "ice cream");
    }

    #[test]
    fn identifier_word_mapping() {
        assert_eq!(identifier_to_word("ice_cream"), "ice cream");
        assert_eq!(identifier_to_word("teddy_bear"), "teddy bear");
    }
}
