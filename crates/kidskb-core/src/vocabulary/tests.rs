use super::*;

fn vocab(ids: &[&str]) -> Vocabulary {
    Vocabulary::from_identifiers(ids.iter().copied(), "a_").unwrap()
}

fn words(entries: &[&VocabEntry]) -> Vec<String> {
    entries.iter().map(|e| e.word.clone()).collect()
}

#[test]
fn test_builtin_parses() {
    let v = Vocabulary::builtin();
    assert!(v.len() > 50);
    let e = v.lookup_exact("ice cream").unwrap();
    assert_eq!(e.identifier, "a_ice_cream");
}

#[test]
fn test_lookup_exact_ignores_case() {
    let v = vocab(&["a_cat", "a_teddy_bear"]);
    assert_eq!(v.lookup_exact("CAT").unwrap().identifier, "a_cat");
    assert_eq!(v.lookup_exact("Teddy Bear").unwrap().word, "teddy bear");
    assert!(v.lookup_exact("ca").is_none());
    assert!(v.lookup_exact("").is_none());
}

#[test]
fn test_prefix_matches_shortest_first() {
    let v = vocab(&["a_card", "a_cat", "a_car", "a_dog"]);
    assert_eq!(words(&v.prefix_matches("c")), ["car", "cat", "card"]);
    assert_eq!(words(&v.prefix_matches("CA")), ["car", "cat", "card"]);
    assert_eq!(words(&v.prefix_matches("car")), ["car", "card"]);
    assert!(v.prefix_matches("x").is_empty());
}

#[test]
fn test_prefix_matches_empty_prefix() {
    let v = vocab(&["a_cat"]);
    assert!(v.prefix_matches("").is_empty());
}

#[test]
fn test_prefix_matches_across_space() {
    let v = vocab(&["a_ice_cream", "a_ice", "a_icicle"]);
    assert_eq!(words(&v.prefix_matches("ice ")), ["ice cream"]);
    assert_eq!(words(&v.prefix_matches("ic")), ["ice", "icicle", "ice cream"]);
}

#[test]
fn test_non_prefixed_identifiers_skipped() {
    let v = vocab(&["a_cat", "soundon", "ic_launcher"]);
    assert_eq!(v.len(), 1);
    assert!(v.contains("cat"));
}

#[test]
fn test_duplicate_words_keep_first() {
    let v = vocab(&["a_cat", "a_CAT"]);
    assert_eq!(v.len(), 1);
    assert_eq!(v.lookup_exact("cat").unwrap().identifier, "a_cat");
}

#[test]
fn test_invalid_identifier_reports_line() {
    let text = "# header\na_cat\n\na_c4t\n";
    let err = Vocabulary::parse(text, "a_").unwrap_err();
    match err {
        VocabularyError::InvalidIdentifier { line, identifier } => {
            assert_eq!(line, 4);
            assert_eq!(identifier, "a_c4t");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_stem_rejected() {
    assert!(Vocabulary::parse("a_\n", "a_").is_err());
    assert!(Vocabulary::parse("a___\n", "a_").is_err());
}

#[test]
fn test_manifest_whitespace_in_identifier() {
    let err = parse_manifest("a_cat\na_ice cream\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_open_manifest_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.txt");
    std::fs::write(&path, "a_sun\na_moon\n").unwrap();
    let v = Vocabulary::open(&path).unwrap();
    assert_eq!(v.len(), 2);
    assert_eq!(
        v.iter().map(|e| e.word.as_str()).collect::<Vec<_>>(),
        ["moon", "sun"]
    );
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Vocabulary::open(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, VocabularyError::Io(_)));
}
