use super::*;

fn h(words: &[&str]) -> History {
    History::from_words(words.iter().copied())
}

#[test]
fn test_commit_appends_and_moves_cursor() {
    let mut history = History::new();
    assert_eq!(history.cursor(), None);
    assert_eq!(history.commit("cat"), HistoryChange::Appended);
    assert_eq!(history.commit("dog"), HistoryChange::Appended);
    assert_eq!(history.words(), ["cat", "dog"]);
    assert_eq!(history.cursor(), Some(1));
}

#[test]
fn test_commit_existing_points_at_entry() {
    let mut history = h(&["cat", "dog", "fish"]);
    assert!(history.set_cursor(2));
    assert_eq!(history.commit("DOG"), HistoryChange::Existing);
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), Some(1));
    assert_eq!(history.current(), Some("dog"));
}

#[test]
fn test_from_words_dedups_ignoring_case() {
    let history = h(&["cat", "Cat", "dog", "", "CAT"]);
    assert_eq!(history.words(), ["cat", "dog"]);
    assert_eq!(history.cursor(), Some(0));
}

#[test]
fn test_back_wraps_to_last() {
    let mut history = h(&["cat", "dog", "fish"]);
    assert_eq!(history.back(), Some("fish"));
    assert_eq!(history.cursor(), Some(2));
    assert_eq!(history.back(), Some("dog"));
}

#[test]
fn test_forward_wraps_to_first() {
    let mut history = h(&["cat", "dog", "fish"]);
    history.set_cursor(2);
    assert_eq!(history.forward(), Some("cat"));
    assert_eq!(history.cursor(), Some(0));
}

#[test]
fn test_back_then_forward_returns() {
    let mut history = h(&["cat", "dog"]);
    history.set_cursor(1);
    history.back();
    assert_eq!(history.forward(), Some("dog"));
}

#[test]
fn test_navigation_on_empty() {
    let mut history = History::new();
    assert_eq!(history.back(), None);
    assert_eq!(history.forward(), None);
    assert_eq!(history.cursor(), None);
}

#[test]
fn test_single_entry_navigation() {
    let mut history = h(&["sun"]);
    assert_eq!(history.back(), Some("sun"));
    assert_eq!(history.forward(), Some("sun"));
}

#[test]
fn test_set_cursor_out_of_range() {
    let mut history = h(&["cat"]);
    assert!(!history.set_cursor(1));
    assert_eq!(history.cursor(), Some(0));
}

#[test]
fn test_serialize_roundtrip() {
    let history = h(&["cat", "ice cream", "dog"]);
    let bytes = history.to_bytes().unwrap();
    assert_eq!(&bytes[0..4], b"KKHS");
    let loaded = History::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.words(), history.words());
    assert_eq!(loaded.cursor(), Some(0));
}

#[test]
fn test_reject_bad_magic() {
    let mut bytes = h(&["cat"]).to_bytes().unwrap();
    bytes[0] = b'X';
    assert!(matches!(
        History::from_bytes(&bytes),
        Err(HistoryError::InvalidMagic)
    ));
}

#[test]
fn test_reject_unsupported_version() {
    let mut bytes = h(&["cat"]).to_bytes().unwrap();
    bytes[4] = 9;
    assert!(matches!(
        History::from_bytes(&bytes),
        Err(HistoryError::UnsupportedVersion(9))
    ));
}

#[test]
fn test_reject_corrupt_body() {
    let mut bytes = h(&["cat"]).to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    assert!(matches!(
        History::from_bytes(&bytes),
        Err(HistoryError::ChecksumMismatch)
    ));
}

#[test]
fn test_reject_short_header() {
    assert!(matches!(
        History::from_bytes(b"KKH"),
        Err(HistoryError::InvalidHeader)
    ));
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.kkhs");

    let history = h(&["cat", "dog"]);
    history.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let loaded = History::open(&path).unwrap();
    assert_eq!(loaded.words(), ["cat", "dog"]);
}

#[test]
fn test_open_nonexistent() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = History::open(&dir.path().join("missing.kkhs")).unwrap();
    assert!(loaded.is_empty());
}
