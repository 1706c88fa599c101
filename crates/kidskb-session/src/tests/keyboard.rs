use std::sync::{Arc, Mutex};

use crate::collaborators::{
    CollaboratorError, DirImageResolver, FileHistoryStore, Haptics, HistoryStore,
    IdentifierImages, Speaker,
};
use crate::KeyboardSession;

use super::*;

#[derive(Clone, Default)]
struct Recorder {
    pulses: Arc<Mutex<Vec<u64>>>,
    spoken: Arc<Mutex<Vec<String>>>,
    saved: Arc<Mutex<Vec<Vec<String>>>>,
}

impl Haptics for Recorder {
    fn pulse(&self, millis: u64) -> Result<(), CollaboratorError> {
        self.pulses.lock().unwrap().push(millis);
        Ok(())
    }
}

impl Speaker for Recorder {
    fn speak(&self, text: &str) -> Result<(), CollaboratorError> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

impl HistoryStore for Recorder {
    fn load(&self) -> Result<Vec<String>, CollaboratorError> {
        Ok(vec!["dog".into()])
    }

    fn save(&self, words: &[String]) -> Result<(), CollaboratorError> {
        self.saved.lock().unwrap().push(words.to_vec());
        Ok(())
    }
}

/// Every call fails.
struct Broken;

impl Haptics for Broken {
    fn pulse(&self, _millis: u64) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Haptics("no vibrator".into()))
    }
}

impl Speaker for Broken {
    fn speak(&self, _text: &str) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Speech("no engine".into()))
    }
}

impl HistoryStore for Broken {
    fn load(&self) -> Result<Vec<String>, CollaboratorError> {
        Err(CollaboratorError::Store("unavailable".into()))
    }

    fn save(&self, _words: &[String]) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Store("unavailable".into()))
    }
}

fn recorded_session(rec: &Recorder) -> KeyboardSession<IdentifierImages> {
    KeyboardSession::open(make_engine(make_test_vocab()), IdentifierImages, rec.clone())
        .with_haptics(rec.clone())
        .with_speaker(rec.clone())
        .with_sound(true)
}

fn type_labels<R: crate::collaborators::ImageResolver>(
    session: &mut KeyboardSession<R>,
    s: &str,
) -> Vec<KeyResponse> {
    s.chars()
        .map(|c| session.handle_label(&c.to_string()))
        .collect()
}

#[test]
fn test_open_loads_history() {
    let rec = Recorder::default();
    let session = recorded_session(&rec);
    assert_eq!(session.state().history.words(), ["dog"]);
}

#[test]
fn test_match_fires_collaborators() {
    let rec = Recorder::default();
    let mut session = recorded_session(&rec);

    type_labels(&mut session, "car");
    assert_eq!(*rec.pulses.lock().unwrap(), [10, 10, 10, 100]);
    assert_eq!(*rec.spoken.lock().unwrap(), ["car"]);
    assert_eq!(
        *rec.saved.lock().unwrap(),
        [vec!["dog".to_string(), "car".to_string()]]
    );
    assert_eq!(session.image().map(String::as_str), Some("a_car"));

    session.handle_label("CLEAR");
    assert_eq!(session.image(), None);
}

#[test]
fn test_existing_word_not_saved() {
    let rec = Recorder::default();
    let mut session = recorded_session(&rec);

    type_labels(&mut session, "dog");
    assert_eq!(*rec.spoken.lock().unwrap(), ["dog"]);
    assert!(rec.saved.lock().unwrap().is_empty());
}

#[test]
fn test_sound_toggle_gates_speech() {
    let rec = Recorder::default();
    let mut session = recorded_session(&rec);

    let before = session.state().clone();
    assert!(!session.toggle_sound());
    assert_eq!(session.state(), &before);

    type_labels(&mut session, "cat");
    assert!(rec.spoken.lock().unwrap().is_empty());
    // the pulses still fire
    assert_eq!(rec.pulses.lock().unwrap().last(), Some(&100));

    assert!(session.toggle_sound());
    session.handle_label("CLEAR");
    type_labels(&mut session, "cat");
    assert_eq!(*rec.spoken.lock().unwrap(), ["cat"]);
}

#[test]
fn test_unknown_labels_ignored() {
    let rec = Recorder::default();
    let mut session = recorded_session(&rec);
    let before = session.state().clone();

    assert!(!session.handle_label("").consumed);
    assert!(!session.handle_label("ENTER").consumed);
    assert!(!session.handle_label("5").consumed);
    assert_eq!(session.state(), &before);
    assert!(rec.pulses.lock().unwrap().is_empty());
}

#[test]
fn test_broken_collaborators_absorbed() {
    let engine = make_engine(make_test_vocab());
    let mut session = KeyboardSession::open(engine, IdentifierImages, Broken)
        .with_haptics(Broken)
        .with_speaker(Broken)
        .with_sound(true);
    assert!(session.state().history.is_empty());

    let responses = type_labels(&mut session, "fish");
    assert!(responses.last().unwrap().is_match());
    assert_eq!(session.state().history.words(), ["fish"]);

    // still usable on the next key
    let resp = session.handle_label("CLEAR");
    assert!(resp.consumed);
    assert_eq!(session.state().text_input, "");
}

#[test]
fn test_missing_picture_leaves_no_image() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a_dog.png"), b"png").unwrap();
    let mut session = KeyboardSession::new(
        make_engine(make_test_vocab()),
        DirImageResolver::new(dir.path()),
    );

    let responses = type_labels(&mut session, "cat");
    assert_eq!(responses.last().unwrap().image_identifier(), Some("a_cat"));
    assert_eq!(session.image(), None);

    session.handle_label("CLEAR");
    type_labels(&mut session, "dog");
    assert_eq!(session.image(), Some(&dir.path().join("a_dog.png")));
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.kkhs");

    {
        let mut session = KeyboardSession::open(
            make_engine(make_test_vocab()),
            IdentifierImages,
            FileHistoryStore::new(&path),
        );
        assert!(session.state().history.is_empty());
        type_labels(&mut session, "igloo");
        session.handle_label("CLEAR");
        type_labels(&mut session, "cat");
    }

    let session = KeyboardSession::open(
        make_engine(make_test_vocab()),
        IdentifierImages,
        FileHistoryStore::new(&path),
    );
    assert_eq!(session.state().history.words(), ["igloo", "cat"]);
    assert_eq!(session.state().history.cursor(), Some(0));
}
