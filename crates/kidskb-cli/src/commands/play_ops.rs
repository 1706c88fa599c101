use std::io::{self, BufRead, Write};
use std::path::Path;

use kidskb_session::collaborators::{FileHistoryStore, IdentifierImages, ImageResolver};
use kidskb_session::{KeyEvent, KeyResponse, KeyboardSession, SuggestionEngine};

use super::{load_vocabulary, CliError};

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// What a character typed into `play` stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKey {
    Key(KeyEvent),
    ToggleSound,
}

pub fn play_key(c: char) -> Option<PlayKey> {
    let key = match c {
        '<' => KeyEvent::HistoryBack,
        '>' => KeyEvent::HistoryForward,
        '#' => KeyEvent::Delete,
        '!' => KeyEvent::Clear,
        '^' => KeyEvent::Shift,
        ' ' => KeyEvent::Space,
        '~' => return Some(PlayKey::ToggleSound),
        c if c.is_ascii_alphabetic() => KeyEvent::Letter(c),
        _ => return None,
    };
    Some(PlayKey::Key(key))
}

/// One status line for a key response.
pub fn render_response(resp: &KeyResponse, sound_on: bool, ansi: bool) -> String {
    let mut parts = Vec::new();

    match &resp.display {
        Some(d) if ansi && d.has_ghost() => {
            parts.push(format!("{}{DIM}{}{RESET}", d.typed, d.ghost));
        }
        Some(d) if d.has_ghost() => parts.push(format!("{}[{}]", d.typed, d.ghost)),
        Some(d) => parts.push(format!("{:?}", d.typed)),
        None => {}
    }
    if let Some(upper) = resp.relabel {
        parts.push(format!("labels={}", if upper { "UPPER" } else { "lower" }));
    }
    if let Some(key) = resp.highlight.and_then(|h| h.key()) {
        parts.push(format!("key={}", key.name()));
    }
    if let Some(id) = resp.image_identifier() {
        parts.push(format!("image={id}"));
    }
    let pulses = &resp.side_effects.haptic_pulses;
    if !pulses.is_empty() {
        let ms: Vec<String> = pulses.iter().map(u64::to_string).collect();
        parts.push(format!("vibrate={}", ms.join(",")));
    }
    if let (Some(word), true) = (&resp.side_effects.announce, sound_on) {
        parts.push(format!("speak={word:?}"));
    }
    if resp.side_effects.save_history {
        parts.push("saved".to_string());
    }
    parts.join("  ")
}

/// Feed every character of `line` to the session, writing one line per key.
pub fn run_line<R: ImageResolver, W: Write>(
    session: &mut KeyboardSession<R>,
    line: &str,
    out: &mut W,
    ansi: bool,
) -> io::Result<()> {
    for c in line.chars() {
        match play_key(c) {
            Some(PlayKey::Key(key)) => {
                let resp = session.handle_key(key);
                writeln!(out, "{}", render_response(&resp, session.sound_on(), ansi))?;
            }
            Some(PlayKey::ToggleSound) => {
                let on = session.toggle_sound();
                writeln!(out, "sound {}", if on { "on" } else { "off" })?;
            }
            None => writeln!(out, "ignored {c:?}")?,
        }
    }
    Ok(())
}

pub fn play(
    vocab_file: Option<&Path>,
    history_file: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let vocab = load_vocabulary(vocab_file)?;
    let mut engine = SuggestionEngine::new(vocab);
    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }
    let session = KeyboardSession::new(engine, IdentifierImages);
    let mut session = match history_file {
        Some(p) => session.with_history_store(FileHistoryStore::new(p)),
        None => session,
    };

    eprintln!("letters and space type; < > history, # delete, ! clear, ^ shift, ~ sound");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        run_line(&mut session, &line?, &mut out, true)?;
        out.flush()?;
    }
    Ok(())
}
