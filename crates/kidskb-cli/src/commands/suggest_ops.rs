use std::path::Path;

use serde::Serialize;

use kidskb_core::history::History;
use kidskb_core::vocabulary::Vocabulary;
use kidskb_session::{rank_candidates, RankedCandidate};

use super::{load_history, load_vocabulary, CliError};

#[derive(Debug, Serialize)]
pub struct SuggestReport {
    pub prefix: String,
    /// Word the keyboard would ghost first (ignoring recycling).
    pub pick: Option<String>,
    pub candidates: Vec<CandidateRow>,
}

#[derive(Debug, Serialize)]
pub struct CandidateRow {
    pub word: String,
    pub identifier: String,
    pub in_history: bool,
}

impl From<RankedCandidate> for CandidateRow {
    fn from(c: RankedCandidate) -> Self {
        Self {
            word: c.word,
            identifier: c.identifier,
            in_history: c.in_history,
        }
    }
}

pub fn build_report(vocab: &Vocabulary, prefix: &str, history: &History) -> SuggestReport {
    let ranked = rank_candidates(vocab, prefix, history);
    let pick = ranked
        .iter()
        .find(|c| !c.in_history)
        .map(|c| c.word.clone());
    SuggestReport {
        prefix: prefix.to_string(),
        pick,
        candidates: ranked.into_iter().map(CandidateRow::from).collect(),
    }
}

pub fn format_report(report: &SuggestReport) -> String {
    if report.candidates.is_empty() {
        return format!("no words start with {:?}\n", report.prefix);
    }
    let mut out = String::new();
    for (i, c) in report.candidates.iter().enumerate() {
        let mark = if report.pick.as_deref() == Some(c.word.as_str()) {
            '>'
        } else if c.in_history {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!("{mark} {i:3}  {:<16} {}\n", c.word, c.identifier));
    }
    if report.pick.is_none() {
        out.push_str("(all matches used; the keyboard recycles one at random)\n");
    }
    out
}

pub fn suggest(
    prefix: &str,
    vocab_file: Option<&Path>,
    history_file: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let vocab = load_vocabulary(vocab_file)?;
    let history = load_history(history_file)?;
    let report = build_report(&vocab, prefix, &history);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}
