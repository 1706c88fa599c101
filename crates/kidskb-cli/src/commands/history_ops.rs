use std::path::Path;

use kidskb_core::history::History;

use super::CliError;

/// History words, the entry under the cursor marked with `>`.
pub fn history_lines(history: &History) -> Vec<String> {
    let cursor = history.cursor();
    history
        .words()
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let mark = if cursor == Some(i) { '>' } else { ' ' };
            format!("{mark} {i:3}  {w}")
        })
        .collect()
}

pub fn history_show(path: &Path) -> Result<(), CliError> {
    let history = History::open(path)?;
    if history.is_empty() {
        println!("(empty)");
        return Ok(());
    }
    for line in history_lines(&history) {
        println!("{line}");
    }
    println!("---");
    println!("{} words", history.len());
    Ok(())
}

pub fn history_clear(path: &Path) -> Result<(), CliError> {
    History::new().save(path)?;
    println!("Cleared {}", path.display());
    Ok(())
}
