use std::path::Path;

use kidskb_core::vocabulary::Vocabulary;

use super::{load_vocabulary, CliError};

/// One `identifier<TAB>word` line per entry, in word order.
pub fn vocab_lines(vocab: &Vocabulary) -> Vec<String> {
    vocab
        .iter()
        .map(|e| format!("{}\t{}", e.identifier, e.word))
        .collect()
}

pub fn vocab_list(file: Option<&Path>) -> Result<(), CliError> {
    let vocab = load_vocabulary(file)?;
    for line in vocab_lines(&vocab) {
        println!("{line}");
    }
    println!("---");
    println!("{} words", vocab.len());
    Ok(())
}

/// Validate a manifest; returns the word count.
pub fn vocab_check(file: &Path) -> Result<usize, CliError> {
    let vocab = Vocabulary::open(file)?;
    Ok(vocab.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_in_word_order() {
        let vocab = Vocabulary::parse("a_dog\na_ice_cream\na_cat\n", "a_").unwrap();
        assert_eq!(
            vocab_lines(&vocab),
            ["a_cat\tcat", "a_dog\tdog", "a_ice_cream\tice cream"]
        );
    }

    #[test]
    fn check_reports_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.txt");
        std::fs::write(&path, "a_cat\na_\n").unwrap();
        assert!(matches!(vocab_check(&path), Err(CliError::Vocabulary(_))));

        std::fs::write(&path, "# words\na_cat\na_dog\n").unwrap();
        assert_eq!(vocab_check(&path).unwrap(), 2);
    }
}
