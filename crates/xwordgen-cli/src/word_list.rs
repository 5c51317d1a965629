//! Word list loading.
//!
//! A word list holds one `answer,clue` pair per line. The line is split at
//! the first comma, so clues may contain commas. Blank lines and lines
//! starting with `#` are ignored, and a clue wrapped in double quotes is
//! unquoted.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Error returned when a word list cannot be loaded.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum WordListError {
    /// The file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// A line is malformed.
    #[display("line {line}: {kind}")]
    Parse {
        line: usize,
        kind: LineError,
    },
}

/// What is wrong with a malformed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum LineError {
    #[display("expected `answer,clue`")]
    MissingComma,
    #[display("empty answer")]
    EmptyAnswer,
}

/// Reads and parses the word list at `path`.
pub(crate) fn load(path: &Path) -> Result<Vec<(String, String)>, WordListError> {
    let text = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_owned(),
        source,
    })?;
    let words = parse(&text)?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parses word list text into `(answer, clue)` pairs.
pub(crate) fn parse(text: &str) -> Result<Vec<(String, String)>, WordListError> {
    let mut words = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let error = |kind| WordListError::Parse { line: i + 1, kind };
        let (answer, clue) = line.split_once(',').ok_or_else(|| error(LineError::MissingComma))?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(error(LineError::EmptyAnswer));
        }
        let clue = clue.trim();
        let clue = clue
            .strip_prefix('"')
            .and_then(|clue| clue.strip_suffix('"'))
            .unwrap_or(clue);
        words.push((answer.to_owned(), clue.to_owned()));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(words: &[(String, String)]) -> Vec<(&str, &str)> {
        words
            .iter()
            .map(|(answer, clue)| (answer.as_str(), clue.as_str()))
            .collect()
    }

    #[test]
    fn test_parse() {
        let text = "\
# animals
CAT,feline

dog , canine
heron,\"wading bird, long legs\"
emu,
";
        let words = parse(text).unwrap();
        assert_eq!(
            pairs(&words),
            [
                ("CAT", "feline"),
                ("dog", "canine"),
                ("heron", "wading bird, long legs"),
                ("emu", ""),
            ]
        );
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = parse("CAT,feline\n\nDOG canine\n").unwrap_err();
        assert!(matches!(
            err,
            WordListError::Parse {
                line: 3,
                kind: LineError::MissingComma
            }
        ));
        assert_eq!(err.to_string(), "line 3: expected `answer,clue`");

        let err = parse("  ,nothing").unwrap_err();
        assert!(matches!(
            err,
            WordListError::Parse {
                line: 1,
                kind: LineError::EmptyAnswer
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/xwordgen/words.csv")).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read /nonexistent/xwordgen/words.csv"));
    }
}
