//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased and blank lines are skipped.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        count = words.len(),
        "loaded word list"
    );
    Ok(words)
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}

fn parse_lines(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize).collect()
}

fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let file_name = format!("word_scramble_{}_{name}.txt", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_words() {
        let input = &["listen", "Silent", "tinsel"];
        let words = words_from_slice(input);
        assert_eq!(words, ["listen", "silent", "tinsel"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["listen", "", "   ", "tinsel"];
        let words = words_from_slice(input);
        assert_eq!(words, ["listen", "tinsel"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_lines_handles_trailing_newline_and_crlf() {
        let words = parse_lines("absolute\r\nBirthday\n\ncalendar\n");
        assert_eq!(words, ["absolute", "birthday", "calendar"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("pool", "Keyboard\n  notebook \n\n");
        let words = load_from_file(&path).unwrap();
        assert_eq!(words, ["keyboard", "notebook"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_from_file_rejects_blank_file() {
        let path = temp_file("blank", "\n   \n");
        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, WordListError::Empty { .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_from_file_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/start.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("start.txt"));
    }
}
