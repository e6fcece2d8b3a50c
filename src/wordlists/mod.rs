//! Word lists for Word Scramble
//!
//! Provides the embedded root-word pool and dictionary compiled into the binary, plus
//! loaders for custom newline-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        assert!(!START_WORDS.is_empty());
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Root word '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_lowercase_letters() {
        for &word in DICTIONARY_WORDS {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                "Dictionary word '{word}' is not lowercase letters"
            );
        }
    }
}
