//! Word-list backed dictionary

use super::Dictionary;
use crate::wordlists::DICTIONARY_WORDS;
use rustc_hash::FxHashSet;

/// Dictionary backed by an in-memory set of words
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["Bear", " read "]);
    /// assert!(dictionary.is_valid_word("bear"));
    /// assert!(dictionary.is_valid_word("read"));
    /// assert!(!dictionary.is_valid_word("bread"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Dictionary over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY_WORDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordListDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
