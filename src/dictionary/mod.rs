//! Dictionary lookup
//!
//! The validation engine only needs to ask whether a string is a real word. That
//! question sits behind the [`Dictionary`] trait so the embedded word list, a custom
//! file, or a test stub can answer it.

mod word_list;

pub use word_list::WordListDictionary;

/// Answers whether a word is recognized in the active language
pub trait Dictionary {
    /// Returns `true` if `word` is a real word
    ///
    /// `word` is already trimmed and lowercased.
    fn is_valid_word(&self, word: &str) -> bool;
}

/// Any `Fn(&str) -> bool` works as a dictionary
impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<D: Dictionary + ?Sized>(dictionary: &D, word: &str) -> bool {
        dictionary.is_valid_word(word)
    }

    #[test]
    fn closures_are_dictionaries() {
        let only_bear = |word: &str| word == "bear";
        assert!(lookup(&only_bear, "bear"));
        assert!(!lookup(&only_bear, "bread"));
    }

    #[test]
    fn trait_objects_work() {
        let boxed: Box<dyn Dictionary> = Box::new(WordListDictionary::from_words(["bear"]));
        assert!(lookup(&*boxed, "bear"));
        assert!(!lookup(&*boxed, "read"));
    }
}
