//! Letter multiset
//!
//! A `LetterPool` counts how many times each letter appears in a word, so a candidate
//! can be checked against the root word's letters with duplicates handled correctly.

use rustc_hash::FxHashMap;

/// Multiset of the letters in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("speed");
    /// assert_eq!(pool.count('e'), 2);
    /// assert_eq!(pool.count('z'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of occurrences of `letter` left in the pool
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` and leaves the pool untouched if the letter is not present.
    pub fn take(&mut self, letter: char) -> bool {
        let Some(n) = self.counts.get_mut(&letter) else {
            return false;
        };

        *n -= 1;
        if *n == 0 {
            self.counts.remove(&letter);
        }
        true
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Consumes letters from a scratch copy in order and stops at the first letter
    /// that has run out.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|ch| remaining.take(ch))
    }
}
