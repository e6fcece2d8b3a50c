//! Round state
//!
//! Holds the root word for the current round and the words accepted so far.
//! No validation lives here; see [`super::validate`].

use super::error::RoundError;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Authoritative state for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
}

/// Start a new round with a root word chosen uniformly from `pool`
///
/// Blank entries are never chosen. The chosen word is trimmed and lowercased.
///
/// # Errors
///
/// Returns [`RoundError::EmptyPool`] if `pool` has no non-blank entries.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::core::start_round;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let state = start_round(&["Listen", "silkworm"], &mut rng).unwrap();
/// assert!(["listen", "silkworm"].contains(&state.root_word()));
/// assert!(state.used_words().is_empty());
/// ```
pub fn start_round<S, R>(pool: &[S], rng: &mut R) -> Result<RoundState, RoundError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let usable: Vec<&str> = pool
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .collect();

    let root = usable.choose(rng).ok_or(RoundError::EmptyPool)?;
    RoundState::new(root)
}

impl RoundState {
    /// Create a round anchored to a specific root word
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::BlankRootWord`] if `root_word` is blank after trimming.
    pub fn new(root_word: &str) -> Result<Self, RoundError> {
        let root_word = root_word.trim().to_lowercase();
        if root_word.is_empty() {
            return Err(RoundError::BlankRootWord);
        }

        Ok(Self {
            root_word,
            used_words: Vec::new(),
        })
    }

    /// The word whose letters bound this round
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Check whether `word` has already been accepted this round
    ///
    /// Comparison is case-insensitive.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.used_words.contains(&word)
    }

    /// Number of accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.used_words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used_words.is_empty()
    }

    /// Record a word that has already passed validation
    ///
    /// The word is normalized and placed at the front of the history. Callers must
    /// validate first; recording a duplicate is a bug in the caller.
    pub fn record_accepted(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        debug_assert!(
            !self.used_words.contains(&word),
            "'{word}' was recorded twice in one round"
        );
        self.used_words.insert(0, word);
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} found)", self.root_word, self.used_words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_normalizes_root() {
        let state = RoundState::new("  BrEaD\n").unwrap();
        assert_eq!(state.root_word(), "bread");
        assert!(state.is_empty());
    }

    #[test]
    fn new_rejects_blank_root() {
        assert_eq!(RoundState::new("   "), Err(RoundError::BlankRootWord));
        assert_eq!(RoundState::new(""), Err(RoundError::BlankRootWord));
    }

    #[test]
    fn start_round_empty_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool: &[&str] = &[];
        assert_eq!(start_round(pool, &mut rng), Err(RoundError::EmptyPool));
    }

    #[test]
    fn start_round_all_blank_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            start_round(&["", "  ", "\t"], &mut rng),
            Err(RoundError::EmptyPool)
        );
    }

    #[test]
    fn start_round_skips_blank_entries() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let state = start_round(&["", "kindness", " "], &mut rng).unwrap();
            assert_eq!(state.root_word(), "kindness");
        }
    }

    #[test]
    fn start_round_is_reproducible_with_seed() {
        let pool = ["absolute", "birthday", "calendar", "dinosaur", "elephant"];

        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| start_round(&pool, &mut rng).unwrap())
                .map(|state| state.root_word().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(7), picks(7));
    }

    #[test]
    fn start_round_reaches_every_entry() {
        let pool = ["absolute", "birthday", "calendar"];
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let state = start_round(&pool, &mut rng).unwrap();
            seen.insert(state.root_word().to_string());
        }
        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn record_accepted_prepends() {
        let mut state = RoundState::new("bread").unwrap();
        state.record_accepted("bear");
        state.record_accepted("Read ");
        assert_eq!(state.used_words(), ["read", "bear"]);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let mut state = RoundState::new("bread").unwrap();
        state.record_accepted("bear");
        assert!(state.contains("BEAR"));
        assert!(state.contains(" bear "));
        assert!(!state.contains("read"));
    }

    #[test]
    fn display_shows_root_and_count() {
        let mut state = RoundState::new("bread").unwrap();
        state.record_accepted("bear");
        assert_eq!(state.to_string(), "bread (1 found)");
    }

    proptest! {
        #[test]
        fn start_round_picks_member_of_pool(
            pool in prop::collection::vec("[a-z]{1,12}", 1..20),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = start_round(pool.as_slice(), &mut rng).unwrap();
            prop_assert!(pool.iter().any(|w| w == state.root_word()));
            prop_assert!(state.used_words().is_empty());
        }
    }
}
