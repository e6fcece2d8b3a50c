//! Validation engine
//!
//! Decides whether a submission is accepted for the current round. The checks run in a
//! fixed order and the first failure decides the rejection reason:
//!
//! 1. originality: not accepted earlier this round
//! 2. constructibility: spelled from the root word's letters
//! 3. non-triviality: not the root word, longer than the minimum length
//! 4. recognizability: the dictionary knows the word
//!
//! The dictionary is consulted last and at most once per call.

use super::letters::LetterPool;
use super::state::RoundState;
use crate::dictionary::Dictionary;
use std::fmt;

/// Rules applied by the non-triviality check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Words must be strictly longer than this many letters
    pub min_length: usize,
    /// Reject the root word itself
    pub reject_root_word: bool,
}

impl Rules {
    pub const DEFAULT_MIN_LENGTH: usize = 3;

    #[must_use]
    pub const fn new(min_length: usize, reject_root_word: bool) -> Self {
        Self {
            min_length,
            reject_root_word,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH, true)
    }
}

/// A normalized submission: trimmed and lowercased, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    /// Normalize a raw submission
    ///
    /// Returns `None` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// assert_eq!(Candidate::parse("  Bear\n").unwrap().as_str(), "bear");
    /// assert!(Candidate::parse(" \t ").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        (!normalized.is_empty()).then_some(Self(normalized))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in letters
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    AlreadyUsed,
    NotConstructible,
    TooTrivial,
    NotARealWord,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyUsed => write!(f, "already used this round"),
            Self::NotConstructible => write!(f, "cannot be made from the root word"),
            Self::TooTrivial => write!(f, "too short or same as the root word"),
            Self::NotARealWord => write!(f, "not a recognized word"),
        }
    }
}

/// Result of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank submission; ignore it without telling the player
    Empty,
    /// All checks passed; record the word with [`RoundState::record_accepted`]
    Accepted(Candidate),
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Validate a raw submission against the current round
///
/// Pure: `state` is not modified. On [`Outcome::Accepted`] the caller records the word.
///
/// # Examples
/// ```
/// use word_scramble::core::{Outcome, Rejection, Rules, RoundState, validate};
///
/// let state = RoundState::new("bread").unwrap();
/// let dictionary = |_: &str| true;
///
/// assert!(validate("bear", &state, &Rules::default(), &dictionary).is_accepted());
/// assert_eq!(
///     validate("bread", &state, &Rules::default(), &dictionary),
///     Outcome::Rejected(Rejection::TooTrivial)
/// );
/// ```
pub fn validate<D>(raw: &str, state: &RoundState, rules: &Rules, dictionary: &D) -> Outcome
where
    D: Dictionary + ?Sized,
{
    let Some(candidate) = Candidate::parse(raw) else {
        return Outcome::Empty;
    };

    match check(&candidate, state, rules, dictionary) {
        Some(reason) => Outcome::Rejected(reason),
        None => Outcome::Accepted(candidate),
    }
}

/// Run the ordered checks, returning the first failure
fn check<D>(
    candidate: &Candidate,
    state: &RoundState,
    rules: &Rules,
    dictionary: &D,
) -> Option<Rejection>
where
    D: Dictionary + ?Sized,
{
    let word = candidate.as_str();

    if !is_original(word, state) {
        return Some(Rejection::AlreadyUsed);
    }

    if !is_possible(word, state.root_word()) {
        return Some(Rejection::NotConstructible);
    }

    if is_trivial(candidate, state.root_word(), rules) {
        return Some(Rejection::TooTrivial);
    }

    if !dictionary.is_valid_word(word) {
        return Some(Rejection::NotARealWord);
    }

    None
}

fn is_original(word: &str, state: &RoundState) -> bool {
    !state.contains(word)
}

fn is_possible(word: &str, root_word: &str) -> bool {
    LetterPool::from_word(root_word).can_spell(word)
}

fn is_trivial(candidate: &Candidate, root_word: &str, rules: &Rules) -> bool {
    (rules.reject_root_word && candidate.as_str() == root_word)
        || candidate.letter_count() <= rules.min_length
}
