//! Batch word checking
//!
//! Validates a list of words against a chosen root word, in order, as if the player
//! had typed them one after another.

use crate::core::{Outcome, RoundError, RoundState, Rules, validate};
use crate::dictionary::Dictionary;

/// One checked submission
pub struct CheckEntry {
    pub input: String,
    pub outcome: Outcome,
}

/// Result of checking a batch of words
pub struct CheckReport {
    /// Round state after every accepted word has been recorded
    pub state: RoundState,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Number of words that were accepted
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.state.len()
    }

    /// Number of non-blank submissions
    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome != Outcome::Empty)
            .count()
    }
}

/// Check `words` in order against `root_word`
///
/// # Errors
///
/// Returns [`RoundError::BlankRootWord`] if `root_word` is blank.
pub fn check_words<S, D>(
    root_word: &str,
    words: &[S],
    rules: &Rules,
    dictionary: &D,
) -> Result<CheckReport, RoundError>
where
    S: AsRef<str>,
    D: Dictionary + ?Sized,
{
    let mut state = RoundState::new(root_word)?;
    let mut entries = Vec::with_capacity(words.len());

    for input in words {
        let input = input.as_ref();
        let outcome = validate(input, &state, rules, dictionary);
        if let Outcome::Accepted(word) = &outcome {
            state.record_accepted(word.as_str());
        }
        entries.push(CheckEntry {
            input: input.to_string(),
            outcome,
        });
    }

    Ok(CheckReport { state, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordListDictionary;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words(["bear", "read", "dare", "bread"])
    }

    #[test]
    fn check_words_records_in_order() {
        let report = check_words(
            "Bread",
            &["bear", "read", "bear", "brave", "bread", "abred", " "],
            &Rules::default(),
            &dictionary(),
        )
        .unwrap();

        let reasons: Vec<Option<Rejection>> = report
            .entries
            .iter()
            .map(|entry| entry.outcome.rejection())
            .collect();
        assert_eq!(
            reasons,
            [
                None,
                None,
                Some(Rejection::AlreadyUsed),
                Some(Rejection::NotConstructible),
                Some(Rejection::TooTrivial),
                Some(Rejection::NotARealWord),
                None,
            ]
        );
        assert_eq!(report.entries[6].outcome, Outcome::Empty);
        assert_eq!(report.state.used_words(), ["read", "bear"]);
        assert_eq!(report.accepted_count(), 2);
        assert_eq!(report.submitted_count(), 6);
    }

    #[test]
    fn check_words_blank_root_fails() {
        let words: &[&str] = &["bear"];
        let result = check_words("  ", words, &Rules::default(), &dictionary());
        assert!(matches!(result, Err(RoundError::BlankRootWord)));
    }

    #[test]
    fn check_words_no_words() {
        let words: &[&str] = &[];
        let report = check_words("bread", words, &Rules::default(), &dictionary()).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.accepted_count(), 0);
    }
}
