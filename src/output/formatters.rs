//! Formatting utilities for player-facing text

use crate::core::{Rejection, Rules};

/// Title and message shown when a word is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// Build the alert for a rejection
#[must_use]
pub fn alert_for(rejection: Rejection, root_word: &str, rules: &Rules) -> Alert {
    match rejection {
        Rejection::AlreadyUsed => Alert::new("Word used already", "New word please."),
        Rejection::NotConstructible => Alert::new(
            "Word not possible",
            format!("Not a form of your root word {root_word}."),
        ),
        Rejection::TooTrivial => {
            let message = if rules.reject_root_word {
                format!(
                    "Use more than {} letters, and not {root_word} itself.",
                    rules.min_length
                )
            } else {
                format!("Use more than {} letters.", rules.min_length)
            };
            Alert::new("Word not allowed", message)
        }
        Rejection::NotARealWord => Alert::new("Word not recognized", "Please provide a real word."),
    }
}

/// Badge showing a word's length, like `④` for a four-letter word
///
/// Circled digits cover 1 to 20; longer words fall back to `(n)`.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = word.chars().count();
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}
