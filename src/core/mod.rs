//! Core domain types for Word Scramble
//!
//! Round state, the letter multiset behind constructibility, and the validation engine.
//! Everything here is pure and synchronous; the dictionary is injected by the caller.

mod error;
mod letters;
mod state;
mod validation;

pub use error::RoundError;
pub use letters::LetterPool;
pub use state::{RoundState, start_round};
pub use validation::{Candidate, Outcome, Rejection, Rules, validate};
