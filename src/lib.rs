//! Word Scramble
//!
//! A root word is picked at random and the player builds new words from its letters.
//! Each submission must be original, constructible from the root word's letters,
//! longer than a minimum length, and a real word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Outcome, Rules, RoundState, validate};
//!
//! let mut state = RoundState::new("bread").unwrap();
//! let dictionary = |word: &str| ["bear", "bread"].contains(&word);
//!
//! let outcome = validate("Bear ", &state, &Rules::default(), &dictionary);
//! if let Outcome::Accepted(word) = outcome {
//!     state.record_accepted(word.as_str());
//! }
//! assert_eq!(state.used_words(), ["bear"]);
//! ```

// Core domain types: round state and validation
pub mod core;

// Dictionary lookup capability
pub mod dictionary;

// Game session tying state, rules and dictionary together
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
