//! Game session
//!
//! Owns one round at a time and applies accepted submissions.

mod engine;

pub use engine::Game;
