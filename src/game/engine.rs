//! Main game session interface

use crate::core::{Outcome, RoundError, RoundState, Rules, start_round, validate};
use crate::dictionary::Dictionary;
use rand::Rng;

/// A game session
///
/// Coordinates the round state, rules, dictionary and random source. Each call to
/// [`Game::submit`] validates and applies one word before returning.
pub struct Game<'a, D: Dictionary, R: Rng> {
    pool: &'a [String],
    dictionary: D,
    rules: Rules,
    rng: R,
    state: RoundState,
    rounds_started: usize,
}

impl<'a, D: Dictionary, R: Rng> Game<'a, D, R> {
    /// Create a new game and start its first round
    ///
    /// # Parameters
    /// - `pool`: Root words to choose from
    /// - `dictionary`: Lookup used for the recognizability check
    /// - `rules`: Minimum length and root-word rules
    /// - `rng`: Random source for picking root words
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyPool`] if `pool` has no usable words.
    pub fn new(
        pool: &'a [String],
        dictionary: D,
        rules: Rules,
        mut rng: R,
    ) -> Result<Self, RoundError> {
        let state = start_round(pool, &mut rng)?;
        tracing::info!(root = state.root_word(), "round started");

        Ok(Self {
            pool,
            dictionary,
            rules,
            rng,
            state,
            rounds_started: 1,
        })
    }

    /// Abandon the current round and start a fresh one
    ///
    /// Accepted words are not carried over.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyPool`] if the pool has no usable words.
    pub fn new_round(&mut self) -> Result<&RoundState, RoundError> {
        self.state = start_round(self.pool, &mut self.rng)?;
        self.rounds_started += 1;
        tracing::info!(
            root = self.state.root_word(),
            round = self.rounds_started,
            "round started"
        );
        Ok(&self.state)
    }

    /// Validate a raw submission and record it if accepted
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let outcome = validate(raw, &self.state, &self.rules, &self.dictionary);

        match &outcome {
            Outcome::Accepted(word) => {
                self.state.record_accepted(word.as_str());
                tracing::debug!(
                    word = word.as_str(),
                    found = self.state.len(),
                    "word accepted"
                );
            }
            Outcome::Rejected(reason) => {
                tracing::debug!(input = raw.trim(), %reason, "word rejected");
            }
            Outcome::Empty => {}
        }

        outcome
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of rounds started, including the current one
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_game(pool: &[String]) -> Game<'_, WordListDictionary, StdRng> {
        let dictionary = WordListDictionary::from_words(["bear", "bread", "read", "dare", "bead"]);
        let rng = StdRng::seed_from_u64(5);
        Game::new(pool, dictionary, Rules::default(), rng)
            .expect("pool has at least one word")
    }

    fn bread_pool() -> Vec<String> {
        vec!["bread".to_string()]
    }

    #[test]
    fn new_game_starts_round() {
        let pool = bread_pool();
        let game = setup_game(&pool);
        assert_eq!(game.state().root_word(), "bread");
        assert!(game.state().is_empty());
        assert_eq!(game.rounds_started(), 1);
    }

    #[test]
    fn new_game_with_empty_pool_fails() {
        let pool: Vec<String> = Vec::new();
        let result = Game::new(
            &pool,
            WordListDictionary::default(),
            Rules::default(),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(RoundError::EmptyPool)));
    }

    #[test]
    fn submit_records_accepted_words() {
        let pool = bread_pool();
        let mut game = setup_game(&pool);

        assert!(game.submit("bear").is_accepted());
        assert!(game.submit(" READ ").is_accepted());
        assert_eq!(game.state().used_words(), ["read", "bear"]);
    }

    #[test]
    fn rejected_and_empty_leave_state_unchanged() {
        let pool = bread_pool();
        let mut game = setup_game(&pool);
        game.submit("bear");
        let before = game.state().clone();

        assert_eq!(game.submit("   "), Outcome::Empty);

        let mut rejection_for = |word: &str| game.submit(word).rejection();
        assert_eq!(rejection_for("bear"), Some(Rejection::AlreadyUsed));
        assert_eq!(rejection_for("beard"), Some(Rejection::NotARealWord));
        assert_eq!(rejection_for("bread"), Some(Rejection::TooTrivial));
        assert_eq!(rejection_for("brave"), Some(Rejection::NotConstructible));

        assert_eq!(game.state(), &before);
    }

    #[test]
    fn new_round_clears_used_words() {
        let pool = bread_pool();
        let mut game = setup_game(&pool);
        game.submit("bear");
        assert_eq!(game.state().len(), 1);

        let state = game.new_round().unwrap();
        assert!(state.is_empty());
        assert_eq!(game.rounds_started(), 2);

        // Same word is fresh again in the new round
        assert!(game.submit("bear").is_accepted());
    }

    #[test]
    fn rounds_draw_from_pool() {
        let pool: Vec<String> = ["absolute", "birthday", "calendar"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut game = setup_game(&pool);
        for _ in 0..20 {
            let root = game.new_round().unwrap().root_word().to_string();
            assert!(pool.contains(&root));
        }
    }

    #[test]
    fn closure_dictionary_game() {
        let pool = bread_pool();
        let even_length = |word: &str| word.len().is_multiple_of(2);
        let rng = StdRng::seed_from_u64(1);
        let rules = Rules::default();
        let mut game = Game::new(&pool, even_length, rules, rng).unwrap();

        assert!(game.submit("bear").is_accepted());
        let outcome = game.submit("beard");
        assert_eq!(outcome.rejection(), Some(Rejection::NotARealWord));
    }
}
