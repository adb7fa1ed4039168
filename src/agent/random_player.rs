//! Uniform random player, used as a baseline opponent.

use crate::agent::player::{assert_not_terminal, Player};
use crate::game_repr::{Action, State};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new(name: String) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new("Random".to_string())
    }
}

impl Player for RandomPlayer {
    fn decide(&mut self, state: &State) -> Action {
        assert_not_terminal(state, &self.name);
        let moves = state.legal_moves();
        moves[self.rng.gen_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        &self.name
    }
}
