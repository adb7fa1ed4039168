//! Tabular Q-learning player.
//!
//! Keeps an in-memory table of `(state, action) → value`, acts
//! epsilon-greedily on it and learns from one-step updates. Values are from
//! the point of view of the side making the action; when the turn passes to
//! the opponent the best future value is negated before discounting.
//!
//! The table lives only as long as the player; nothing is saved to disk.

use crate::agent::player::{assert_not_terminal, GameResult, Player};
use crate::game_repr::{Action, State};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Learning parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QLearningConfig {
    pub learning_rate: f64,
    pub discount_factor: f64,
    /// Initial probability of a random move
    pub exploration_rate: f64,
    /// Multiplier applied to the exploration rate after each game
    pub exploration_decay: f64,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.95,
            exploration_rate: 1.0,
            exploration_decay: 0.995,
        }
    }
}

pub struct QLearningPlayer {
    q_table: HashMap<(State, Action), f64>,
    config: QLearningConfig,
    exploration_rate: f64,
    rng: StdRng,
    name: String,
}

impl QLearningPlayer {
    pub fn new(config: QLearningConfig, name: String) -> Self {
        Self {
            q_table: HashMap::new(),
            exploration_rate: config.exploration_rate,
            config,
            rng: StdRng::from_entropy(),
            name,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// Override the current exploration rate (0.0 = always greedy)
    pub fn set_exploration_rate(&mut self, rate: f64) {
        self.exploration_rate = rate.clamp(0.0, 1.0);
    }

    /// Number of learned entries
    pub fn table_len(&self) -> usize {
        self.q_table.len()
    }

    /// Learned value, 0.0 when never updated
    pub fn q_value(&self, state: &State, action: Action) -> f64 {
        self.q_table
            .get(&(state.clone(), action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Highest valued legal action; the first in natural order wins ties
    ///
    /// # Panics
    /// On a terminal state.
    pub fn best_action(&self, state: &State) -> Action {
        assert_not_terminal(state, &self.name);
        let moves = state.legal_moves();
        let mut best = moves[0];
        let mut best_value = f64::NEG_INFINITY;
        for action in moves {
            let value = self.q_value(state, action);
            if value > best_value {
                best_value = value;
                best = action;
            }
        }
        best
    }

    /// Best value available in `state`, 0.0 when it is terminal
    fn best_value(&self, state: &State) -> f64 {
        state
            .legal_moves()
            .into_iter()
            .map(|action| self.q_value(state, action))
            .fold(None, |best: Option<f64>, value| {
                Some(best.map_or(value, |b| b.max(value)))
            })
            .unwrap_or(0.0)
    }

    /// One-step Q update for `action` taken in `prev`, leading to `next`.
    ///
    /// `reward` is from the point of view of the side that acted in `prev`.
    pub fn update(&mut self, prev: &State, action: Action, reward: f64, next: &State) {
        let mut future = self.best_value(next);
        if next.active_player() != prev.active_player() {
            future = -future;
        }

        let key = (prev.clone(), action);
        let old = self.q_table.get(&key).copied().unwrap_or(0.0);
        let new = old
            + self.config.learning_rate * (reward + self.config.discount_factor * future - old);
        self.q_table.insert(key, new);
    }

    pub fn decay_exploration(&mut self) {
        self.exploration_rate *= self.config.exploration_decay;
    }

    /// Play `episodes` games against itself on a `dots` board, rewarding each
    /// move with the boxes it scored.
    pub fn train_self_play(&mut self, dots: usize, episodes: u32) {
        for episode in 0..episodes {
            let mut state = State::new(dots);
            while !state.is_terminal() {
                let mover = state.active_player();
                let action = self.decide(&state);
                let next = state.apply(action);
                let reward = next.score(mover) as f64 - state.score(mover) as f64;
                self.update(&state, action, reward, &next);
                state = next;
            }
            self.decay_exploration();
            log::trace!(
                "[{}] episode {} done, {} entries, epsilon {:.3}",
                self.name,
                episode,
                self.q_table.len(),
                self.exploration_rate
            );
        }
    }
}

impl Default for QLearningPlayer {
    fn default() -> Self {
        Self::new(QLearningConfig::default(), "QLearning".to_string())
    }
}

impl Player for QLearningPlayer {
    fn decide(&mut self, state: &State) -> Action {
        assert_not_terminal(state, &self.name);
        if self.rng.gen::<f64>() < self.exploration_rate {
            let moves = state.legal_moves();
            moves[self.rng.gen_range(0..moves.len())]
        } else {
            self.best_action(state)
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn game_ended(&mut self, _result: GameResult) {
        self.decay_exploration();
    }
}
