//! MCTS (Monte Carlo Tree Search) player.
//!
//! Builds a fresh tree for every decision and plays the root action with the
//! most visits. Playouts are uniform random to the end of the game, so the
//! only knob is the number of simulations per decision.
//!
//! # Algorithm
//!
//! 1. **Selection**: descend with UCB1 (c = √2) through fully expanded nodes
//! 2. **Expansion**: add one child for a random untried action
//! 3. **Simulation**: random playout until every edge is claimed
//! 4. **Backpropagation**: credit each node with the result seen by its mover

use crate::agent::ai::{Difficulty, MctsStats, MctsTree};
use crate::agent::player::{assert_not_terminal, Player};
use crate::game_repr::{Action, State};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// MCTS AI player
pub struct MctsPlayer {
    simulations: u32,
    rng: StdRng,
    name: String,
    last_stats: Option<MctsStats>,
}

impl MctsPlayer {
    pub fn new(simulations: u32, name: String) -> Self {
        Self {
            simulations,
            rng: StdRng::from_entropy(),
            name,
            last_stats: None,
        }
    }

    /// Simulation budget taken from `difficulty`
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(
            difficulty.simulations(),
            format!("MCTS ({})", difficulty.name()),
        )
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn simulations(&self) -> u32 {
        self.simulations
    }

    /// Tree statistics of the most recent searched decision
    pub fn last_stats(&self) -> Option<&MctsStats> {
        self.last_stats.as_ref()
    }
}

impl Player for MctsPlayer {
    fn decide(&mut self, state: &State) -> Action {
        assert_not_terminal(state, &self.name);

        let mut tree = MctsTree::new(state);
        let action = tree.search(self.simulations, &mut self.rng);
        let stats = tree.get_stats();

        log::debug!(
            "[{}] {} simulations, {} root children, best {} ({} visits, mean {:.3})",
            self.name,
            stats.root_visits,
            stats.num_children,
            action,
            stats.best_action_visits,
            stats.best_action_mean
        );

        self.last_stats = Some(stats);
        action
    }

    fn name(&self) -> &str {
        &self.name
    }
}
