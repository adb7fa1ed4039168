//! SearchPlayer - depth-limited tree search agents
//!
//! One player type covers both search agents; they differ only in how the
//! opponent is modelled:
//! - **Alpha-beta**: the opponent plays the move worst for us, and branches
//!   that cannot change the result are pruned
//! - **Expectimax**: the opponent is treated as a uniform random mover, so
//!   its nodes average over their children
//!
//! Both take an open box immediately when one exists (see
//! [`open_box_shortcut`](super::open_box_shortcut)), and both break ties
//! between equally valued root moves by the order the moves were searched.
//! With the default shuffled ordering that order comes from the player's own
//! RNG; seed it with [`SearchPlayer::with_seed`] for reproducible games.
//!
//! # Difficulty Levels
//!
//! | Difficulty | Depth | MCTS simulations |
//! |------------|-------|------------------|
//! | Easy       | 2     | 100              |
//! | Medium     | 3     | 500              |
//! | Hard       | 4     | 2000             |
//! | Expert     | 5     | 5000             |
//!
//! # Examples
//!
//! ```
//! use dots_and_boxes::agent::ai::{Difficulty, SearchPlayer};
//! use dots_and_boxes::agent::Player;
//! use dots_and_boxes::game_repr::State;
//!
//! let mut ai = SearchPlayer::alpha_beta(Difficulty::Easy).with_seed(7);
//! let state = State::new(3);
//! let action = ai.decide(&state);
//! assert!(state.is_legal(action));
//! ```

use super::evaluation::Heuristic;
use super::move_ordering::MoveOrdering;
use super::search::{search, OpponentModel, SearchConfig, SearchResult};
use crate::agent::player::{assert_not_terminal, Player};
use crate::game_repr::{Action, State};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// AI difficulty levels that map to search depth and simulation budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Plies searched by the tree-search players
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// Simulations run by the MCTS player per decision
    pub fn simulations(&self) -> u32 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 500,
            Difficulty::Hard => 2000,
            Difficulty::Expert => 5000,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Tree-search player (alpha-beta or expectimax).
///
/// Holds its own RNG, used for shuffled move ordering. Every other part of
/// the search is deterministic.
pub struct SearchPlayer {
    config: SearchConfig,
    rng: StdRng,
    name: String,
    last_result: Option<SearchResult>,
}

impl SearchPlayer {
    /// Create a player from an explicit configuration
    pub fn new(config: SearchConfig, name: String) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
            name,
            last_result: None,
        }
    }

    /// Adversarial search at the depth of `difficulty`
    pub fn alpha_beta(difficulty: Difficulty) -> Self {
        Self::new(
            SearchConfig::alpha_beta(difficulty.max_depth()),
            format!("AlphaBeta ({})", difficulty.name()),
        )
    }

    /// Uniform-opponent search at the depth of `difficulty`
    pub fn expectimax(difficulty: Difficulty) -> Self {
        Self::new(
            SearchConfig::expectimax(difficulty.max_depth()),
            format!("Expectimax ({})", difficulty.name()),
        )
    }

    /// Replace the RNG with a seeded one
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.config.heuristic = heuristic;
        self
    }

    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.config.ordering = ordering;
        self
    }

    pub fn with_shortcut(mut self, enabled: bool) -> Self {
        self.config.open_box_shortcut = enabled;
        self
    }

    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent decision
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Run the search and keep its statistics
    pub fn search(&mut self, state: &State) -> SearchResult {
        let result = search(state, &self.config, &mut self.rng);
        self.last_result = Some(result.clone());
        result
    }
}

impl Player for SearchPlayer {
    fn decide(&mut self, state: &State) -> Action {
        assert_not_terminal(state, &self.name);

        let result = self.search(state);

        if result.shortcut {
            log::debug!("[{}] open box, claiming {}", self.name, result.best_action);
        } else {
            let model = match self.config.opponent {
                OpponentModel::Adversarial => "adversarial",
                OpponentModel::Uniform => "uniform",
            };
            log::debug!(
                "[{}] depth {} ({} opponent), {} nodes, best {} scoring {:.2}",
                self.name,
                result.depth,
                model,
                result.nodes_searched,
                result.best_action,
                result.score
            );
        }

        result.best_action
    }

    fn name(&self) -> &str {
        &self.name
    }
}
