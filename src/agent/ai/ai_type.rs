//! AI Type Registry - Centralized registry for AI implementations
//!
//! Enumerates the available agents and builds them from a difficulty and an
//! optional seed, so a driver can offer every agent without knowing their
//! constructors.

use super::search_player::{Difficulty, SearchPlayer};
use crate::agent::mcts_player::MctsPlayer;
use crate::agent::player::Player;
use crate::agent::qlearning_player::QLearningPlayer;
use crate::agent::random_player::RandomPlayer;
use crate::game_repr::{Action, State};

/// Enumeration of available AI algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AIType {
    #[default]
    AlphaBeta,
    Expectimax,
    Mcts,
    Random,
    QLearning,
}

impl AIType {
    /// Get all available AI types for UI enumeration
    pub fn all() -> &'static [AIType] {
        &[
            AIType::AlphaBeta,
            AIType::Expectimax,
            AIType::Mcts,
            AIType::Random,
            AIType::QLearning,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AIType::AlphaBeta => "AlphaBeta",
            AIType::Expectimax => "Expectimax",
            AIType::Mcts => "MCTS",
            AIType::Random => "Random",
            AIType::QLearning => "QLearning",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AIType::AlphaBeta => "Depth-limited minimax with alpha-beta pruning",
            AIType::Expectimax => "Depth-limited search against a random opponent",
            AIType::Mcts => "Monte Carlo tree search with random playouts",
            AIType::Random => "Uniformly random legal moves",
            AIType::QLearning => "Epsilon-greedy tabular Q-learning",
        }
    }

    /// Check if this AI type supports difficulty levels
    pub fn supports_difficulty(&self) -> bool {
        matches!(self, AIType::AlphaBeta | AIType::Expectimax | AIType::Mcts)
    }

    /// Get available difficulty levels for this AI type
    pub fn available_difficulties(&self) -> &'static [Difficulty] {
        if self.supports_difficulty() {
            Difficulty::all()
        } else {
            &[]
        }
    }

    pub fn default_difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    /// Create a Player instance for this AI type
    ///
    /// Agents without difficulty levels ignore `difficulty`. With a seed the
    /// player's decisions are reproducible.
    pub fn create_player(&self, difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Player> {
        match (self, seed) {
            (AIType::AlphaBeta, None) => Box::new(SearchPlayer::alpha_beta(difficulty)),
            (AIType::AlphaBeta, Some(seed)) => {
                Box::new(SearchPlayer::alpha_beta(difficulty).with_seed(seed))
            }
            (AIType::Expectimax, None) => Box::new(SearchPlayer::expectimax(difficulty)),
            (AIType::Expectimax, Some(seed)) => {
                Box::new(SearchPlayer::expectimax(difficulty).with_seed(seed))
            }
            (AIType::Mcts, None) => Box::new(MctsPlayer::with_difficulty(difficulty)),
            (AIType::Mcts, Some(seed)) => {
                Box::new(MctsPlayer::with_difficulty(difficulty).with_seed(seed))
            }
            (AIType::Random, None) => Box::new(RandomPlayer::default()),
            (AIType::Random, Some(seed)) => Box::new(RandomPlayer::default().with_seed(seed)),
            (AIType::QLearning, None) => Box::new(QLearningPlayer::default()),
            (AIType::QLearning, Some(seed)) => {
                Box::new(QLearningPlayer::default().with_seed(seed))
            }
        }
    }

    /// Pick an action directly without keeping a Player around
    pub fn generate_action(&self, state: &State, difficulty: Difficulty, seed: Option<u64>) -> Action {
        self.create_player(difficulty, seed).decide(state)
    }
}

/// Configuration for a single AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIConfig {
    pub ai_type: AIType,
    pub difficulty: Difficulty,
    /// Fixed RNG seed, entropy when None
    pub seed: Option<u64>,
}

impl AIConfig {
    pub fn new(ai_type: AIType, difficulty: Difficulty) -> Self {
        Self {
            ai_type,
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn generate_action(&self, state: &State) -> Action {
        self.ai_type.generate_action(state, self.difficulty, self.seed)
    }

    pub fn create_player(&self) -> Box<dyn Player> {
        self.ai_type.create_player(self.difficulty, self.seed)
    }

    pub fn display_string(&self) -> String {
        if self.ai_type.supports_difficulty() {
            format!("{} ({})", self.ai_type.display_name(), self.difficulty.name())
        } else {
            self.ai_type.display_name().to_string()
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        Self::new(AIType::default(), AIType::default().default_difficulty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_type_all() {
        let all = AIType::all();
        assert_eq!(all.len(), 5);
        assert!(all.contains(&AIType::QLearning));
    }

    #[test]
    fn test_ai_type_display_name() {
        assert_eq!(AIType::AlphaBeta.display_name(), "AlphaBeta");
        assert_eq!(AIType::Mcts.display_name(), "MCTS");
    }

    #[test]
    fn test_ai_type_supports_difficulty() {
        assert!(AIType::AlphaBeta.supports_difficulty());
        assert!(AIType::Mcts.supports_difficulty());
        assert!(!AIType::Random.supports_difficulty());
        assert!(AIType::Random.available_difficulties().is_empty());
        assert_eq!(AIType::Expectimax.available_difficulties().len(), 4);
    }

    #[test]
    fn test_ai_config_default() {
        let config = AIConfig::default();
        assert_eq!(config.ai_type, AIType::AlphaBeta);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_ai_config_display_string() {
        let config = AIConfig::new(AIType::Expectimax, Difficulty::Hard);
        assert_eq!(config.display_string(), "Expectimax (Hard)");
        let config = AIConfig::new(AIType::Random, Difficulty::Hard);
        assert_eq!(config.display_string(), "Random");
    }

    #[test]
    fn test_every_type_creates_a_legal_player() {
        let state = State::new(3);
        for &ai_type in AIType::all() {
            let config = AIConfig::new(ai_type, Difficulty::Easy).with_seed(1);
            let action = config.generate_action(&state);
            assert!(state.is_legal(action), "{:?} played {}", ai_type, action);
            assert!(!config.create_player().is_interactive());
        }
    }
}
