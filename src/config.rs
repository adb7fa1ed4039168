//! Match configuration.
//!
//! A [`MatchConfig`] holds everything needed to start a series of rounds:
//! board size, number of rounds and who plays each side.

use crate::agent::ai::{AIConfig, AIType, Difficulty};
use crate::agent::{HumanPlayer, Player};
use crate::game_repr::Side;

/// Dots per side when none is given
pub const DEFAULT_DOTS: usize = 4;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player whose moves come from an external UI
    Human,
    AI(AIConfig),
}

impl PlayerConfig {
    pub fn ai(config: AIConfig) -> Self {
        PlayerConfig::AI(config)
    }

    pub fn is_human(&self) -> bool {
        matches!(self, PlayerConfig::Human)
    }

    /// Build the player; `name` labels human players only
    pub fn create_player(&self, name: &str) -> Box<dyn Player> {
        match self {
            PlayerConfig::Human => Box::new(HumanPlayer::new(name.to_string())),
            PlayerConfig::AI(config) => config.create_player(),
        }
    }

    pub fn display_string(&self) -> String {
        match self {
            PlayerConfig::Human => "Human".to_string(),
            PlayerConfig::AI(config) => config.display_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans
    PvP,
    /// One human, one AI
    PvAI,
    /// Two AIs
    AIvAI,
}

/// Complete configuration of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub mode: GameMode,
    /// Dots per side of the square grid
    pub dots: usize,
    pub rounds: u32,
    pub player_one: PlayerConfig,
    pub player_two: PlayerConfig,
}

impl MatchConfig {
    pub fn pvp(dots: usize) -> Self {
        Self {
            mode: GameMode::PvP,
            dots,
            rounds: 1,
            player_one: PlayerConfig::Human,
            player_two: PlayerConfig::Human,
        }
    }

    /// One human against `ai`; `human_side` picks which side the human plays
    pub fn pvai(dots: usize, human_side: Side, ai: AIConfig) -> Self {
        let (player_one, player_two) = match human_side {
            Side::One => (PlayerConfig::Human, PlayerConfig::AI(ai)),
            Side::Two => (PlayerConfig::AI(ai), PlayerConfig::Human),
        };
        Self {
            mode: GameMode::PvAI,
            dots,
            rounds: 1,
            player_one,
            player_two,
        }
    }

    pub fn aivai(dots: usize, player_one: AIConfig, player_two: AIConfig) -> Self {
        Self {
            mode: GameMode::AIvAI,
            dots,
            rounds: 1,
            player_one: PlayerConfig::AI(player_one),
            player_two: PlayerConfig::AI(player_two),
        }
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// The human's side in a PvAI match, None otherwise
    pub fn human_side(&self) -> Option<Side> {
        match self.mode {
            GameMode::PvAI => {
                if self.player_one.is_human() {
                    Some(Side::One)
                } else {
                    Some(Side::Two)
                }
            }
            _ => None,
        }
    }

    pub fn player(&self, side: Side) -> &PlayerConfig {
        match side {
            Side::One => &self.player_one,
            Side::Two => &self.player_two,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::aivai(
            DEFAULT_DOTS,
            AIConfig::default(),
            AIConfig::new(AIType::Random, Difficulty::default()),
        )
    }
}
