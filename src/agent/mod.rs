pub mod player;
pub use player::*;

pub mod human_player;
pub use human_player::*;

pub mod mcts_player;
pub use mcts_player::*;

pub mod qlearning_player;
pub use qlearning_player::*;

pub mod random_player;
pub use random_player::*;

pub mod ai;
pub use ai::{AIConfig, AIType, Difficulty, SearchPlayer, SearchResult};
