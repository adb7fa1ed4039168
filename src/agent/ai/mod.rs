// AI agents for Dots-and-Boxes
//
// Key pieces:
// - Position evaluation from Side::One's point of view
// - Alpha-beta and expectimax search sharing one core
// - Move ordering and the open-box shortcut
// - Monte Carlo tree search with random playouts
// - Registry of agent types for drivers

mod ai_type;
mod evaluation;
mod mcts;
mod move_ordering;
mod search;
mod search_player;

#[cfg(test)]
mod tests;

pub use ai_type::{AIConfig, AIType};
pub use evaluation::{double_cross_bonus, evaluate, exposure_penalty, material, Heuristic};
pub use mcts::{MctsStats, MctsTree, EXPLORATION_CONSTANT};
pub use move_ordering::{open_box_shortcut, order_moves, MoveOrdering};
pub use search::{minimax_value, search, OpponentModel, SearchConfig, SearchResult};
pub use search_player::{Difficulty, SearchPlayer};
