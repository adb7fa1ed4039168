// Move ordering for the tree searches
//
// Ordering never changes the value a full search returns, only how much of
// the tree alpha-beta gets to cut and which of several equal moves wins.

use crate::game_repr::{Action, MoveList, State};
use rand::seq::SliceRandom;
use rand::Rng;

/// How legal moves are ordered before a node is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveOrdering {
    /// Rows then columns, row-major
    Natural,
    /// Uniformly shuffled with the player's RNG
    #[default]
    Shuffled,
    /// Box-completing moves first, moves that hand over a box last
    OpenBoxesFirst,
}

impl MoveOrdering {
    pub fn all() -> &'static [MoveOrdering] {
        &[MoveOrdering::Natural, MoveOrdering::Shuffled, MoveOrdering::OpenBoxesFirst]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoveOrdering::Natural => "Natural",
            MoveOrdering::Shuffled => "Shuffled",
            MoveOrdering::OpenBoxesFirst => "Open boxes first",
        }
    }
}

/// Ordering score of a single move (higher = searched earlier)
/// - 2: completes at least one box
/// - 1: quiet move
/// - 0: leaves a box with one free edge for the opponent
fn score_move(state: &State, action: Action) -> u8 {
    let adjacent = state.adjacent_boxes(action);
    if adjacent.iter().any(|&(x, y)| state.box_magnitude(x, y) == 3) {
        return 2;
    }
    if adjacent.iter().any(|&(x, y)| state.box_magnitude(x, y) == 2) {
        return 0;
    }
    1
}

/// Legal moves of `state` in the requested order.
///
/// `Natural` and `OpenBoxesFirst` are deterministic; `OpenBoxesFirst` keeps
/// natural order among moves with equal score.
pub fn order_moves<R: Rng + ?Sized>(
    state: &State,
    ordering: MoveOrdering,
    rng: &mut R,
) -> MoveList {
    let mut moves = state.legal_moves();
    match ordering {
        MoveOrdering::Natural => {}
        MoveOrdering::Shuffled => moves.shuffle(rng),
        MoveOrdering::OpenBoxesFirst => {
            moves.sort_by_key(|&action| std::cmp::Reverse(score_move(state, action)))
        }
    }
    moves
}

/// Greedy shortcut: a remaining edge of an open box, if there is one.
///
/// Claiming it scores a box and keeps the turn, so search players take it
/// without looking any further.
pub fn open_box_shortcut(state: &State) -> Option<Action> {
    state.open_box_edge()
}
