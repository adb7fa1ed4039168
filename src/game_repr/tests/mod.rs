use super::*;

mod transitions;

// ==================== HELPER FUNCTIONS ====================

/// Apply a sequence of actions, panicking on the first illegal one
pub fn play(state: &State, actions: &[Action]) -> State {
    actions
        .iter()
        .fold(state.clone(), |current, &action| current.apply(action))
}

/// 4x4 dots with the top row of boxes forming an open box at (0, 0)
/// followed by two magnitude-2 boxes linked through claimed edges
pub fn short_chain_board() -> State {
    play(
        &State::new(4),
        &[
            Action::col(1, 0),
            Action::col(2, 0),
            Action::col(3, 0),
            Action::row(0, 0),
            Action::col(0, 0),
        ],
    )
}

/// 3x3 dots where all four boxes have three edges and the four inner
/// edges close them into a cycle
pub fn four_loop_board() -> State {
    play(
        &State::new(3),
        &[
            Action::row(0, 1),
            Action::row(1, 1),
            Action::col(1, 0),
            Action::col(1, 1),
            Action::row(0, 0),
            Action::row(1, 0),
            Action::row(0, 2),
            Action::row(1, 2),
        ],
    )
}
