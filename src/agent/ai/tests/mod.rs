use crate::game_repr::{Action, Side, State};

mod mcts_tests;

// ==================== HELPER FUNCTIONS ====================

/// Apply a sequence of actions, panicking on the first illegal one
pub fn play(state: &State, actions: &[Action]) -> State {
    actions
        .iter()
        .fold(state.clone(), |current, &action| current.apply(action))
}

/// 3x3 dots: box (0, 0) completed by Side::One, two boxes with one edge,
/// one untouched box, Side::One to move again
pub fn one_box_board() -> State {
    State::from_grids(
        3,
        &[vec![4, 1], vec![1, 0]],
        &[vec![true, false], vec![true, false], vec![false, false]],
        &[vec![true, true, false], vec![false, false, false]],
        Side::One,
    )
    .unwrap()
}

/// 4x4 dots with an open box at (0, 0) leading into two linked
/// magnitude-2 boxes; Side::Two to move
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

/// Play out a game with the given policy, returning the final state
pub fn play_out(mut state: State, mut policy: impl FnMut(&State) -> Action) -> State {
    while !state.is_terminal() {
        let action = policy(&state);
        state = state.apply(action);
    }
    state
}
