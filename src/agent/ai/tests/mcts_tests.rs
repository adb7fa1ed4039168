// Tests for MCTS

use super::{play, short_chain_board};
use crate::agent::ai::MctsTree;
use crate::game_repr::{Action, Side, State};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mcts_basic_search() {
    let state = State::new(3);
    let mut tree = MctsTree::new(&state);
    let action = tree.search(100, &mut StdRng::seed_from_u64(1));
    assert!(state.is_legal(action));

    let stats = tree.get_stats();
    assert_eq!(stats.root_visits, 100);
    assert_eq!(stats.best_action, Some(action));
    assert!(stats.num_children <= state.legal_move_count());
}

#[test]
fn test_root_children_cover_all_moves() {
    let state = State::new(3);
    let mut tree = MctsTree::new(&state);
    tree.search(200, &mut StdRng::seed_from_u64(2));

    let visits = tree.root_visits();
    assert_eq!(visits.len(), 12);
    assert!(visits.iter().all(|&(_, n)| n >= 1));
    let total: u32 = visits.iter().map(|&(_, n)| n).sum();
    assert_eq!(total, 200);
}

#[test]
fn test_single_legal_move_is_returned_immediately() {
    let state = play(
        &State::new(2),
        &[Action::row(0, 0), Action::row(0, 1), Action::col(0, 0)],
    );
    assert_eq!(state.legal_move_count(), 1);

    for simulations in [0, 1, 1000] {
        let mut tree = MctsTree::new(&state);
        let action = tree.search(simulations, &mut StdRng::seed_from_u64(simulations as u64));
        assert_eq!(action, Action::col(1, 0));
        assert_eq!(tree.get_stats().root_visits, 0);
    }
}

#[test]
fn test_zero_simulations_still_decides() {
    let state = State::new(3);
    let mut tree = MctsTree::new(&state);
    let action = tree.search(0, &mut StdRng::seed_from_u64(0));
    assert!(state.is_legal(action));
    assert_eq!(tree.get_stats().root_visits, 1);
}

#[test]
fn test_mcts_is_reproducible() {
    let state = short_chain_board();
    let a = MctsTree::new(&state).search(300, &mut StdRng::seed_from_u64(21));
    let b = MctsTree::new(&state).search(300, &mut StdRng::seed_from_u64(21));
    assert_eq!(a, b);
}

#[test]
fn test_mcts_mid_game_after_captures() {
    // Side::Two completes both top boxes and keeps the move
    let state = play(
        &State::new(3),
        &[
            Action::row(0, 0),
            Action::row(1, 0),
            Action::col(0, 0),
            Action::col(2, 0),
            Action::row(0, 1),
            Action::col(1, 0),
            Action::row(1, 1),
        ],
    );
    assert_eq!(state.score(Side::Two), 2);
    assert_eq!(state.active_player(), Side::Two);

    let mut tree = MctsTree::new(&state);
    let action = tree.search(300, &mut StdRng::seed_from_u64(4));
    assert!(state.is_legal(action));
    assert_eq!(tree.get_stats().root_visits, 300);
}

/// 3x3 dots, Side::Two to move, Side::One owns box (0, 1). The other three
/// boxes form a chain starting at the open box (0, 0): only col(1, 0) wins,
/// and it needs two more moves by the same side to cash the chain.
fn chain_endgame() -> State {
    State::from_grids(
        3,
        &[vec![-3, 2], vec![4, -2]],
        &[vec![true, true], vec![true, false], vec![true, true]],
        &[vec![true, false, true], vec![true, true, false]],
        Side::Two,
    )
    .unwrap()
}

#[test]
fn test_mcts_cashes_chain_through_retained_turns() {
    let state = chain_endgame();
    assert_eq!(state.legal_move_count(), 3);
    assert_eq!(state.score(Side::One), 1);

    for seed in 0..5 {
        let mut tree = MctsTree::new(&state);
        let action = tree.search(500, &mut StdRng::seed_from_u64(seed));
        assert_eq!(action, Action::col(1, 0), "seed {}", seed);

        let stats = tree.get_stats();
        assert!(stats.best_action_mean > 0.5, "seed {}: {:?}", seed, stats);
        for (other, visits) in tree.root_visits() {
            if other != action {
                assert!(visits < stats.best_action_visits / 4, "seed {}", seed);
            }
        }
    }
}

#[test]
#[should_panic(expected = "terminal state")]
fn test_mcts_on_terminal_state_panics() {
    let state = play(
        &State::new(2),
        &[
            Action::row(0, 0),
            Action::row(0, 1),
            Action::col(0, 0),
            Action::col(1, 0),
        ],
    );
    MctsTree::new(&state).search(10, &mut StdRng::seed_from_u64(0));
}
