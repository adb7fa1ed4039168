use super::*;

// ==================== CONSTRUCTION ====================

#[test]
fn test_fresh_board_dimensions() {
    let state = State::new(4);
    assert_eq!(state.boxes_per_side(), 3);
    assert_eq!(state.total_edges(), 24);
    assert_eq!(state.legal_moves().len(), 24);
    assert_eq!(state.active_player(), Side::One);
    assert!(!state.is_terminal());
}

#[test]
fn test_with_first_player() {
    let state = State::with_first_player(3, Side::Two);
    assert_eq!(state.active_player(), Side::Two);
}

#[test]
fn test_too_few_dots_is_rejected() {
    assert_eq!(State::try_new(1), Err(BoardError::TooFewDots(1)));
}

#[test]
#[should_panic(expected = "malformed board geometry")]
fn test_too_few_dots_panics() {
    State::new(0);
}

#[test]
fn test_from_grids_rejects_mismatched_rows() {
    let boxes = vec![vec![0i8; 2]; 2];
    let rows = vec![vec![false; 2]; 2]; // should be 3 rows
    let cols = vec![vec![false; 3]; 2];
    let err = State::from_grids(3, &boxes, &rows, &cols, Side::One).unwrap_err();
    assert!(matches!(err, BoardError::Geometry { grid: "row", .. }));
}

#[test]
fn test_from_grids_rejects_ragged_cols() {
    let boxes = vec![vec![0i8; 2]; 2];
    let rows = vec![vec![false; 2]; 3];
    let cols = vec![vec![false; 3], vec![false; 2]];
    let err = State::from_grids(3, &boxes, &rows, &cols, Side::One).unwrap_err();
    assert_eq!(
        err,
        BoardError::Geometry {
            grid: "col",
            expected_rows: 2,
            expected_cols: 3,
            found_rows: 2,
            found_cols: 2,
        }
    );
}

#[test]
fn test_from_grids_rejects_inconsistent_counter() {
    let boxes = vec![vec![2i8]];
    let rows = vec![vec![true], vec![false]];
    let cols = vec![vec![false, false]];
    let err = State::from_grids(2, &boxes, &rows, &cols, Side::One).unwrap_err();
    assert_eq!(
        err,
        BoardError::CounterMismatch {
            x: 0,
            y: 0,
            value: 2,
            claimed: 1
        }
    );
}

#[test]
fn test_from_grids_matches_played_state() {
    let played = play(&State::new(2), &[Action::row(0, 0), Action::col(1, 0)]);
    let built = State::from_grids(
        2,
        &[vec![-2]],
        &[vec![true], vec![false]],
        &[vec![false, true]],
        Side::One,
    )
    .unwrap();
    assert_eq!(played, built);
}

// ==================== TRANSITIONS ====================

#[test]
fn test_single_box_game() {
    let start = State::new(2);
    let state = play(&start, &[Action::row(0, 0), Action::row(0, 1), Action::col(0, 0)]);

    assert_eq!(state.box_magnitude(0, 0), 3);
    assert!(!state.is_terminal());

    let before = state.active_player();
    let last = state.apply(Action::col(1, 0));
    assert_eq!(last.box_magnitude(0, 0), 4);
    assert_eq!(last.active_player(), before);
    assert!(last.is_terminal());
    assert_eq!(last.box_owner(0, 0), Some(before));
}

#[test]
fn test_turn_passes_without_completion() {
    let state = State::new(3);
    let next = state.apply(Action::row(0, 0));
    assert_eq!(next.active_player(), Side::Two);
    assert_eq!(next.box_value(0, 0), 1);
}

#[test]
fn test_counter_carries_mover_sign() {
    let state = State::new(3).apply(Action::row(0, 0));
    assert_eq!(state.box_value(0, 0), 1);
    let state = state.apply(Action::col(0, 0));
    assert_eq!(state.box_value(0, 0), -2);
}

#[test]
fn test_interior_edge_touches_two_boxes() {
    let state = State::new(3).apply(Action::col(1, 0));
    assert_eq!(state.box_magnitude(0, 0), 1);
    assert_eq!(state.box_magnitude(1, 0), 1);
    assert_eq!(state.box_magnitude(0, 1), 0);
}

#[test]
fn test_rim_edge_touches_one_box() {
    let state = State::new(3).apply(Action::row(1, 2));
    assert_eq!(state.box_magnitude(1, 1), 1);
    assert_eq!(state.box_magnitude(1, 0), 0);
}

#[test]
fn test_double_completion_keeps_turn() {
    // (0,0) and (1,0) each have three edges except the shared one
    let state = play(
        &State::new(3),
        &[
            Action::row(0, 0),
            Action::row(0, 1),
            Action::col(0, 0),
            Action::row(1, 0),
            Action::row(1, 1),
            Action::col(2, 0),
        ],
    );
    assert_eq!(state.box_magnitude(0, 0), 3);
    assert_eq!(state.box_magnitude(1, 0), 3);

    let mover = state.active_player();
    let next = state.apply(Action::col(1, 0));
    assert_eq!(next.active_player(), mover);
    assert_eq!(next.score(mover), 2);
    assert_eq!(next.score(mover.opposite()), 0);
}

#[test]
fn test_apply_leaves_source_untouched() {
    let state = State::new(3).apply(Action::row(0, 0));
    let snapshot = state.clone();
    let _ = state.apply(Action::col(0, 0));
    assert_eq!(state, snapshot);
    assert!(state.is_legal(Action::col(0, 0)));
}

#[test]
#[should_panic(expected = "illegal move")]
fn test_apply_on_claimed_edge_panics() {
    let state = State::new(3).apply(Action::row(0, 0));
    state.apply(Action::row(0, 0));
}

#[test]
#[should_panic(expected = "illegal move")]
fn test_apply_out_of_bounds_panics() {
    State::new(3).apply(Action::row(2, 0));
}

#[test]
fn test_try_apply_reports_taken_edge() {
    let state = State::new(3).apply(Action::col(2, 1));
    assert_eq!(
        state.try_apply(Action::col(2, 1)),
        Err(BoardError::EdgeTaken {
            action: Action::col(2, 1)
        })
    );
}

#[test]
fn test_try_apply_reports_out_of_bounds() {
    let err = State::new(3).try_apply(Action::col(0, 2)).unwrap_err();
    assert_eq!(
        err,
        BoardError::OutOfBounds {
            action: Action::col(0, 2),
            dots: 3
        }
    );
}

#[test]
fn test_try_apply_rejects_coordinates_past_u8() {
    let state = State::new(3);
    let err = state.try_apply(Action::row(256, 0)).unwrap_err();
    assert_eq!(
        err,
        BoardError::OutOfBounds {
            action: Action::row(256, 0),
            dots: 3
        }
    );
    assert!(!state.is_legal(Action::row(256, 0)));
}

#[test]
#[should_panic(expected = "illegal move")]
fn test_apply_coordinates_past_u8_panics() {
    State::new(3).apply(Action::col(0, 258));
}

#[test]
fn test_large_board_moves_are_distinct() {
    let moves = State::new(260).legal_moves();
    assert_eq!(moves.len(), 2 * 260 * 259);
    let distinct: std::collections::HashSet<Action> = moves.iter().copied().collect();
    assert_eq!(distinct.len(), moves.len());
    assert!(moves.contains(&Action::row(258, 259)));
}

// ==================== QUERIES ====================

#[test]
fn test_legal_moves_order_rows_then_cols() {
    let moves = State::new(3).legal_moves();
    let expected = vec![
        Action::row(0, 0),
        Action::row(1, 0),
        Action::row(0, 1),
        Action::row(1, 1),
        Action::row(0, 2),
        Action::row(1, 2),
        Action::col(0, 0),
        Action::col(1, 0),
        Action::col(2, 0),
        Action::col(0, 1),
        Action::col(1, 1),
        Action::col(2, 1),
    ];
    assert_eq!(moves.to_vec(), expected);
}

#[test]
fn test_legal_moves_skip_claimed() {
    let state = State::new(3).apply(Action::row(1, 1));
    let moves = state.legal_moves();
    assert_eq!(moves.len(), 11);
    assert!(!moves.contains(&Action::row(1, 1)));
    assert_eq!(state.legal_move_count(), 11);
}

#[test]
fn test_unclaimed_edges_order() {
    let state = State::new(3).apply(Action::row(0, 0));
    let edges = state.unclaimed_edges(0, 0);
    assert_eq!(
        edges.to_vec(),
        vec![Action::row(0, 1), Action::col(0, 0), Action::col(1, 0)]
    );
}

#[test]
fn test_open_box_edge() {
    let state = play(&State::new(3), &[Action::row(1, 0), Action::row(1, 1)]);
    assert_eq!(state.open_box_edge(), None);

    let state = state.apply(Action::col(2, 0));
    assert_eq!(state.open_box_count(), 1);
    assert_eq!(state.open_box_edge(), Some(Action::col(1, 0)));
    assert!(state.completes_box(Action::col(1, 0)));
    assert!(!state.completes_box(Action::col(0, 0)));
}

#[test]
fn test_winner_and_scores() {
    let start = State::new(2);
    let end = play(
        &start,
        &[
            Action::row(0, 0),
            Action::row(0, 1),
            Action::col(0, 0),
            Action::col(1, 0),
        ],
    );
    // fourth edge is played by Side::Two
    assert_eq!(end.score(Side::Two), 1);
    assert_eq!(end.score(Side::One), 0);
    assert_eq!(end.winner(), Some(Side::Two));
    assert_eq!(State::new(3).winner(), None);
}

#[test]
fn test_display_shows_grid() {
    let state = play(&State::new(2), &[Action::row(0, 0), Action::col(0, 0)]);
    let text = state.to_string();
    assert!(text.starts_with("+---+\n|"));
    assert!(text.ends_with("Player 1 to move"));
}
