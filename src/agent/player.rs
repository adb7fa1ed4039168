//! Player trait and associated types for Dots-and-Boxes agents.
//!
//! This module provides the core abstraction for anything that can choose an
//! edge to claim: search agents, random and learned policies, and a proxy for
//! a human sitting behind an external UI.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Each
//! implementation has its own constructor taking whatever it needs (search
//! depth, simulation count, RNG seed). Board size is never global; it comes
//! from the [`State`] handed to [`Player::decide`].
//!
//! # Synchronous Design
//!
//! `decide()` is blocking. Search agents run to completion inside the call;
//! the driver simply waits for the result. The driver never calls `decide()`
//! on an interactive player until that player has input queued.

use crate::game_repr::{Action, Side, State};

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    PlayerOneWins,
    PlayerTwoWins,
    Tie,
}

impl GameResult {
    pub fn from_winner(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::One) => GameResult::PlayerOneWins,
            Some(Side::Two) => GameResult::PlayerTwoWins,
            None => GameResult::Tie,
        }
    }

    /// Result of a terminal state
    pub fn of(state: &State) -> Self {
        Self::from_winner(state.winner())
    }
}

/// Trait for entities that can pick an edge to claim.
///
/// # Method Behavior
///
/// ## `decide()`
/// - Receives a read-only snapshot; implementations never mutate it
/// - Returns a legal action for `state.active_player()`
/// - Calling it on a terminal state is a contract violation and panics
///
/// ## `is_interactive()`
/// - Default: `false`
/// - `true` only for human-backed players; the driver then waits for
///   external input instead of calling `decide()` right away
///
/// ## `game_ended()`
/// - Default: does nothing
/// - Learned policies override it to decay exploration
pub trait Player {
    fn decide(&mut self, state: &State) -> Action;

    /// Display label; has no effect on play
    fn name(&self) -> &str {
        "Player"
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }
}

/// Panic unless `state` still has a move to make
pub(crate) fn assert_not_terminal(state: &State, who: &str) {
    if state.is_terminal() {
        panic!("{} asked to decide on a terminal state\n{}", who, state);
    }
}
