// Depth-limited tree search
//
// One core serves both search players. Values are always taken from the
// point of view of the side to move at the root, and a node maximizes iff
// its active player is that side. Turn retention therefore needs no special
// case: after a box is completed the same side simply moves again.
//
// Against an adversarial opponent the core is alpha-beta minimax. Against a
// uniform opponent the minimizing nodes become chance nodes that average
// their children, and no pruning is done anywhere below them.

use super::evaluation::Heuristic;
use super::move_ordering::{open_box_shortcut, order_moves, MoveOrdering};
use crate::agent::player::assert_not_terminal;
use crate::game_repr::{Action, Side, State};
use rand::Rng;

/// How the side not to move at the root is assumed to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpponentModel {
    /// Picks the move worst for the root side
    Adversarial,
    /// Picks uniformly at random among its legal moves
    Uniform,
}

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub opponent: OpponentModel,
    pub heuristic: Heuristic,
    pub ordering: MoveOrdering,
    /// Claim an open box at the root without searching
    pub open_box_shortcut: bool,
}

impl SearchConfig {
    pub fn alpha_beta(max_depth: u8) -> Self {
        Self {
            max_depth,
            opponent: OpponentModel::Adversarial,
            heuristic: Heuristic::default(),
            ordering: MoveOrdering::default(),
            open_box_shortcut: true,
        }
    }

    pub fn expectimax(max_depth: u8) -> Self {
        Self {
            opponent: OpponentModel::Uniform,
            ..Self::alpha_beta(max_depth)
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_action: Action,
    /// Value of `best_action` for the root side
    pub score: f64,
    pub depth: u8,
    pub nodes_searched: u64,
    /// The open-box shortcut answered without searching
    pub shortcut: bool,
}

struct Searcher<'a, R: Rng + ?Sized> {
    config: &'a SearchConfig,
    rng: &'a mut R,
    perspective: Side,
    nodes: u64,
}

impl<'a, R: Rng + ?Sized> Searcher<'a, R> {
    /// Static value of a leaf for the root side
    fn leaf(&self, state: &State) -> f64 {
        self.perspective.perspective() * self.config.heuristic.evaluate(state)
    }

    fn value(&mut self, state: &State, depth: u8, mut alpha: f64, mut beta: f64) -> f64 {
        self.nodes += 1;

        if depth == 0 || state.is_terminal() {
            return self.leaf(state);
        }

        let moves = order_moves(state, self.config.ordering, &mut *self.rng);

        if state.active_player() == self.perspective {
            let mut best = f64::NEG_INFINITY;
            for action in moves {
                let score = self.value(&state.apply(action), depth - 1, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
            return best;
        }

        match self.config.opponent {
            OpponentModel::Adversarial => {
                let mut best = f64::INFINITY;
                for action in moves {
                    let score = self.value(&state.apply(action), depth - 1, alpha, beta);
                    best = best.min(score);
                    beta = beta.min(best);
                    if beta <= alpha {
                        break; // Alpha cutoff
                    }
                }
                best
            }
            OpponentModel::Uniform => {
                let count = moves.len() as f64;
                let mut total = 0.0;
                for action in moves {
                    total += self.value(
                        &state.apply(action),
                        depth - 1,
                        f64::NEG_INFINITY,
                        f64::INFINITY,
                    );
                }
                total / count
            }
        }
    }
}

/// Search `state` and return the best action for its active player.
///
/// # Panics
/// If `state` is terminal.
pub fn search<R: Rng + ?Sized>(state: &State, config: &SearchConfig, rng: &mut R) -> SearchResult {
    assert_not_terminal(state, "search");

    let perspective = state.active_player();
    let depth = config.max_depth.max(1);

    if config.open_box_shortcut {
        if let Some(action) = open_box_shortcut(state) {
            return SearchResult {
                best_action: action,
                score: perspective.perspective() * config.heuristic.evaluate(state),
                depth: 0,
                nodes_searched: 0,
                shortcut: true,
            };
        }
    }

    let mut searcher = Searcher {
        config,
        rng,
        perspective,
        nodes: 0,
    };

    let moves = order_moves(state, config.ordering, &mut *searcher.rng);
    let mut best_action = moves[0];
    let mut best_score = f64::NEG_INFINITY;
    let mut alpha = f64::NEG_INFINITY;

    for action in moves {
        let score = searcher.value(&state.apply(action), depth - 1, alpha, f64::INFINITY);
        if score > best_score {
            best_score = score;
            best_action = action;
        }
        alpha = alpha.max(best_score);
    }

    SearchResult {
        best_action,
        score: best_score,
        depth,
        nodes_searched: searcher.nodes,
        shortcut: false,
    }
}

/// Full-width minimax value of `state` for its active player, no pruning.
///
/// Reference for checking that alpha-beta returns the same root value.
pub fn minimax_value(state: &State, depth: u8, heuristic: Heuristic) -> f64 {
    fn walk(state: &State, depth: u8, heuristic: Heuristic, perspective: Side) -> f64 {
        if depth == 0 || state.is_terminal() {
            return perspective.perspective() * heuristic.evaluate(state);
        }
        let scores = state
            .legal_moves()
            .into_iter()
            .map(|action| walk(&state.apply(action), depth - 1, heuristic, perspective));
        if state.active_player() == perspective {
            scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            scores.fold(f64::INFINITY, f64::min)
        }
    }

    walk(state, depth, heuristic, state.active_player())
}
