// Monte Carlo Tree Search with UCB1 selection and uniform random playouts
//
// Rewards are +1 / -1 / 0 for a Side::One win / loss / tie. Each node keeps
// its total from the point of view of the side that moved into it, so a
// parent always maximizes its children's mean. Because a completed box keeps
// the turn, the sign flips between two levels only when the mover changes.

use crate::agent::player::assert_not_terminal;
use crate::game_repr::{Action, MoveList, Side, State};
use rand::Rng;

/// UCB1 exploration constant
pub const EXPLORATION_CONSTANT: f64 = std::f64::consts::SQRT_2;

/// MCTS node holding the state it represents
struct MctsNode {
    state: State,
    /// Action that led here (None for root)
    action: Option<Action>,
    /// Side that made `action`, and whose point of view `total_reward` uses
    mover: Side,
    visits: u32,
    total_reward: f64,
    children: Vec<MctsNode>,
    /// Legal actions not yet expanded into children
    untried: MoveList,
}

impl MctsNode {
    fn new(state: State, action: Option<Action>, mover: Side) -> Self {
        let untried = state.legal_moves();
        Self {
            state,
            action,
            mover,
            visits: 0,
            total_reward: 0.0,
            children: Vec::new(),
            untried,
        }
    }

    fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }

    /// UCB1 score; unvisited children come first
    fn ucb_score(&self, parent_visits: u32) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let exploit = self.total_reward / self.visits as f64;
        let explore =
            EXPLORATION_CONSTANT * ((parent_visits as f64).ln() / self.visits as f64).sqrt();
        exploit + explore
    }

    fn select_best_child(&self) -> Option<usize> {
        let mut best = None;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, child) in self.children.iter().enumerate() {
            let score = child.ucb_score(self.visits);
            if score > best_score {
                best_score = score;
                best = Some(idx);
            }
        }
        best
    }

    /// Child with the most visits; the first one wins ties
    fn most_visited_child(&self) -> Option<usize> {
        let mut best = None;
        let mut best_visits = 0;
        for (idx, child) in self.children.iter().enumerate() {
            if best.is_none() || child.visits > best_visits {
                best_visits = child.visits;
                best = Some(idx);
            }
        }
        best
    }
}

/// Terminal outcome from Side::One's point of view
fn outcome(state: &State) -> f64 {
    match state.winner() {
        Some(side) => side.perspective(),
        None => 0.0,
    }
}

/// MCTS tree for a single decision
pub struct MctsTree {
    root: MctsNode,
}

impl MctsTree {
    pub fn new(state: &State) -> Self {
        // The root's own statistics are never compared, any mover will do
        let mover = state.active_player().opposite();
        Self {
            root: MctsNode::new(state.clone(), None, mover),
        }
    }

    /// Run `simulations` iterations and return the most visited root action.
    ///
    /// A position with a single legal move returns it without simulating.
    /// At least one iteration always runs otherwise.
    ///
    /// # Panics
    /// If the root state is terminal.
    pub fn search<R: Rng + ?Sized>(&mut self, simulations: u32, rng: &mut R) -> Action {
        assert_not_terminal(&self.root.state, "MCTS");

        if self.root.children.is_empty() && self.root.untried.len() == 1 {
            return self.root.untried[0];
        }

        for _ in 0..simulations.max(1) {
            self.iteration(rng);
        }

        let best = self
            .root
            .most_visited_child()
            .map(|idx| &self.root.children[idx]);
        match best.and_then(|child| child.action) {
            Some(action) => action,
            // Unreachable after one iteration on a non-terminal root
            None => self.root.state.legal_moves()[0],
        }
    }

    /// Single iteration: selection, expansion, rollout, backpropagation
    fn iteration<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut path = self.select();

        let leaf = self.node_at_path_mut(&path);
        let start = if leaf.state.is_terminal() {
            leaf.state.clone()
        } else {
            let idx = Self::expand(leaf, rng);
            path.push(idx);
            leaf.children[idx].state.clone()
        };

        let result = Self::rollout(start, rng);
        self.backpropagate(&path, result);
    }

    /// Descend by UCB1 while the node is non-terminal and fully expanded
    fn select(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut node = &self.root;

        while !node.state.is_terminal() && node.is_fully_expanded() {
            match node.select_best_child() {
                Some(idx) => {
                    path.push(idx);
                    node = &node.children[idx];
                }
                None => break,
            }
        }

        path
    }

    /// Add a child for one untried action chosen at random
    fn expand<R: Rng + ?Sized>(node: &mut MctsNode, rng: &mut R) -> usize {
        let pick = rng.gen_range(0..node.untried.len());
        let action = node.untried.swap_remove(pick);
        let mover = node.state.active_player();
        let child = MctsNode::new(node.state.apply(action), Some(action), mover);
        node.children.push(child);
        node.children.len() - 1
    }

    /// Uniform random playout to the end of the game
    fn rollout<R: Rng + ?Sized>(mut state: State, rng: &mut R) -> f64 {
        let mut moves = MoveList::new();
        while !state.is_terminal() {
            state.legal_moves_into(&mut moves);
            let action = moves[rng.gen_range(0..moves.len())];
            state = state.apply(action);
        }
        outcome(&state)
    }

    /// Credit every node on the path with the result seen by its mover
    fn backpropagate(&mut self, path: &[usize], result: f64) {
        let mut node = &mut self.root;
        node.visits += 1;
        node.total_reward += result * node.mover.perspective();

        for &idx in path {
            node = &mut node.children[idx];
            node.visits += 1;
            node.total_reward += result * node.mover.perspective();
        }
    }

    fn node_at_path_mut(&mut self, path: &[usize]) -> &mut MctsNode {
        let mut node = &mut self.root;
        for &idx in path {
            node = &mut node.children[idx];
        }
        node
    }

    pub fn get_stats(&self) -> MctsStats {
        let best = self
            .root
            .most_visited_child()
            .map(|idx| &self.root.children[idx]);
        MctsStats {
            root_visits: self.root.visits,
            num_children: self.root.children.len(),
            best_action: best.and_then(|child| child.action),
            best_action_visits: best.map_or(0, |child| child.visits),
            best_action_mean: best.map_or(0.0, MctsNode::mean_reward),
        }
    }

    /// Visit count of each expanded root action
    pub fn root_visits(&self) -> Vec<(Action, u32)> {
        self.root
            .children
            .iter()
            .filter_map(|child| child.action.map(|action| (action, child.visits)))
            .collect()
    }
}

/// MCTS statistics for debugging
#[derive(Debug, Clone, PartialEq)]
pub struct MctsStats {
    pub root_visits: u32,
    pub num_children: usize,
    pub best_action: Option<Action>,
    pub best_action_visits: u32,
    /// Mean reward of the best action for the side to move at the root
    pub best_action_mean: f64,
}
