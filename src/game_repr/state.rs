use super::{Action, BoardError, EdgeKind, Side};
use smallvec::SmallVec;
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION AND TRANSITIONS
 */

/// Move list type shared by every search
pub type MoveList = SmallVec<[Action; 64]>;

/// Board state for an `n x n` dot grid.
///
/// Grids are stored flat, row-major:
/// - `boxes[y * (n - 1) + x]`: signed claimed-edge counter in `[-4, 4]`
/// - `row_edges[y * (n - 1) + x]`: `n` rows of `n - 1` horizontal edges
/// - `col_edges[y * n + x]`: `n - 1` rows of `n` vertical edges
///
/// Every transition returns a fresh copy, so sibling search branches never
/// alias each other.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct State {
    dots: usize,
    boxes: Vec<i8>,
    row_edges: Vec<bool>,
    col_edges: Vec<bool>,
    active: Side,
    claimed: usize,
}

impl State {
    /// Fresh board with `Side::One` to move.
    ///
    /// Panics if `dots < 2`; use [`State::try_new`] to validate external input.
    pub fn new(dots: usize) -> State {
        Self::with_first_player(dots, Side::One)
    }

    pub fn with_first_player(dots: usize, first: Side) -> State {
        match Self::try_new(dots) {
            Ok(mut state) => {
                state.active = first;
                state
            }
            Err(err) => panic!("malformed board geometry: {}", err),
        }
    }

    pub fn try_new(dots: usize) -> Result<State, BoardError> {
        if dots < 2 {
            return Err(BoardError::TooFewDots(dots));
        }
        let cells = dots - 1;
        Ok(Self {
            dots,
            boxes: vec![0; cells * cells],
            row_edges: vec![false; dots * cells],
            col_edges: vec![false; cells * dots],
            active: Side::One,
            claimed: 0,
        })
    }

    /// Build a state from explicit grids, indexed `[y][x]`.
    ///
    /// Dimensions must match `dots` and every box counter's magnitude must
    /// equal the number of its claimed edges.
    pub fn from_grids(
        dots: usize,
        boxes: &[Vec<i8>],
        row_edges: &[Vec<bool>],
        col_edges: &[Vec<bool>],
        active: Side,
    ) -> Result<State, BoardError> {
        let mut state = Self::try_new(dots)?;
        let cells = dots - 1;

        check_dims("box", boxes, cells, cells)?;
        check_dims("row", row_edges, dots, cells)?;
        check_dims("col", col_edges, cells, dots)?;

        state.boxes = boxes.iter().flatten().copied().collect();
        state.row_edges = row_edges.iter().flatten().copied().collect();
        state.col_edges = col_edges.iter().flatten().copied().collect();
        state.active = active;
        state.claimed = state
            .row_edges
            .iter()
            .chain(state.col_edges.iter())
            .filter(|&&taken| taken)
            .count();

        for y in 0..cells {
            for x in 0..cells {
                let value = state.box_value(x, y);
                let claimed = 4 - state.unclaimed_edges(x, y).len();
                if value.unsigned_abs() as usize != claimed {
                    return Err(BoardError::CounterMismatch { x, y, value, claimed });
                }
            }
        }

        Ok(state)
    }

    #[inline]
    pub fn dots(&self) -> usize {
        self.dots
    }

    /// Number of boxes along one side of the board
    #[inline]
    pub fn boxes_per_side(&self) -> usize {
        self.dots - 1
    }

    #[inline]
    pub fn active_player(&self) -> Side {
        self.active
    }

    #[inline]
    pub fn total_edges(&self) -> usize {
        self.row_edges.len() + self.col_edges.len()
    }

    #[inline]
    pub fn claimed_edges(&self) -> usize {
        self.claimed
    }

    #[inline]
    pub fn box_value(&self, x: usize, y: usize) -> i8 {
        self.boxes[y * (self.dots - 1) + x]
    }

    /// Number of claimed edges around box `(x, y)`
    #[inline]
    pub fn box_magnitude(&self, x: usize, y: usize) -> u8 {
        self.box_value(x, y).unsigned_abs()
    }

    pub fn box_owner(&self, x: usize, y: usize) -> Option<Side> {
        match self.box_value(x, y) {
            4 => Some(Side::One),
            -4 => Some(Side::Two),
            _ => None,
        }
    }

    #[inline]
    pub fn row_edge(&self, x: usize, y: usize) -> bool {
        self.row_edges[y * (self.dots - 1) + x]
    }

    #[inline]
    pub fn col_edge(&self, x: usize, y: usize) -> bool {
        self.col_edges[y * self.dots + x]
    }

    pub fn in_bounds(&self, action: Action) -> bool {
        let (x, y) = action.position();
        match action.kind() {
            EdgeKind::Row => y < self.dots && x < self.dots - 1,
            EdgeKind::Col => y < self.dots - 1 && x < self.dots,
        }
    }

    /// Occupancy query. The action must be in bounds.
    pub fn is_edge_taken(&self, action: Action) -> bool {
        let (x, y) = action.position();
        match action.kind() {
            EdgeKind::Row => self.row_edge(x, y),
            EdgeKind::Col => self.col_edge(x, y),
        }
    }

    pub fn is_legal(&self, action: Action) -> bool {
        self.in_bounds(action) && !self.is_edge_taken(action)
    }

    pub fn is_terminal(&self) -> bool {
        self.claimed == self.total_edges()
    }

    /// Boxes completed by `side`
    pub fn score(&self, side: Side) -> usize {
        let owned = 4 * side.sign();
        self.boxes.iter().filter(|&&v| v == owned).count()
    }

    /// Side with more boxes; `None` on a tie
    pub fn winner(&self) -> Option<Side> {
        let one = self.score(Side::One);
        let two = self.score(Side::Two);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Successor state after `action`.
    ///
    /// Panics if the edge is out of bounds or already claimed.
    pub fn apply(&self, action: Action) -> State {
        match self.try_apply(action) {
            Ok(next) => next,
            Err(err) => panic!("illegal move: {}\n{}", err, self),
        }
    }

    /// Checked variant of [`State::apply`]
    pub fn try_apply(&self, action: Action) -> Result<State, BoardError> {
        if !self.in_bounds(action) {
            return Err(BoardError::OutOfBounds {
                action,
                dots: self.dots,
            });
        }
        if self.is_edge_taken(action) {
            return Err(BoardError::EdgeTaken { action });
        }

        let mut next = self.clone();
        let completed = next.claim(action);
        if !completed {
            next.active = self.active.opposite();
        }
        Ok(next)
    }

    /// Mark the edge and bump adjacent counters. Returns true when a box was
    /// completed, in which case the mover keeps the turn.
    fn claim(&mut self, action: Action) -> bool {
        let (x, y) = action.position();
        let cells = self.dots - 1;
        let mut completed = false;

        match action.kind() {
            EdgeKind::Row => {
                self.row_edges[y * cells + x] = true;
                if y < cells {
                    completed |= self.bump_box(x, y);
                }
                if y >= 1 {
                    completed |= self.bump_box(x, y - 1);
                }
            }
            EdgeKind::Col => {
                self.col_edges[y * self.dots + x] = true;
                if x < cells {
                    completed |= self.bump_box(x, y);
                }
                if x >= 1 {
                    completed |= self.bump_box(x - 1, y);
                }
            }
        }

        self.claimed += 1;
        completed
    }

    fn bump_box(&mut self, x: usize, y: usize) -> bool {
        let idx = y * (self.dots - 1) + x;
        let magnitude = self.boxes[idx].unsigned_abs() as i8 + 1;
        debug_assert!(magnitude <= 4, "box ({}, {}) over-claimed", x, y);
        self.boxes[idx] = magnitude * self.active.sign();
        magnitude == 4
    }

    /// Every unclaimed row edge, then every unclaimed col edge, row-major.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(&mut moves);
        moves
    }

    pub fn legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        let cells = self.dots - 1;
        for y in 0..self.dots {
            for x in 0..cells {
                if !self.row_edge(x, y) {
                    moves.push(Action::row(x, y));
                }
            }
        }
        for y in 0..cells {
            for x in 0..self.dots {
                if !self.col_edge(x, y) {
                    moves.push(Action::col(x, y));
                }
            }
        }
    }

    #[inline]
    pub fn legal_move_count(&self) -> usize {
        self.total_edges() - self.claimed
    }

    /// The four edges surrounding box `(x, y)`: top, bottom, left, right
    pub fn box_edges(x: usize, y: usize) -> [Action; 4] {
        [
            Action::row(x, y),
            Action::row(x, y + 1),
            Action::col(x, y),
            Action::col(x + 1, y),
        ]
    }

    /// Remaining edges of box `(x, y)`, in top, bottom, left, right order
    pub fn unclaimed_edges(&self, x: usize, y: usize) -> SmallVec<[Action; 4]> {
        Self::box_edges(x, y)
            .into_iter()
            .filter(|&edge| !self.is_edge_taken(edge))
            .collect()
    }

    /// Whether `action` would complete at least one box
    pub fn completes_box(&self, action: Action) -> bool {
        self.adjacent_boxes(action)
            .into_iter()
            .any(|(x, y)| self.box_magnitude(x, y) == 3)
    }

    /// Boxes bordering an edge: one on the rim, two inside
    pub fn adjacent_boxes(&self, action: Action) -> SmallVec<[(usize, usize); 2]> {
        let (x, y) = action.position();
        let cells = self.dots - 1;
        let mut adjacent = SmallVec::new();
        match action.kind() {
            EdgeKind::Row => {
                if y < cells {
                    adjacent.push((x, y));
                }
                if y >= 1 {
                    adjacent.push((x, y - 1));
                }
            }
            EdgeKind::Col => {
                if x < cells {
                    adjacent.push((x, y));
                }
                if x >= 1 {
                    adjacent.push((x - 1, y));
                }
            }
        }
        adjacent
    }

    /// Remaining edge of the last open box in row-major order, if any
    pub fn open_box_edge(&self) -> Option<Action> {
        let cells = self.dots - 1;
        let (x, y) = (0..cells)
            .flat_map(|y| (0..cells).map(move |x| (x, y)))
            .filter(|&(x, y)| self.box_magnitude(x, y) == 3)
            .last()?;
        self.unclaimed_edges(x, y).first().copied()
    }

    /// Number of boxes with exactly three claimed edges
    pub fn open_box_count(&self) -> usize {
        self.boxes.iter().filter(|v| v.unsigned_abs() == 3).count()
    }
}

fn check_dims<T>(
    grid: &'static str,
    rows: &[Vec<T>],
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), BoardError> {
    let bad_row = rows.iter().find(|row| row.len() != expected_cols);
    if rows.len() != expected_rows || bad_row.is_some() {
        return Err(BoardError::Geometry {
            grid,
            expected_rows,
            expected_cols,
            found_rows: rows.len(),
            found_cols: bad_row.map_or(expected_cols, |row| row.len()),
        });
    }
    Ok(())
}

/// ASCII dump used in panic messages
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.dots - 1;
        for y in 0..self.dots {
            for x in 0..cells {
                let edge = if self.row_edge(x, y) { "---" } else { "   " };
                write!(f, "+{}", edge)?;
            }
            writeln!(f, "+")?;
            if y == cells {
                break;
            }
            for x in 0..self.dots {
                write!(f, "{}", if self.col_edge(x, y) { '|' } else { ' ' })?;
                if x < cells {
                    match self.box_owner(x, y) {
                        Some(Side::One) => write!(f, " 1 ")?,
                        Some(Side::Two) => write!(f, " 2 ")?,
                        None => write!(f, "   ")?,
                    }
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.active)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("dots", &self.dots)
            .field("active", &self.active)
            .field("boxes", &self.boxes)
            .field("claimed", &self.claimed)
            .finish()
    }
}
