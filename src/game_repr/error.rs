use super::Action;
use thiserror::Error;

/// Errors reported by the checked board API.
///
/// The unchecked entry points (`State::apply`, `State::new`) treat the same
/// conditions as contract violations and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("edge {action} is already claimed")]
    EdgeTaken { action: Action },

    #[error("edge {action} lies outside a {dots}x{dots} dot grid")]
    OutOfBounds { action: Action, dots: usize },

    #[error("{grid} grid is {found_rows}x{found_cols}, expected {expected_rows}x{expected_cols}")]
    Geometry {
        grid: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("a board needs at least 2 dots per side, got {0}")]
    TooFewDots(usize),

    #[error("box ({x}, {y}) has counter {value} but {claimed} claimed edges")]
    CounterMismatch {
        x: usize,
        y: usize,
        value: i8,
        claimed: usize,
    },
}
