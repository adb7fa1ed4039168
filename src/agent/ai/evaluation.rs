// Position evaluation
// Scores are from Side::One's point of view (positive = Side::One ahead)

use crate::game_repr::{Side, State};

/// Weight of each open box (free points for the side to move)
const EXPOSURE_WEIGHT: f64 = 0.75;

/// Weight of each open box that sits next to another open box
const DOUBLE_CROSS_WEIGHT: f64 = 0.25;

/// Material scale applied when the looney value is 2 or 4
const LOONEY_MATERIAL_SCALE: f64 = 0.75;

/// Evaluation function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Box difference only
    Material,
    /// Material plus exposure and double-cross terms
    #[default]
    Structural,
    /// Structural, with material discounted in looney endgames
    ChainAware,
}

impl Heuristic {
    pub fn all() -> &'static [Heuristic] {
        &[Heuristic::Material, Heuristic::Structural, Heuristic::ChainAware]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Material => "Material",
            Heuristic::Structural => "Structural",
            Heuristic::ChainAware => "Chain-aware",
        }
    }

    /// Evaluate from Side::One's point of view.
    ///
    /// A terminal state always evaluates to exactly [`material`].
    pub fn evaluate(&self, state: &State) -> f64 {
        if state.is_terminal() {
            return material(state);
        }

        match self {
            Heuristic::Material => material(state),
            Heuristic::Structural => structural(state, material(state)),
            Heuristic::ChainAware => {
                let looney = state.analyze().looney_value();
                let material = if looney == 2 || looney == 4 {
                    LOONEY_MATERIAL_SCALE * material(state)
                } else {
                    material(state)
                };
                structural(state, material)
            }
        }
    }
}

fn structural(state: &State, material: f64) -> f64 {
    material
        + EXPOSURE_WEIGHT * exposure_penalty(state)
        + DOUBLE_CROSS_WEIGHT * double_cross_bonus(state)
}

/// Default evaluation used by the search players
pub fn evaluate(state: &State) -> f64 {
    Heuristic::default().evaluate(state)
}

/// Boxes owned by Side::One minus boxes owned by Side::Two
pub fn material(state: &State) -> f64 {
    state.score(Side::One) as f64 - state.score(Side::Two) as f64
}

/// Open boxes, counted for the side about to move: positive when Side::One
/// moves next, negative when Side::Two does.
pub fn exposure_penalty(state: &State) -> f64 {
    state.open_box_count() as f64 * state.active_player().perspective()
}

/// Open boxes adjacent to at least one other open box, credited to the side
/// about to move. These are the spots where the mover can decline the last
/// two boxes of a run and hand the opponent the next structure.
pub fn double_cross_bonus(state: &State) -> f64 {
    let cells = state.boxes_per_side();
    let mut count = 0usize;

    for y in 0..cells {
        for x in 0..cells {
            if state.box_magnitude(x, y) != 3 {
                continue;
            }
            let has_open_neighbour = state
                .grid_neighbours(x, y)
                .iter()
                .any(|&(nx, ny)| state.box_magnitude(nx, ny) == 3);
            if has_open_neighbour {
                count += 1;
            }
        }
    }

    count as f64 * state.active_player().perspective()
}
