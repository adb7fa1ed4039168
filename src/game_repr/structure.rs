// Chain and loop detection
//
// Two boxes are linked when they are 4-neighbours and the edge between them
// is already claimed. Chains are runs of magnitude-2 boxes joined by such
// links, loops are closed cycles of magnitude-3 boxes. All floods are
// iterative with a visited set, so every box is counted once.

use super::State;
use smallvec::SmallVec;

pub type BoxPos = (usize, usize);

/// Derived chain/loop view of a state. Recomputed on demand, never cached
/// inside [`State`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureAnalysis {
    width: usize,
    chain_of: Vec<Option<usize>>,
    loop_of: Vec<Option<usize>>,
    chains: Vec<Vec<BoxPos>>,
    loops: Vec<Vec<BoxPos>>,
    open_boxes: Vec<BoxPos>,
    looney_value: u8,
}

impl StructureAnalysis {
    /// Chain id of a box, if it belongs to one
    pub fn chain_of(&self, x: usize, y: usize) -> Option<usize> {
        self.chain_of[y * self.width + x]
    }

    /// Loop id of a box, if it belongs to one
    pub fn loop_of(&self, x: usize, y: usize) -> Option<usize> {
        self.loop_of[y * self.width + x]
    }

    pub fn chains(&self) -> &[Vec<BoxPos>] {
        &self.chains
    }

    pub fn loops(&self) -> &[Vec<BoxPos>] {
        &self.loops
    }

    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.chains.iter().map(Vec::len)
    }

    pub fn loop_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.loops.iter().map(Vec::len)
    }

    pub fn open_boxes(&self) -> &[BoxPos] {
        &self.open_boxes
    }

    /// Endgame classification:
    /// - 0: no open region, or two or more
    /// - 2: the single open box starts a chain of length 3
    /// - 4: the single open region is a loop of length 4
    ///
    /// A loop of open boxes counts as one region.
    pub fn looney_value(&self) -> u8 {
        self.looney_value
    }
}

impl State {
    /// Boxes linked to `(x, y)` through a claimed shared edge
    pub fn linked_neighbours(&self, x: usize, y: usize) -> SmallVec<[BoxPos; 4]> {
        let cells = self.boxes_per_side();
        let mut linked = SmallVec::new();
        if y > 0 && self.row_edge(x, y) {
            linked.push((x, y - 1));
        }
        if y + 1 < cells && self.row_edge(x, y + 1) {
            linked.push((x, y + 1));
        }
        if x > 0 && self.col_edge(x, y) {
            linked.push((x - 1, y));
        }
        if x + 1 < cells && self.col_edge(x + 1, y) {
            linked.push((x + 1, y));
        }
        linked
    }

    /// 4-neighbours of `(x, y)` regardless of edge state
    pub fn grid_neighbours(&self, x: usize, y: usize) -> SmallVec<[BoxPos; 4]> {
        let cells = self.boxes_per_side();
        let mut neighbours = SmallVec::new();
        if y > 0 {
            neighbours.push((x, y - 1));
        }
        if y + 1 < cells {
            neighbours.push((x, y + 1));
        }
        if x > 0 {
            neighbours.push((x - 1, y));
        }
        if x + 1 < cells {
            neighbours.push((x + 1, y));
        }
        neighbours
    }

    /// Length of the chain starting at `(x, y)`: the box itself plus every
    /// magnitude-2 box reachable through claimed shared edges.
    pub fn chain_length_from(&self, x: usize, y: usize) -> usize {
        let cells = self.boxes_per_side();
        let mut visited = vec![false; cells * cells];
        let mut stack = vec![(x, y)];
        let mut length = 0;

        while let Some((cx, cy)) = stack.pop() {
            if visited[cy * cells + cx] {
                continue;
            }
            visited[cy * cells + cx] = true;
            length += 1;

            for (nx, ny) in self.linked_neighbours(cx, cy) {
                if !visited[ny * cells + nx] && self.box_magnitude(nx, ny) == 2 {
                    stack.push((nx, ny));
                }
            }
        }

        length
    }

    /// Weaker heuristic: size of the 4-connected run of boxes sharing the
    /// magnitude of `(x, y)`, ignoring edge state.
    pub fn neighbour_run_length(&self, x: usize, y: usize) -> usize {
        let cells = self.boxes_per_side();
        let magnitude = self.box_magnitude(x, y);
        let mut visited = vec![false; cells * cells];
        let mut stack = vec![(x, y)];
        let mut length = 0;

        while let Some((cx, cy)) = stack.pop() {
            if visited[cy * cells + cx] || self.box_magnitude(cx, cy) != magnitude {
                continue;
            }
            visited[cy * cells + cx] = true;
            length += 1;
            stack.extend(self.grid_neighbours(cx, cy));
        }

        length
    }

    /// Longest chain seeded from any open box, 0 when none is open
    pub fn longest_chain(&self) -> usize {
        let cells = self.boxes_per_side();
        (0..cells)
            .flat_map(|y| (0..cells).map(move |x| (x, y)))
            .filter(|&(x, y)| self.box_magnitude(x, y) == 3)
            .map(|(x, y)| self.chain_length_from(x, y))
            .max()
            .unwrap_or(0)
    }

    pub fn analyze(&self) -> StructureAnalysis {
        let cells = self.boxes_per_side();
        let mut chain_of = vec![None; cells * cells];
        let mut loop_of = vec![None; cells * cells];
        let mut chains = Vec::new();
        let mut loops = Vec::new();
        let mut open_boxes = Vec::new();

        let mut visited = vec![false; cells * cells];
        for y in 0..cells {
            for x in 0..cells {
                let magnitude = self.box_magnitude(x, y);
                if magnitude == 3 {
                    open_boxes.push((x, y));
                }
                if visited[y * cells + x] || !(magnitude == 2 || magnitude == 3) {
                    continue;
                }

                let component = self.component(x, y, magnitude, &mut visited);
                if magnitude == 2 && component.len() >= 2 {
                    for &(bx, by) in &component {
                        chain_of[by * cells + bx] = Some(chains.len());
                    }
                    chains.push(component);
                } else if magnitude == 3 && self.is_closed(&component) {
                    for &(bx, by) in &component {
                        loop_of[by * cells + bx] = Some(loops.len());
                    }
                    loops.push(component);
                }
            }
        }

        let mut analysis = StructureAnalysis {
            width: cells,
            chain_of,
            loop_of,
            chains,
            loops,
            open_boxes,
            looney_value: 0,
        };
        analysis.looney_value = self.classify_looney(&analysis);
        analysis
    }

    /// Boxes of equal magnitude linked to `(x, y)`
    fn component(
        &self,
        x: usize,
        y: usize,
        magnitude: u8,
        visited: &mut [bool],
    ) -> Vec<BoxPos> {
        let cells = self.boxes_per_side();
        let mut component = Vec::new();
        let mut stack = vec![(x, y)];

        while let Some((cx, cy)) = stack.pop() {
            if visited[cy * cells + cx] {
                continue;
            }
            visited[cy * cells + cx] = true;
            component.push((cx, cy));

            for (nx, ny) in self.linked_neighbours(cx, cy) {
                if !visited[ny * cells + nx] && self.box_magnitude(nx, ny) == magnitude {
                    stack.push((nx, ny));
                }
            }
        }

        component
    }

    /// A component is closed when every member links to two others in it
    fn is_closed(&self, component: &[BoxPos]) -> bool {
        component.len() >= 4
            && component.iter().all(|&(x, y)| {
                self.linked_neighbours(x, y)
                    .iter()
                    .filter(|&n| component.contains(n))
                    .count()
                    >= 2
            })
    }

    fn classify_looney(&self, analysis: &StructureAnalysis) -> u8 {
        let loose: Vec<BoxPos> = analysis
            .open_boxes
            .iter()
            .copied()
            .filter(|&(x, y)| analysis.loop_of(x, y).is_none())
            .collect();

        match (loose.len(), analysis.loops.len()) {
            (1, 0) => {
                let (x, y) = loose[0];
                if self.chain_length_from(x, y) == 3 {
                    2
                } else {
                    0
                }
            }
            (0, 1) if analysis.loops[0].len() == 4 => 4,
            _ => 0,
        }
    }
}
