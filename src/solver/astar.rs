use crate::{solver::GridSolver, Coord};

/// A* with the Manhattan distance as heuristic.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplier applied to the heuristic. Anything above 1.0 may expand fewer cells but no
    /// longer guarantees shortest paths.
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl GridSolver for AstarSolver {
    /// Just the cost times a heuristic factor.
    fn heuristic(&self, p1: &Coord, p2: &Coord) -> i32 {
        (self.cost(p1, p2) as f32 * self.heuristic_factor) as i32
    }
}
