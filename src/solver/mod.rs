use crate::astar_search::astar;
use crate::error::Endpoint;
use crate::path::path_cost;
use crate::{Coord, Grid, Result, N_SMALLVEC_SIZE, STEP_COST};
use log::{debug, info};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// The result of [GridSolver::search], including how much work the search did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The path from start to end inclusive, or [None] if the end is not reachable.
    pub path: Option<Vec<Coord>>,
    /// Number of cells that were fully expanded.
    pub expanded: usize,
}

impl SearchOutcome {
    pub fn cost(&self) -> Option<i32> {
        self.path.as_ref().map(|p| path_cost(p))
    }
}

pub trait GridSolver {
    /// Estimated cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Coord, p2: &Coord) -> i32;

    /// Exact cost of moving between two orthogonally reachable cells on an open grid.
    fn cost(&self, p1: &Coord, p2: &Coord) -> i32 {
        p1.manhattan_distance(p2) as i32 * STEP_COST
    }

    fn successors(&self, grid: &Grid, node: &Coord) -> SmallVec<[(Coord, i32); N_SMALLVEC_SIZE]> {
        grid.neighbors(*node)
            .into_iter()
            .map(|p| (p, STEP_COST))
            .collect()
    }

    /// Runs the search from `start` to `goal`. Both must be in bounds and free; the stored
    /// markers of `grid` are ignored. Cells are keyed by their packed row-major index.
    fn search(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<SearchOutcome> {
        let start = grid.check_endpoint(Endpoint::Start, Some(start))?;
        let goal = grid.check_endpoint(Endpoint::End, Some(goal))?;
        debug!(
            "Searching from {} to {} on a {}x{} grid",
            start,
            goal,
            grid.size(),
            grid.size()
        );
        let goal_ix = grid.get_ix(goal);
        let result = astar(
            &grid.get_ix(start),
            |&ix| {
                self.successors(grid, &grid.get_coord(ix))
                    .into_iter()
                    .map(move |(p, c)| (grid.get_ix(p), c))
            },
            |&ix| self.heuristic(&grid.get_coord(ix), &goal),
            |&ix| ix == goal_ix,
        );
        let path = result
            .found
            .map(|(v, _c)| v.into_iter().map(|ix| grid.get_coord(ix)).collect::<Vec<_>>());
        match &path {
            Some(p) => debug!(
                "Found a path of {} cells after expanding {} cells",
                p.len(),
                result.expanded
            ),
            None => info!(
                "{} is not reachable from {} ({} cells expanded)",
                goal, start, result.expanded
            ),
        }
        Ok(SearchOutcome {
            path,
            expanded: result.expanded,
        })
    }

    /// Computes a path from `start` to `goal`. The path is a shortest one as long as
    /// [heuristic](Self::heuristic) never overestimates the remaining cost. `Ok(None)` means the
    /// two cells are not connected through free cells.
    fn find_path(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Option<Vec<Coord>>> {
        self.search(grid, start, goal).map(|outcome| outcome.path)
    }
}
