//! # grid_astar
//!
//! Shortest paths between two cells of a square grid with impassable walls. Moves are
//! orthogonal with unit cost and the search is
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry).
//!
//! A [Grid] is an owned snapshot that the caller edits; searches only borrow it, so any number
//! of searches may run over the same grid at once.
//!
//! ```
//! use grid_astar::{find_path, Coord, Grid};
//!
//! let mut grid = Grid::new(3);
//! grid.set_wall(Coord::new(0, 1), true);
//! grid.set_wall(Coord::new(1, 1), true);
//! let path = find_path(&grid, Coord::new(0, 0), Coord::new(0, 2)).unwrap().unwrap();
//! assert_eq!(path.len(), 7);
//! ```
mod astar_search;
pub mod components;
pub mod coord;
pub mod error;
pub mod grid;
pub mod path;
pub mod solver;

pub use crate::astar_search::{astar, AstarResult};
pub use crate::components::Components;
pub use crate::coord::Coord;
pub use crate::error::{Endpoint, EndpointFault, ParseGridError, PathError, Result};
pub use crate::grid::Grid;
pub use crate::path::{is_valid_path, path_cost, PathOverlay};
pub use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, SearchOutcome};

use smallvec::SmallVec;

/// Edge length of [Grid::default].
pub const GRID_SIZE: usize = 20;
/// Cost of a single orthogonal step.
pub const STEP_COST: i32 = 1;
pub(crate) const N_SMALLVEC_SIZE: usize = 4;

/// The free orthogonal neighbours of `coord` in up, down, left, right order.
pub fn neighbors(grid: &Grid, coord: Coord) -> SmallVec<[Coord; N_SMALLVEC_SIZE]> {
    grid.neighbors(coord)
}

/// Computes a shortest path from `start` to `end` with [AstarSolver].
///
/// Returns `Ok(None)` if `end` cannot be reached and [PathError::InvalidEndpoints] if either
/// endpoint is out of bounds or a wall. The path includes both endpoints.
pub fn find_path(grid: &Grid, start: Coord, end: Coord) -> Result<Option<Vec<Coord>>> {
    AstarSolver::new().find_path(grid, start, end)
}
