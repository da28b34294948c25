use crate::{Coord, Grid, STEP_COST};
use core::fmt;
use fxhash::FxHashSet;
use itertools::Itertools;

/// Cost of following `path`, one [STEP_COST] per step.
pub fn path_cost(path: &[Coord]) -> i32 {
    path.len().saturating_sub(1) as i32 * STEP_COST
}

/// Checks that `path` is non-empty, stays on free cells of `grid` and only takes orthogonal
/// unit steps.
pub fn is_valid_path(grid: &Grid, path: &[Coord]) -> bool {
    !path.is_empty()
        && path.iter().all(|p| grid.can_move_to(*p))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

/// Renders a [Grid] like its [Display](fmt::Display) impl with the cells of a path drawn as `*`.
/// Start and end keep their own markers.
pub struct PathOverlay<'a> {
    grid: &'a Grid,
    cells: FxHashSet<Coord>,
}

impl<'a> PathOverlay<'a> {
    pub fn new(grid: &'a Grid, path: &[Coord]) -> PathOverlay<'a> {
        PathOverlay {
            grid,
            cells: path.iter().copied().collect(),
        }
    }
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.size() {
            let line: String = (0..self.grid.size())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    match self.grid.cell_char(coord) {
                        '.' if self.cells.contains(&coord) => '*',
                        c => c,
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
