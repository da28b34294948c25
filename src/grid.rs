use crate::coord::Coord;
use crate::error::{Endpoint, EndpointFault, ParseGridError, PathError};
use crate::{find_path, Result, GRID_SIZE, N_SMALLVEC_SIZE};
use core::fmt;
use log::warn;
use smallvec::SmallVec;
use std::str::FromStr;

/// A square field of wall flags with optional start and end markers.
///
/// Searches borrow a [Grid] immutably; the owner edits it between searches. The editing
/// methods keep the marker invariants: at most one start and one end, and neither of them on
/// a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    walls: Vec<bool>,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(GRID_SIZE)
    }
}

impl Grid {
    /// Creates an empty `size` x `size` grid without walls or markers.
    pub fn new(size: usize) -> Grid {
        Grid {
            size,
            walls: vec![false; size * size],
            start: None,
            end: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }
    pub fn start(&self) -> Option<Coord> {
        self.start
    }
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Cells outside the grid count as walls.
    pub fn is_wall(&self, coord: Coord) -> bool {
        !self.in_bounds(coord) || self.walls[coord.to_index(self.size)]
    }

    pub fn can_move_to(&self, coord: Coord) -> bool {
        !self.is_wall(coord)
    }

    /// The in-bounds, non-wall orthogonal neighbours of `coord`, always in up, down, left,
    /// right order. Empty if `coord` itself is off the grid.
    pub fn neighbors(&self, coord: Coord) -> SmallVec<[Coord; N_SMALLVEC_SIZE]> {
        if !self.in_bounds(coord) {
            return SmallVec::new();
        }
        coord
            .neumann_neighborhood()
            .into_iter()
            .flatten()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    pub(crate) fn get_ix(&self, coord: Coord) -> usize {
        coord.to_index(self.size)
    }
    pub(crate) fn get_coord(&self, ix: usize) -> Coord {
        Coord::from_index(ix, self.size)
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|w| **w).count()
    }

    pub(crate) fn check_endpoint(
        &self,
        endpoint: Endpoint,
        coord: Option<Coord>,
    ) -> Result<Coord> {
        let reason = match coord {
            None => EndpointFault::Missing,
            Some(c) if !self.in_bounds(c) => EndpointFault::OutOfBounds(c),
            Some(c) if self.is_wall(c) => EndpointFault::Wall(c),
            Some(c) => return Ok(c),
        };
        warn!("Rejecting {} endpoint: {}", endpoint, reason);
        Err(PathError::InvalidEndpoints { endpoint, reason })
    }

    /// Moves the start marker to `coord`, clearing any wall there. Returns [false] and leaves
    /// the grid untouched if `coord` is out of bounds or holds the end marker.
    pub fn set_start(&mut self, coord: Coord) -> bool {
        if !self.in_bounds(coord) || self.end == Some(coord) {
            return false;
        }
        let ix = self.get_ix(coord);
        self.walls[ix] = false;
        self.start = Some(coord);
        true
    }

    /// Moves the end marker to `coord`. Same rules as [set_start](Self::set_start).
    pub fn set_end(&mut self, coord: Coord) -> bool {
        if !self.in_bounds(coord) || self.start == Some(coord) {
            return false;
        }
        let ix = self.get_ix(coord);
        self.walls[ix] = false;
        self.end = Some(coord);
        true
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }
    pub fn clear_end(&mut self) {
        self.end = None;
    }

    /// Sets the wall flag of `coord` and reports whether the cell changed. Out-of-bounds cells
    /// and the start/end cells are never walled.
    pub fn set_wall(&mut self, coord: Coord, blocked: bool) -> bool {
        if !self.in_bounds(coord) || self.start == Some(coord) || self.end == Some(coord) {
            return false;
        }
        let ix = self.get_ix(coord);
        let changed = self.walls[ix] != blocked;
        self.walls[ix] = blocked;
        changed
    }

    pub fn toggle_wall(&mut self, coord: Coord) -> bool {
        let blocked = self.is_wall(coord);
        self.set_wall(coord, !blocked)
    }

    /// Clears all walls and markers, keeping the size.
    pub fn reset(&mut self) {
        self.walls.iter_mut().for_each(|w| *w = false);
        self.start = None;
        self.end = None;
    }

    /// Searches from the stored start marker to the stored end marker.
    pub fn find_path(&self) -> Result<Option<Vec<Coord>>> {
        let start = self.check_endpoint(Endpoint::Start, self.start)?;
        let end = self.check_endpoint(Endpoint::End, self.end)?;
        find_path(self, start, end)
    }

    pub(crate) fn cell_char(&self, coord: Coord) -> char {
        if self.start == Some(coord) {
            'S'
        } else if self.end == Some(coord) {
            'G'
        } else if self.is_wall(coord) {
            '#'
        } else {
            '.'
        }
    }
}

/// Renders one row per line using `S` (start), `G` (end), `#` (wall) and `.` (free).
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.cell_char(Coord::new(row, col)))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the format produced by [Display](fmt::Display). Blank lines and surrounding
/// whitespace are ignored.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> std::result::Result<Grid, ParseGridError> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();
        let size = rows.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }
        let mut grid = Grid::new(size);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(ParseGridError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                let coord = Coord::new(row, col);
                let marker = match ch {
                    '.' => continue,
                    '#' => {
                        grid.walls[coord.to_index(size)] = true;
                        continue;
                    }
                    'S' => &mut grid.start,
                    'G' => &mut grid.end,
                    _ => return Err(ParseGridError::UnknownCell { row, col, ch }),
                };
                if let Some(first) = *marker {
                    return Err(ParseGridError::DuplicateMarker {
                        marker: ch,
                        first,
                        second: coord,
                    });
                }
                *marker = Some(coord);
            }
        }
        Ok(grid)
    }
}
