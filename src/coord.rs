use core::fmt;

/// A cell position on a [Grid](crate::Grid), addressed by `row` then `col`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to `other`.
    /// Admissible and consistent on a 4-connected unit-cost grid.
    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Packs the coordinate into a row-major index for a grid with edge length `size`.
    #[inline]
    pub fn to_index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(ix: usize, size: usize) -> Coord {
        Coord::new(ix / size, ix % size)
    }

    /// The four orthogonal neighbours in up, down, left, right order. Neighbours that would
    /// leave the range of `usize` are [None]; grid bounds are left to the grid.
    pub(crate) fn neumann_neighborhood(&self) -> [Option<Coord>; 4] {
        [
            self.row.checked_sub(1).map(|r| Coord::new(r, self.col)),
            self.row.checked_add(1).map(|r| Coord::new(r, self.col)),
            self.col.checked_sub(1).map(|c| Coord::new(self.row, c)),
            self.col.checked_add(1).map(|c| Coord::new(self.row, c)),
        ]
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
