use crate::{Coord, Grid};
use log::debug;
use petgraph::unionfind::UnionFind;

/// Connected components of the free cells of a [Grid] under 4-neighbour adjacency.
///
/// Built once from a snapshot; rebuild it after editing the grid.
#[derive(Clone, Debug)]
pub struct Components {
    size: usize,
    free: Vec<bool>,
    components: UnionFind<usize>,
}

impl Components {
    /// Generates a new [UnionFind] structure and links up free neighbours to the same components.
    pub fn new(grid: &Grid) -> Components {
        let size = grid.size();
        let mut components = UnionFind::new(size * size);
        let mut free = vec![false; size * size];
        for row in 0..size {
            for col in 0..size {
                let point = Coord::new(row, col);
                if grid.is_wall(point) {
                    continue;
                }
                let parent_ix = point.to_index(size);
                free[parent_ix] = true;
                // Linking down and right covers every edge once.
                [Coord::new(row + 1, col), Coord::new(row, col + 1)]
                    .into_iter()
                    .filter(|p| grid.can_move_to(*p))
                    .for_each(|p| {
                        components.union(parent_ix, p.to_index(size));
                    });
            }
        }
        debug!("Generated connected components for a {}x{} grid", size, size);
        Components {
            size,
            free,
            components,
        }
    }

    fn free_ix(&self, coord: &Coord) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            let ix = coord.to_index(self.size);
            self.free[ix].then_some(ix)
        } else {
            None
        }
    }

    /// Retrieves the component id a given free [Coord] belongs to.
    pub fn component(&self, coord: &Coord) -> Option<usize> {
        self.free_ix(coord).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are free cells on the same component.
    pub fn reachable(&self, start: &Coord, goal: &Coord) -> bool {
        match (self.free_ix(start), self.free_ix(goal)) {
            (Some(a), Some(b)) => self.components.equiv(a, b),
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coord, goal: &Coord) -> bool {
        !self.reachable(start, goal)
    }
}
