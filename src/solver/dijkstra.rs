use crate::{solver::GridSolver, Coord};

/// Uninformed baseline: A* with a zero heuristic.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Coord, _: &Coord) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::astar::AstarSolver;
    use crate::Grid;

    #[test]
    fn agrees_with_astar_on_cost() {
        let grid: Grid = "\
            S....\n\
            ####.\n\
            .....\n\
            .####\n\
            ....G"
            .parse()
            .unwrap();
        let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
        let dijkstra = DijkstraSolver.search(&grid, start, end).unwrap();
        let astar = AstarSolver::new().search(&grid, start, end).unwrap();
        assert_eq!(dijkstra.cost(), Some(16));
        assert_eq!(dijkstra.cost(), astar.cost());
        assert!(dijkstra.expanded >= astar.expanded);
    }
}
