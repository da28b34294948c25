/// Fuzzes the search by checking for many random grids that a path is found exactly when the
/// goal shares a connected component with the start, that every path is valid and that A* and
/// Dijkstra agree on its cost.
use grid_astar::*;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, density: f64) -> Grid {
    let mut grid = Grid::new(n);
    for row in 0..n {
        for col in 0..n {
            grid.set_wall(Coord::new(row, col), rng.gen_bool(density));
        }
    }
    grid
}

fn random_free_cell(grid: &Grid, rng: &mut StdRng) -> Option<Coord> {
    (0..32)
        .map(|_| {
            Coord::new(
                rng.gen_range(0..grid.size()),
                rng.gen_range(0..grid.size()),
            )
        })
        .find(|c| !grid.is_wall(*c))
}

fn visualize_grid(grid: &Grid, start: &Coord, end: &Coord) {
    let mut marked = grid.clone();
    marked.set_start(*start);
    marked.set_end(*end);
    println!("{}", marked);
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let start = Coord::new(0, 0);
    let end = Coord::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng, 0.4);
        grid.set_wall(start, false);
        grid.set_wall(end, false);
        let reachable = Components::new(&grid).reachable(&start, &end);
        let path = solver.find_path(&grid, start, end).unwrap();
        // Show the grid if the search disagrees with the components
        if path.is_some() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(path.is_some(), reachable);
        if let Some(path) = path {
            assert!(is_valid_path(&grid, &path));
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar_solver = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, 0.3);
        let (Some(start), Some(end)) = (
            random_free_cell(&grid, &mut rng),
            random_free_cell(&grid, &mut rng),
        ) else {
            continue;
        };
        let astar = astar_solver.search(&grid, start, end).unwrap();
        let dijkstra = DijkstraSolver.search(&grid, start, end).unwrap();
        if astar.cost() != dijkstra.cost() {
            println!("Astar path: {:?}\nDijkstra path: {:?}", astar.path, dijkstra.path);
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(astar.cost(), dijkstra.cost());
        assert!(astar.expanded <= dijkstra.expanded);
    }
}

/// Without walls every path is as short as the Manhattan distance allows.
#[test]
fn fuzz_open_grid_is_manhattan() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = Grid::default();
    for _ in 0..500 {
        let start = Coord::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        let end = Coord::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        let path = find_path(&grid, start, end).unwrap().unwrap();
        assert_eq!(path.len(), start.manhattan_distance(&end) + 1);
        assert!(is_valid_path(&grid, &path));
    }
}
