use grid_astar::{Coord, Grid, PathOverlay, GRID_SIZE};

// In this example a path is found on the default 20x20 grid with a few wall segments.
// The grid is printed with
// - # marking a wall
// - S marking the start
// - G marking the end
// - * marking the cells of the path
//
// Run with RUST_LOG=debug to see the search statistics.

fn main() {
    env_logger::init();
    let mut grid = Grid::default();
    for row in 0..GRID_SIZE - 3 {
        grid.set_wall(Coord::new(row, 5), true);
        grid.set_wall(Coord::new(GRID_SIZE - 1 - row, 12), true);
    }
    for col in 6..10 {
        grid.set_wall(Coord::new(10, col), true);
    }
    grid.set_start(Coord::new(0, 0));
    grid.set_end(Coord::new(0, GRID_SIZE - 1));
    println!("{}", grid);
    match grid.find_path() {
        Ok(Some(path)) => {
            println!("Path of {} cells:", path.len());
            println!("{}", PathOverlay::new(&grid, &path));
        }
        Ok(None) => println!("No path found!"),
        Err(e) => println!("{}", e),
    }
}
