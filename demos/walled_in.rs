use grid_astar::{find_path, Coord, Grid};

// |S#..|
// |##..|
// |....|
// |...G|
//
// The start is enclosed, so the search reports that no path exists. Searching towards a
// wall is rejected before any work is done.

fn main() {
    env_logger::init();
    let grid: Grid = "S#..\n##..\n....\n...G".parse().expect("valid grid");
    println!("{}", grid);
    match grid.find_path() {
        Ok(Some(path)) => println!("Path: {:?}", path),
        Ok(None) => println!("No path found!"),
        Err(e) => println!("{}", e),
    }
    if let Err(e) = find_path(&grid, Coord::new(3, 3), Coord::new(1, 1)) {
        println!("{}", e);
    }
}
