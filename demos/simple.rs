use maze_pathfinding::{search, Coordinate, Grid, SearchAlgorithm};

// In this example a path is found on a grid with shape
// S...
// .#..
// .#.E
// ....
// S marks the start
// E marks the end
fn main() {
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(2, 3);
    let mut grid = Grid::with_destinations(4, 4, start, end).unwrap();
    grid.set_wall(Coordinate::new(1, 1));
    grid.set_wall(Coordinate::new(2, 1));
    for algorithm in SearchAlgorithm::ALL {
        let result = search(algorithm, &grid, start, end).unwrap();
        println!(
            "{algorithm}: visited {} cells, path of cost {}",
            result.visited.len(),
            result.path_cost()
        );
        for c in result.path_coordinates() {
            println!("  {c}");
        }
    }
}
