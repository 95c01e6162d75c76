use maze_pathfinding::{
    generate_maze, search, Coordinate, Grid, GridMap, MazeAlgorithm, SearchAlgorithm,
};
use rand::{rngs::StdRng, SeedableRng};

// Generates a maze with every algorithm, writes it back into the grid and solves it with A*.
// The solved grid is printed with the visited cells as `o` and the path as `*`.
fn main() {
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(14, 30);
    let mut rng = StdRng::seed_from_u64(7);
    for algorithm in [
        MazeAlgorithm::BacktrackingRecursive,
        MazeAlgorithm::BacktrackingIterative,
        MazeAlgorithm::Prim,
    ] {
        let mut grid = Grid::with_destinations(15, 31, start, end).unwrap();
        let maze = generate_maze(algorithm, &grid, start, end, &mut rng).unwrap();
        grid.splice(&maze);
        let result = search(SearchAlgorithm::AStar, &grid, start, end).unwrap();
        let trace: GridMap = result
            .visited
            .iter()
            .chain(&result.path)
            .filter(|cell| !cell.is_destination())
            .map(|cell| (cell.coordinate(), cell.clone()))
            .collect();
        grid.splice(&trace);
        println!("{algorithm}, path of {} cells:\n{grid}", result.path.len());
    }
}
