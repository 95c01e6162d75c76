use maze_pathfinding::solver::{astar::AstarSolver, GridSolver};
use maze_pathfinding::{Coordinate, Grid};

// The heuristic_factor can be set to scale the heuristic, causing cells that are closer to the goal (ignoring obstacles)
// to be evaluated quicker than in normal operation. This is called Weighted A* and it can speed up the search in certain
// scenarios, at the price of paths that are no longer guaranteed to be the shortest.

fn main() {
    const N: usize = 30;
    let start = Coordinate::new(1, 1);
    let end = Coordinate::new(N - 3, N - 3);
    let mut grid = Grid::with_destinations(N, N, start, end).unwrap();
    for i in 8..16 {
        for j in 8..16 {
            grid.set_wall(Coordinate::new(i, j));
        }
    }
    for row in 0..20 {
        grid.set_wall(Coordinate::new(row, 4));
    }
    println!("{grid}");
    for heuristic_factor in [1.0, 1.3, 2.0] {
        let solver = AstarSolver { heuristic_factor };
        let result = solver.solve(&grid, start, end).unwrap();
        println!(
            "heuristic factor {heuristic_factor}: visited {} cells, path of cost {}",
            result.visited.len(),
            result.path_cost()
        );
    }
}
