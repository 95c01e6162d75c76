/// Fuzzes the search family by checking for many random grids that a path is found exactly
/// when the end is reachable, being part of the same connected component as the start, and
/// that the shortest path searches agree on its length.
use maze_pathfinding::{
    passable_components, search, Coordinate, Grid, GridMap, SearchAlgorithm, SearchResult,
};
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, start: Coordinate, end: Coordinate) -> Grid {
    let mut grid = Grid::with_destinations(n, n, start, end).unwrap();
    for row in 0..n {
        for col in 0..n {
            if rng.gen_bool(0.4) {
                grid.set_wall(Coordinate::new(row, col));
            }
        }
    }
    grid
}

fn visualize_grid(grid: &Grid, result: &SearchResult) {
    let mut shown = grid.clone();
    let map: GridMap = result
        .visited
        .iter()
        .chain(&result.path)
        .map(|cell| (cell.coordinate(), cell.clone()))
        .collect();
    shown.splice(&map);
    println!("{shown}");
}

/// Consecutive cells are adjacent, nothing is a wall and the path ends at `end`.
fn is_valid_path(result: &SearchResult, start: Coordinate, end: Coordinate) -> bool {
    let coordinates = result.path_coordinates();
    let steps_ok = std::iter::once(start)
        .chain(coordinates.iter().copied())
        .collect::<Vec<_>>()
        .windows(2)
        .all(|w| w[0].is_adjacent(&w[1]));
    steps_ok
        && coordinates.last() == Some(&end)
        && result.path.iter().all(|cell| !cell.is_wall())
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, start, end);
        let reachable = passable_components(&grid.to_map(), grid.size()).connected(&start, &end);
        for algorithm in SearchAlgorithm::ALL {
            let result = search(algorithm, &grid, start, end).unwrap();
            let found = !result.path.is_empty();
            // Show the grid if reachability is misjudged
            if found != reachable || (found && !is_valid_path(&result, start, end)) {
                println!("{algorithm}: reachable {reachable}, found {found}");
                visualize_grid(&grid, &result);
            }
            assert_eq!(found, reachable);
            if found {
                assert!(is_valid_path(&result, start, end));
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, start, end);
        let bfs = search(SearchAlgorithm::Bfs, &grid, start, end).unwrap();
        if bfs.path.is_empty() {
            continue;
        }
        for algorithm in [SearchAlgorithm::Dijkstra, SearchAlgorithm::AStar] {
            let result = search(algorithm, &grid, start, end).unwrap();
            if result.path.len() != bfs.path.len() {
                println!(
                    "{algorithm} path: {:?}\nBFS path: {:?}",
                    result.path_coordinates(),
                    bfs.path_coordinates()
                );
                visualize_grid(&grid, &result);
            }
            assert_eq!(result.path.len(), bfs.path.len());
            assert_eq!(result.path_cost(), bfs.path_cost());
        }
        // Depth-first paths may wander but never beat the shortest one
        let dfs = search(SearchAlgorithm::Dfs, &grid, start, end).unwrap();
        assert!(dfs.path.len() >= bfs.path.len());
    }
}
