use maze_pathfinding::{
    search, Coordinate, Grid, GridError, SearchAlgorithm, Weight,
};

const START: Coordinate = Coordinate::new(5, 2);
const END: Coordinate = Coordinate::new(0, 5);

fn coords(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
    pairs.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
}

#[test]
fn bfs_on_open_grid() {
    let grid = Grid::with_destinations(6, 6, START, END).unwrap();
    let result = search(SearchAlgorithm::Bfs, &grid, START, END).unwrap();
    assert_eq!(
        result.path_coordinates(),
        coords(&[
            (4, 2),
            (3, 2),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5)
        ])
    );
    assert!(result.path.iter().all(|cell| cell.is_shortest_path()));
    assert_eq!(result.visited.first().unwrap().coordinate(), START);
    assert_eq!(result.visited.last().unwrap().coordinate(), END);
    // Level order: every cell is at most one step further out than the one before it
    let levels = result
        .visited
        .iter()
        .map(|cell| cell.coordinate().manhattan_distance(&START))
        .collect::<Vec<_>>();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
}

/// ```text
/// .....E
/// ......
/// ######
/// .....#
/// .....#
/// ..S..#
/// ```
#[test]
fn barrier_seals_off_the_end() {
    let mut grid = Grid::with_destinations(6, 6, START, END).unwrap();
    for col in 0..6 {
        grid.set_wall(Coordinate::new(2, col));
    }
    for row in 3..6 {
        grid.set_wall(Coordinate::new(row, 5));
    }
    print!("{grid}");
    let mut below = (3..6)
        .flat_map(|row| (0..5).map(move |col| Coordinate::new(row, col)))
        .collect::<Vec<_>>();
    below.sort();
    for algorithm in SearchAlgorithm::ALL {
        let result = search(algorithm, &grid, START, END).unwrap();
        assert!(result.path.is_empty(), "{algorithm} found a path");
        let mut visited = result.visited_coordinates();
        visited.sort();
        assert_eq!(visited, below, "{algorithm}");
        assert!(result.visited.iter().all(|cell| cell.weight() == Weight::Empty));
    }
}

#[test]
fn selectors_and_bad_input() {
    let grid = Grid::with_destinations(6, 6, START, END).unwrap();
    let algorithm: SearchAlgorithm = "A* Search Algorithm".parse().unwrap();
    assert_eq!(algorithm, SearchAlgorithm::AStar);
    assert!(matches!(
        "greedy".parse::<SearchAlgorithm>(),
        Err(GridError::UnknownAlgorithm(_))
    ));
    assert!(matches!(
        search(SearchAlgorithm::Dfs, &grid, START, Coordinate::new(6, 0)),
        Err(GridError::MissingDestination { .. })
    ));
}
