//! # maze_pathfinding
//!
//! Grid search and maze generation on a 4-connected grid of cells. Implements
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), breadth-first and depth-first
//! search, each reporting the order in which it finalized cells alongside the path it found,
//! so that the exploration can be replayed step by step.
//!
//! Mazes are generated with recursive or iterative backtracking,
//! [randomized Kruskal](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_Kruskal's_algorithm)
//! or randomized Prim. Randomness is always passed in, so a seeded generator reproduces a maze
//! exactly.
//!
//! ```
//! use maze_pathfinding::{search, Coordinate, Grid, SearchAlgorithm};
//!
//! let start = Coordinate::new(2, 0);
//! let end = Coordinate::new(2, 4);
//! let mut grid = Grid::with_destinations(5, 5, start, end).unwrap();
//! grid.set_wall(Coordinate::new(2, 2));
//! let result = search(SearchAlgorithm::Bfs, &grid, start, end).unwrap();
//! assert_eq!(result.path.len(), 6);
//! ```
pub mod cell;
pub mod components;
pub mod disjoint_set;
pub mod error;
mod frontier;
pub mod grid;
pub mod maze;
pub mod solver;

pub use cell::{Cell, CellId, CellPatch, Coordinate, Direction, Role, Weight};
pub use components::{passable_components, Components};
pub use disjoint_set::{DisjointSet, SetNode};
pub use error::{Destination, GridError, Result};
pub use grid::{
    cols_for_width, default_destinations, rows_for_height, Grid, GridMap, GridSize,
};
pub use maze::{generate_maze, MazeAlgorithm, MazeContext};
pub use solver::{search, GridSolver, SearchAlgorithm, SearchResult};

/// Inflation applied to the A* heuristic so that ties favour cells closer to the end.
pub const HEURISTIC_FACTOR: f64 = 1.001;

/// Side of a rendered cell in pixels.
pub const CELL_SIZE_PX: usize = 30;

/// Share of the viewport height given to the grid.
pub const GRID_HEIGHT_RATIO: f64 = 0.8;
