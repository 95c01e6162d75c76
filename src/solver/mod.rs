//! The search family. Every solver runs on its own working copy of the grid and reports the
//! order in which it finalized cells together with the path it found.
use core::fmt;
use std::str::FromStr;

use log::{debug, info, warn};

use crate::cell::{Cell, Coordinate};
use crate::error::{Destination, GridError, Result};
use crate::grid::{fresh_working_map, reconstruct_path, Grid, GridMap, GridSize};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// Cells in the order the search finalized them, and the path from just after the start up
/// to and including the end. The path is empty when the end was not reached.
#[derive(Clone, Debug, Default)]
pub struct SearchResult {
    pub visited: Vec<Cell>,
    pub path: Vec<Cell>,
}

impl SearchResult {
    pub fn visited_coordinates(&self) -> Vec<Coordinate> {
        self.visited.iter().map(Cell::coordinate).collect()
    }

    pub fn path_coordinates(&self) -> Vec<Coordinate> {
        self.path.iter().map(Cell::coordinate).collect()
    }

    /// Sum of the weights of the cells stepped onto along the path.
    pub fn path_cost(&self) -> f64 {
        self.path.iter().map(|cell| cell.weight().cost()).sum()
    }
}

pub trait GridSolver {
    /// Explores `map` from `start` until `end` is finalized or nothing is left to explore,
    /// recording predecessors in the map. Returns the finalized cells in order.
    ///
    /// `start` and `end` are guaranteed to be keys of `map`, whose traversal state is fresh.
    fn traverse(
        &self,
        map: &mut GridMap,
        size: GridSize,
        start: Coordinate,
        end: Coordinate,
    ) -> Vec<Cell>;

    /// Searches `grid` from `start` to `end` without modifying it.
    fn solve(&self, grid: &Grid, start: Coordinate, end: Coordinate) -> Result<SearchResult> {
        if grid.destination(start, Destination::Start)?.is_wall() {
            warn!("start cell {} is a wall", start);
        }
        grid.destination(end, Destination::End)?;
        let mut map = fresh_working_map(grid);
        let visited = self.traverse(&mut map, grid.size(), start, end);
        let reached = map.get(&end).is_some_and(Cell::is_visited);
        let path = if reached {
            reconstruct_path(end, &map)
        } else {
            info!("{} is not reachable from {}", end, start);
            Vec::new()
        };
        debug!(
            "visited {} cells, path of {} cells",
            visited.len(),
            path.len()
        );
        Ok(SearchResult { visited, path })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Dijkstra,
    AStar,
    Bfs,
    Dfs,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::AStar,
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SearchAlgorithm::Dijkstra => "Dijkstra Algorithm",
            SearchAlgorithm::AStar => "A* Search Algorithm",
            SearchAlgorithm::Bfs => "Breadth-first Search",
            SearchAlgorithm::Dfs => "Depth-first Search",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            SearchAlgorithm::Dijkstra => &["dijkstra"],
            SearchAlgorithm::AStar => &["astar", "a*", "a-star"],
            SearchAlgorithm::Bfs => &["bfs", "breadth-first"],
            SearchAlgorithm::Dfs => &["dfs", "depth-first"],
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label or a short alias, ignoring case.
impl FromStr for SearchAlgorithm {
    type Err = GridError;

    fn from_str(selector: &str) -> Result<SearchAlgorithm> {
        let selector = selector.trim();
        SearchAlgorithm::ALL
            .into_iter()
            .find(|algorithm| {
                algorithm.label().eq_ignore_ascii_case(selector)
                    || algorithm
                        .aliases()
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(selector))
            })
            .ok_or_else(|| GridError::UnknownAlgorithm(selector.to_owned()))
    }
}

/// Runs `algorithm` on `grid` from `start` to `end` with default solver settings.
pub fn search(
    algorithm: SearchAlgorithm,
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
) -> Result<SearchResult> {
    debug!(
        "{} on a {}x{} grid from {} to {}",
        algorithm,
        grid.size().rows,
        grid.size().cols,
        start,
        end
    );
    match algorithm {
        SearchAlgorithm::Dijkstra => DijkstraSolver.solve(grid, start, end),
        SearchAlgorithm::AStar => AstarSolver::new().solve(grid, start, end),
        SearchAlgorithm::Bfs => BfsSolver.solve(grid, start, end),
        SearchAlgorithm::Dfs => DfsSolver.solve(grid, start, end),
    }
}
