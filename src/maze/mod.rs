//! The maze family. Every generator turns a working copy of the grid into walls and carves
//! passages back out of it; the caller splices the returned map into its grid.
use core::fmt;
use std::str::FromStr;

use fxhash::FxHashSet;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::{CellPatch, Coordinate, Direction, Role, Weight};
use crate::error::{Destination, GridError, Result};
use crate::grid::{fresh_working_map, Grid, GridMap, GridSize};

mod backtracking;
mod kruskal;
mod prim;

/// Working state shared by the generators: the map being carved, its dimensions, and the
/// cells a generator has already carved.
#[derive(Clone, Debug)]
pub struct MazeContext {
    pub map: GridMap,
    pub size: GridSize,
    pub visited: FxHashSet<Coordinate>,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl MazeContext {
    pub fn new(grid: &Grid, start: Coordinate, end: Coordinate) -> MazeContext {
        MazeContext {
            map: fresh_working_map(grid),
            size: grid.size(),
            visited: FxHashSet::default(),
            start,
            end,
        }
    }

    /// Replaces every cell with a plain wall copy of itself. Start and finish roles are
    /// dropped here and set again only on the destinations the maze is generated for.
    pub fn transform_to_walls(&mut self) {
        for cell in self.map.values_mut() {
            *cell = cell.copy_with(CellPatch::new().weight(Weight::Wall).role(Role::Plain));
        }
    }

    /// Replaces the cell at `coordinate` with an empty copy and marks it visited.
    pub fn carve(&mut self, coordinate: Coordinate) {
        if let Some(cell) = self.map.get_mut(&coordinate) {
            *cell = cell.copy_with(CellPatch::new().weight(Weight::Empty));
            self.visited.insert(coordinate);
        }
    }

    pub fn is_visited(&self, coordinate: &Coordinate) -> bool {
        self.visited.contains(coordinate)
    }

    pub fn is_wall(&self, coordinate: &Coordinate) -> bool {
        self.map.get(coordinate).is_some_and(|cell| cell.is_wall())
    }

    /// The coordinate `distance` cells away in direction `dir`, if it is on the grid.
    pub fn neighbor(
        &self,
        from: Coordinate,
        dir: Direction,
        distance: usize,
    ) -> Option<Coordinate> {
        from.offset_within(dir, distance, self.size.rows, self.size.cols)
    }

    /// The wall next to `from` and the cell beyond it in direction `dir`, when the cell
    /// beyond is on the grid and neither has been carved yet.
    pub fn unvisited_pair(
        &self,
        from: Coordinate,
        dir: Direction,
    ) -> Option<(Coordinate, Coordinate)> {
        let wall = self.neighbor(from, dir, 1)?;
        let next = self.neighbor(from, dir, 2)?;
        (!self.is_visited(&wall) && !self.is_visited(&next)).then_some((wall, next))
    }

    /// Puts the start and end cells back, empty and with their roles set.
    fn restore_destinations(&mut self, grid: &Grid) {
        for (coordinate, role) in [(self.start, Role::Start), (self.end, Role::Finish)] {
            if let Some(cell) = grid.get(coordinate) {
                let mut restored =
                    cell.copy_with(CellPatch::new().weight(Weight::Empty).role(role));
                restored.reset_traversal();
                self.map.insert(coordinate, restored);
            }
        }
    }
}

/// [Direction::ALL] in random order.
pub fn shuffled_directions<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
    let mut directions = Direction::ALL;
    directions.shuffle(rng);
    directions
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MazeAlgorithm {
    BacktrackingRecursive,
    BacktrackingIterative,
    Kruskal,
    Prim,
}

impl MazeAlgorithm {
    pub const ALL: [MazeAlgorithm; 4] = [
        MazeAlgorithm::BacktrackingRecursive,
        MazeAlgorithm::BacktrackingIterative,
        MazeAlgorithm::Kruskal,
        MazeAlgorithm::Prim,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MazeAlgorithm::BacktrackingRecursive => "Backtracking Recursive",
            MazeAlgorithm::BacktrackingIterative => "Backtracking Iterative",
            MazeAlgorithm::Kruskal => "Kruskal's Algorithm",
            MazeAlgorithm::Prim => "Prim's Algorithm",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            MazeAlgorithm::BacktrackingRecursive => &["recursive", "backtracking-recursive"],
            MazeAlgorithm::BacktrackingIterative => &["iterative", "backtracking-iterative"],
            MazeAlgorithm::Kruskal => &["kruskal"],
            MazeAlgorithm::Prim => &["prim"],
        }
    }
}

impl fmt::Display for MazeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label or a short alias, ignoring case.
impl FromStr for MazeAlgorithm {
    type Err = GridError;

    fn from_str(selector: &str) -> Result<MazeAlgorithm> {
        let selector = selector.trim();
        MazeAlgorithm::ALL
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

/// Generates a maze over the cells of `grid` with `algorithm`, drawing every random choice
/// from `rng`. Every cell of the returned map is a new cell that is either a wall or empty;
/// the start and end cells are always empty. `grid` itself is left untouched.
pub fn generate_maze<R: Rng + ?Sized>(
    algorithm: MazeAlgorithm,
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
    rng: &mut R,
) -> Result<GridMap> {
    grid.destination(start, Destination::Start)?;
    grid.destination(end, Destination::End)?;
    let mut context = MazeContext::new(grid, start, end);
    context.transform_to_walls();
    match algorithm {
        MazeAlgorithm::BacktrackingRecursive => {
            backtracking::generate_recursive(&mut context, rng)
        }
        MazeAlgorithm::BacktrackingIterative => {
            backtracking::generate_iterative(&mut context, rng)
        }
        MazeAlgorithm::Kruskal => kruskal::generate(&mut context, rng),
        MazeAlgorithm::Prim => prim::generate(&mut context, rng),
    }
    context.restore_destinations(grid);
    debug!(
        "{} carved {} of {} cells",
        algorithm,
        context.map.values().filter(|cell| !cell.is_wall()).count(),
        context.size.cell_count()
    );
    Ok(context.map)
}
