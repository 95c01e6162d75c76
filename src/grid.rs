//! The rectangular [Grid] owned by the caller, the [GridMap] working copy every algorithm
//! mutates, and the traversal utilities shared by the search and maze families.
use core::fmt;

use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use itertools::{iproduct, Itertools};
use smallvec::SmallVec;

use crate::cell::{Cell, CellPatch, Coordinate, Direction, Role};
use crate::error::{Destination, GridError, Result};
use crate::{CELL_SIZE_PX, GRID_HEIGHT_RATIO};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Coordinate-keyed working copy of a grid. Iterates in row-major order.
pub type GridMap = FxIndexMap<Coordinate, Cell>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> GridSize {
        GridSize { rows, cols }
    }
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.col < self.cols
    }
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
    /// Whether a resize leaves the grid dimensions unchanged.
    pub fn same_as(&self, other: &GridSize) -> bool {
        self == other
    }
    pub(crate) fn index_of(&self, coordinate: &Coordinate) -> usize {
        coordinate.row * self.cols + coordinate.col
    }
}

/// Number of grid rows that fit a viewport of `height` pixels.
pub fn rows_for_height(height: usize) -> usize {
    (height as f64 * GRID_HEIGHT_RATIO / CELL_SIZE_PX as f64).floor() as usize
}

/// Number of grid columns that fit a viewport of `width` pixels.
pub fn cols_for_width(width: usize) -> usize {
    width / CELL_SIZE_PX
}

/// Start on the left edge and end on the right edge, both on the middle row.
pub fn default_destinations(size: GridSize) -> (Coordinate, Coordinate) {
    let row = size.rows / 2;
    (
        Coordinate::new(row, 0),
        Coordinate::new(row, size.cols.saturating_sub(1)),
    )
}

/// Rows of cells, all of equal length.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// A `rows` x `cols` grid of plain empty cells.
    pub fn new(rows: usize, cols: usize) -> Grid {
        let cells = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| Cell::new(Coordinate::new(row, col)))
                    .collect()
            })
            .collect();
        Grid { cells }
    }

    /// A grid of empty cells with the start and finish cells in place.
    pub fn with_destinations(
        rows: usize,
        cols: usize,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Grid> {
        if start == end {
            return Err(GridError::ConflictingRole {
                row: start.row,
                col: start.col,
            });
        }
        let mut grid = Grid::new(rows, cols);
        grid.place(start, Role::Start, Destination::Start)?;
        grid.place(end, Role::Finish, Destination::End)?;
        Ok(grid)
    }

    /// Validates that every row has the same length as the first one and that every cell
    /// sits at its own coordinate.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Grid> {
        let expected = cells.first().map_or(0, Vec::len);
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(GridError::RaggedGrid {
                row,
                expected,
                found,
            });
        }
        let misplaced = cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .find(|(col, cell)| cell.coordinate() != Coordinate::new(row, *col))
                .map(|(col, cell)| (row, col, cell.coordinate()))
        });
        if let Some((row, col, found)) = misplaced {
            return Err(GridError::MisplacedCell { row, col, found });
        }
        Ok(Grid { cells })
    }

    fn place(&mut self, coordinate: Coordinate, role: Role, which: Destination) -> Result<()> {
        let cell = self
            .get_mut(coordinate)
            .ok_or(GridError::MissingDestination { which, coordinate })?;
        *cell = Cell::with_role(coordinate, role);
        Ok(())
    }

    /// `cols` is 0 for an empty grid.
    pub fn size(&self) -> GridSize {
        GridSize {
            rows: self.cells.len(),
            cols: self.cells.first().map_or(0, Vec::len),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells.get(coordinate.row)?.get(coordinate.col)
    }

    pub fn get_mut(&mut self, coordinate: Coordinate) -> Option<&mut Cell> {
        self.cells.get_mut(coordinate.row)?.get_mut(coordinate.col)
    }

    /// Draws a wall at `coordinate`. Start and finish cells are left untouched.
    pub fn set_wall(&mut self, coordinate: Coordinate) {
        if let Some(cell) = self.get_mut(coordinate) {
            cell.set_as_wall();
        }
    }

    /// The cell at a start or end coordinate, or [GridError::MissingDestination].
    pub fn destination(&self, coordinate: Coordinate, which: Destination) -> Result<&Cell> {
        self.get(coordinate)
            .ok_or(GridError::MissingDestination { which, coordinate })
    }

    /// Copies of every cell keyed by coordinate. The grid itself is left untouched.
    pub fn to_map(&self) -> GridMap {
        self.cells()
            .map(|cell| (cell.coordinate(), cell.copy()))
            .collect()
    }

    /// Writes the cells of `map` back into the grid at their coordinates.
    pub fn splice(&mut self, map: &GridMap) {
        for (coordinate, cell) in map {
            if let Some(slot) = self.get_mut(*coordinate) {
                *slot = cell.clone();
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}", row.iter().map(cell_glyph).join(""))?;
        }
        Ok(())
    }
}

fn cell_glyph(cell: &Cell) -> char {
    if cell.is_start() {
        'S'
    } else if cell.is_finish() {
        'E'
    } else if cell.is_wall() {
        '#'
    } else if cell.is_shortest_path() {
        '*'
    } else if cell.is_visited() {
        'o'
    } else {
        '.'
    }
}

/// Working copy of `grid` with the traversal state of any earlier run cleared.
pub(crate) fn fresh_working_map(grid: &Grid) -> GridMap {
    let mut map = grid.to_map();
    map.values_mut().for_each(Cell::reset_traversal);
    map
}

/// In-bounds up/down/left/right neighbours of `coordinate` that are not yet visited.
/// Walls are kept; each algorithm decides how to treat them.
pub fn neighbors4(
    coordinate: Coordinate,
    map: &GridMap,
    size: GridSize,
) -> SmallVec<[Coordinate; 4]> {
    Direction::ALL
        .iter()
        .filter_map(|dir| coordinate.step_within(*dir, size.rows, size.cols))
        .filter(|n| map.get(n).is_some_and(|cell| !cell.is_visited()))
        .collect()
}

pub fn is_end_node(cell: &Cell, end: Coordinate) -> bool {
    cell.coordinate() == end
}

/// Follows predecessors back from `end`. The result runs from the cell after the start up
/// to and including `end`, each cell a copy flagged as shortest path. Empty if `end` has no
/// predecessor.
pub fn reconstruct_path(end: Coordinate, map: &GridMap) -> Vec<Cell> {
    let mut path: Vec<Cell> = std::iter::successors(map.get(&end), |cell| {
        cell.previous().and_then(|p| map.get(&p))
    })
    .take_while(|cell| cell.previous().is_some())
    .take(map.len())
    .map(|cell| cell.copy_with(CellPatch::new().shortest_path(true)))
    .collect();
    path.reverse();
    path
}

/// Every coordinate of a `size` grid in row-major order.
pub(crate) fn coordinates(size: GridSize) -> impl Iterator<Item = Coordinate> {
    iproduct!(0..size.rows, 0..size.cols).map(|(row, col)| Coordinate::new(row, col))
}
