//! The grid cell value type and the coordinate/direction vocabulary shared by every algorithm.
use core::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{GridError, Result};

/// Position of a cell on the grid, addressed by row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The coordinate `distance` cells away in direction `dir`, if it lies on a `rows` x `cols` grid.
    pub fn offset_within(
        &self,
        dir: Direction,
        distance: usize,
        rows: usize,
        cols: usize,
    ) -> Option<Coordinate> {
        let (d_row, d_col) = dir.delta();
        let row = self.row.checked_add_signed(d_row * distance as isize)?;
        let col = self.col.checked_add_signed(d_col * distance as isize)?;
        (row < rows && col < cols).then_some(Coordinate { row, col })
    }

    /// The adjacent coordinate in direction `dir`, if it lies on a `rows` x `cols` grid.
    pub fn step_within(&self, dir: Direction, rows: usize, cols: usize) -> Option<Coordinate> {
        self.offset_within(dir, 1, rows, cols)
    }

    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// Map keys use the `"{row}-{col}"` form.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = GridError;

    fn from_str(key: &str) -> Result<Coordinate> {
        let (row, col) = key.split_once('-').unwrap_or((key, ""));
        match (row.trim().parse::<usize>(), col.trim().parse::<usize>()) {
            (Ok(row), Ok(col)) => Ok(Coordinate::new(row, col)),
            _ => {
                let lossy = |s: &str| s.trim().parse::<f64>().unwrap_or(f64::NAN);
                Err(GridError::InvalidCoordinates {
                    row: lossy(row),
                    col: lossy(col),
                })
            }
        }
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = GridError;

    fn try_from((row, col): (f64, f64)) -> Result<Coordinate> {
        // usize::MAX rounds up to 2^64 as f64, so the bound is exclusive
        let valid =
            |v: f64| v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < usize::MAX as f64;
        if valid(row) && valid(col) {
            Ok(Coordinate::new(row as usize, col as usize))
        } else {
            Err(GridError::InvalidCoordinates { row, col })
        }
    }
}

impl TryFrom<(i64, i64)> for Coordinate {
    type Error = GridError;

    fn try_from((row, col): (i64, i64)) -> Result<Coordinate> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => Ok(Coordinate::new(row, col)),
            _ => Err(GridError::InvalidCoordinates {
                row: row as f64,
                col: col as f64,
            }),
        }
    }
}

/// The four cardinal moves. [Direction::ALL] is the canonical enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta of a single step.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Traversal cost of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Weight {
    #[default]
    Empty,
    Wall,
}

impl Weight {
    /// `1` for an empty cell; walls cost more than any finite path sum.
    pub fn cost(&self) -> f64 {
        match self {
            Weight::Empty => 1.0,
            Weight::Wall => f64::INFINITY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Plain,
    Start,
    Finish,
}

/// Identity of a cell value. Copies made through [Cell::copy_with] get a fresh one.
///
/// Ids come from one process-wide atomic counter. It is the only shared state in the crate
/// and it is only ever incremented, so concurrent runs never observe each other: two cells
/// can share an id only if one was cloned from the other. Ids are unique, not dense, and
/// carry no meaning beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u64);

static NEXT_CELL_ID: AtomicU64 = AtomicU64::new(0);

impl CellId {
    fn next() -> CellId {
        CellId(NEXT_CELL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Field overrides applied by [Cell::copy_with]. Unset fields are copied from the source cell.
#[derive(Clone, Debug, Default)]
pub struct CellPatch {
    pub role: Option<Role>,
    pub weight: Option<Weight>,
    pub distance: Option<f64>,
    pub previous: Option<Option<Coordinate>>,
    pub visited: Option<bool>,
    pub shortest_path: Option<bool>,
}

impl CellPatch {
    pub fn new() -> CellPatch {
        CellPatch::default()
    }
    pub fn role(mut self, role: Role) -> CellPatch {
        self.role = Some(role);
        self
    }
    pub fn weight(mut self, weight: Weight) -> CellPatch {
        self.weight = Some(weight);
        self
    }
    pub fn distance(mut self, distance: f64) -> CellPatch {
        self.distance = Some(distance);
        self
    }
    pub fn previous(mut self, previous: Option<Coordinate>) -> CellPatch {
        self.previous = Some(previous);
        self
    }
    pub fn visited(mut self, visited: bool) -> CellPatch {
        self.visited = Some(visited);
        self
    }
    pub fn shortest_path(mut self, shortest_path: bool) -> CellPatch {
        self.shortest_path = Some(shortest_path);
        self
    }
}

/// One grid position together with its traversal metadata.
///
/// `Clone` duplicates the value including its [CellId]; it is the same cell seen at
/// another moment. [Cell::copy] and [Cell::copy_with] produce a distinct cell.
#[derive(Clone, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    role: Role,
    weight: Weight,
    distance: f64,
    visited: bool,
    shortest_path: bool,
    previous: Option<Coordinate>,
    id: CellId,
}

impl Cell {
    pub fn new(coordinate: Coordinate) -> Cell {
        Cell::with_role(coordinate, Role::Plain)
    }

    pub fn with_role(coordinate: Coordinate, role: Role) -> Cell {
        Cell {
            coordinate,
            role,
            weight: Weight::Empty,
            distance: f64::INFINITY,
            visited: false,
            shortest_path: false,
            previous: None,
            id: CellId::next(),
        }
    }

    /// Builds a cell from independent start/finish flags, rejecting a cell that is both.
    pub fn from_flags(coordinate: Coordinate, is_start: bool, is_finish: bool) -> Result<Cell> {
        let role = match (is_start, is_finish) {
            (true, true) => {
                return Err(GridError::ConflictingRole {
                    row: coordinate.row,
                    col: coordinate.col,
                })
            }
            (true, false) => Role::Start,
            (false, true) => Role::Finish,
            (false, false) => Role::Plain,
        };
        Ok(Cell::with_role(coordinate, role))
    }

    /// Builds a plain cell from untrusted numeric coordinates.
    pub fn try_new(row: f64, col: f64) -> Result<Cell> {
        Coordinate::try_from((row, col)).map(Cell::new)
    }

    pub fn copy(&self) -> Cell {
        self.copy_with(CellPatch::default())
    }

    /// A new cell with every field taken from `self` unless overridden by `patch`.
    pub fn copy_with(&self, patch: CellPatch) -> Cell {
        Cell {
            coordinate: self.coordinate,
            role: patch.role.unwrap_or(self.role),
            weight: patch.weight.unwrap_or(self.weight),
            distance: patch.distance.unwrap_or(self.distance),
            visited: patch.visited.unwrap_or(self.visited),
            shortest_path: patch.shortest_path.unwrap_or(self.shortest_path),
            previous: patch.previous.unwrap_or(self.previous),
            id: CellId::next(),
        }
    }

    /// True when `other` holds the same state under a different identity.
    pub fn is_copy_of(&self, other: &Cell) -> bool {
        self.id != other.id
            && self.coordinate == other.coordinate
            && self.role == other.role
            && self.weight == other.weight
            && self.distance == other.distance
            && self.visited == other.visited
            && self.shortest_path == other.shortest_path
            && self.previous == other.previous
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
    pub fn row(&self) -> usize {
        self.coordinate.row
    }
    pub fn col(&self) -> usize {
        self.coordinate.col
    }
    pub fn id(&self) -> CellId {
        self.id
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }
    pub fn is_finish(&self) -> bool {
        self.role == Role::Finish
    }
    pub fn is_destination(&self) -> bool {
        self.role != Role::Plain
    }
    pub fn weight(&self) -> Weight {
        self.weight
    }
    pub fn distance(&self) -> f64 {
        self.distance
    }
    pub fn previous(&self) -> Option<Coordinate> {
        self.previous
    }
    pub fn is_wall(&self) -> bool {
        self.weight == Weight::Wall
    }
    pub fn is_visited(&self) -> bool {
        self.visited
    }
    pub fn is_shortest_path(&self) -> bool {
        self.shortest_path
    }

    pub fn set_as_visited(&mut self) {
        self.visited = true;
    }

    /// Turns the cell into a wall. Silently ignored on start and finish cells.
    pub fn set_as_wall(&mut self) {
        if !self.is_destination() {
            self.weight = Weight::Wall;
        }
    }

    pub(crate) fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    pub(crate) fn set_previous(&mut self, previous: Option<Coordinate>) {
        self.previous = previous;
    }

    /// Clears everything a previous search left behind.
    pub(crate) fn reset_traversal(&mut self) {
        self.distance = f64::INFINITY;
        self.visited = false;
        self.shortest_path = false;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_coordinates() {
        for (row, col) in [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (-1.0, 3.0),
            (2.0, -4.0),
            (f64::INFINITY, 1.0),
            (1.0, f64::NEG_INFINITY),
            (1.5, 2.0),
            (1e30, 0.0),
            (0.0, usize::MAX as f64),
        ] {
            assert!(matches!(
                Cell::try_new(row, col),
                Err(GridError::InvalidCoordinates { .. })
            ));
        }
        assert!(Coordinate::try_from((-3_i64, 2_i64)).is_err());
        let cell = Cell::try_new(4.0, 7.0).unwrap();
        assert_eq!(cell.coordinate(), Coordinate::new(4, 7));
    }

    #[test]
    fn rejects_conflicting_role() {
        let c = Coordinate::new(1, 1);
        assert_eq!(
            Cell::from_flags(c, true, true).unwrap_err(),
            GridError::ConflictingRole { row: 1, col: 1 }
        );
        assert!(Cell::from_flags(c, true, false).unwrap().is_start());
        assert!(Cell::from_flags(c, false, true).unwrap().is_finish());
    }

    /// A copy differs from its source only in identity.
    #[test]
    fn copy_gets_new_identity() {
        let mut cell = Cell::new(Coordinate::new(3, 2));
        cell.set_as_visited();
        let copy = cell.copy_with(CellPatch::default());
        assert_ne!(copy.id(), cell.id());
        assert!(copy.is_copy_of(&cell));
        assert!(copy.is_visited());
        assert_eq!(cell.clone().id(), cell.id());
    }

    #[test]
    fn copy_with_applies_overrides() {
        let cell = Cell::new(Coordinate::new(0, 5));
        let copy = cell.copy_with(
            CellPatch::new()
                .weight(Weight::Wall)
                .shortest_path(true)
                .previous(Some(Coordinate::new(0, 4))),
        );
        assert!(copy.is_wall());
        assert!(copy.is_shortest_path());
        assert_eq!(copy.previous(), Some(Coordinate::new(0, 4)));
        assert!(!cell.is_wall());
        assert_eq!(copy.distance(), f64::INFINITY);
    }

    #[test]
    fn destinations_are_never_walls() {
        let mut start = Cell::with_role(Coordinate::new(0, 0), Role::Start);
        let mut finish = Cell::with_role(Coordinate::new(0, 1), Role::Finish);
        let mut plain = Cell::new(Coordinate::new(0, 2));
        start.set_as_wall();
        finish.set_as_wall();
        plain.set_as_wall();
        plain.set_as_wall();
        assert!(!start.is_wall());
        assert!(!finish.is_wall());
        assert!(plain.is_wall());
    }

    #[test]
    fn key_round_trip() {
        let c = Coordinate::new(12, 3);
        assert_eq!(c.to_string(), "12-3");
        assert_eq!("12-3".parse::<Coordinate>().unwrap(), c);
        assert!("x-3".parse::<Coordinate>().is_err());
        assert!("-1-3".parse::<Coordinate>().is_err());
        assert!("1.5-3".parse::<Coordinate>().is_err());
        assert!(matches!(
            "4-".parse::<Coordinate>(),
            Err(GridError::InvalidCoordinates { .. })
        ));
        // Beyond the 2^53 range where f64 holds every integer exactly
        let far = Coordinate::new((1_usize << 53) + 1, 7);
        assert_eq!(far.to_string().parse::<Coordinate>().unwrap(), far);
    }

    #[test]
    fn steps_stay_in_bounds() {
        let c = Coordinate::new(0, 1);
        assert_eq!(c.step_within(Direction::Up, 3, 3), None);
        assert_eq!(
            c.step_within(Direction::Down, 3, 3),
            Some(Coordinate::new(1, 1))
        );
        assert_eq!(
            c.offset_within(Direction::Right, 2, 3, 3),
            None
        );
        assert_eq!(
            c.offset_within(Direction::Down, 2, 3, 3),
            Some(Coordinate::new(2, 1))
        );
        assert_eq!(Weight::Wall.cost(), f64::INFINITY);
        assert_eq!(Weight::Empty.cost(), 1.0);
    }
}
