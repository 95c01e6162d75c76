use petgraph::unionfind::UnionFind;

use crate::cell::{Coordinate, Direction};
use crate::grid::{GridMap, GridSize};

/// Connected components of the passable (non-wall) cells of a grid, under 4-connectivity.
#[derive(Clone, Debug)]
pub struct Components {
    size: GridSize,
    passable: Vec<bool>,
    sets: UnionFind<usize>,
}

/// Generates a [UnionFind] structure and links up passable grid neighbours into the same
/// components.
pub fn passable_components(map: &GridMap, size: GridSize) -> Components {
    let mut passable = vec![false; size.cell_count()];
    let mut sets = UnionFind::new(size.cell_count());
    for (coordinate, cell) in map {
        if cell.is_wall() || !size.contains(coordinate) {
            continue;
        }
        let ix = size.index_of(coordinate);
        passable[ix] = true;
        // Up and left neighbours suffice, the other two link back to this cell.
        for dir in [Direction::Up, Direction::Left] {
            let linked = coordinate
                .step_within(dir, size.rows, size.cols)
                .filter(|n| map.get(n).is_some_and(|c| !c.is_wall()));
            if let Some(n) = linked {
                sets.union(ix, size.index_of(&n));
            }
        }
    }
    Components {
        size,
        passable,
        sets,
    }
}

impl Components {
    fn passable_index(&self, coordinate: &Coordinate) -> Option<usize> {
        if !self.size.contains(coordinate) {
            return None;
        }
        let ix = self.size.index_of(coordinate);
        self.passable[ix].then_some(ix)
    }

    /// Both cells are passable and joined by a path of passable cells.
    pub fn connected(&self, a: &Coordinate, b: &Coordinate) -> bool {
        match (self.passable_index(a), self.passable_index(b)) {
            (Some(a), Some(b)) => self.sets.equiv(a, b),
            _ => false,
        }
    }

    /// Component representative of a passable cell.
    pub fn component_of(&self, coordinate: &Coordinate) -> Option<usize> {
        self.passable_index(coordinate).map(|ix| self.sets.find(ix))
    }

    /// Number of distinct components among passable cells.
    pub fn count(&self) -> usize {
        let mut roots = (0..self.passable.len())
            .filter(|ix| self.passable[*ix])
            .map(|ix| self.sets.find(ix))
            .collect::<Vec<_>>();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }
}
