use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::cell::{Cell, Coordinate};
use crate::grid::{is_end_node, neighbors4, GridMap, GridSize};
use crate::solver::GridSolver;

/// Breadth-first search. Finds a path with the fewest steps, ignoring weights.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn traverse(
        &self,
        map: &mut GridMap,
        size: GridSize,
        start: Coordinate,
        end: Coordinate,
    ) -> Vec<Cell> {
        let mut visited = Vec::new();
        let mut queue = VecDeque::from([start]);
        let mut discovered = FxHashSet::default();
        discovered.insert(start);

        while let Some(current) = queue.pop_front() {
            let Some(cell) = map.get_mut(&current) else {
                continue;
            };
            cell.set_as_visited();
            visited.push(cell.clone());
            if is_end_node(cell, end) {
                break;
            }
            // A wall only gets here as the start cell, it is a dead end
            if cell.is_wall() {
                continue;
            }
            for n in neighbors4(current, map, size) {
                let neighbor = &mut map[&n];
                // The first arrival is one of the fewest-step arrivals
                if neighbor.is_wall() || !discovered.insert(n) {
                    continue;
                }
                neighbor.set_previous(Some(current));
                queue.push_back(n);
            }
        }
        visited
    }
}
