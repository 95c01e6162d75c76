use crate::cell::{Cell, Coordinate};
use crate::grid::{is_end_node, neighbors4, GridMap, GridSize};
use crate::solver::GridSolver;

/// Depth-first search. Reaches the end when it can, along whatever path the stack order
/// gives, which is usually not the shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn traverse(
        &self,
        map: &mut GridMap,
        size: GridSize,
        start: Coordinate,
        end: Coordinate,
    ) -> Vec<Cell> {
        let mut visited = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            let Some(cell) = map.get_mut(&current) else {
                continue;
            };
            if cell.is_visited() || cell.is_wall() {
                continue;
            }
            cell.set_as_visited();
            visited.push(cell.clone());
            if is_end_node(cell, end) {
                break;
            }
            // Predecessors are recorded on push; the latest push is the one popped first
            for n in neighbors4(current, map, size) {
                map[&n].set_previous(Some(current));
                stack.push(n);
            }
        }
        visited
    }
}
