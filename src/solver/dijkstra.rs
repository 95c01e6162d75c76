use crate::cell::{Cell, Coordinate};
use crate::frontier::Frontier;
use crate::grid::{is_end_node, neighbors4, GridMap, GridSize};
use crate::solver::GridSolver;

/// Weighted shortest path search without a heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn traverse(
        &self,
        map: &mut GridMap,
        size: GridSize,
        start: Coordinate,
        end: Coordinate,
    ) -> Vec<Cell> {
        let mut visited = Vec::new();
        let mut frontier = Frontier::new();
        let Some(first) = map.get_mut(&start) else {
            return visited;
        };
        first.set_distance(0.0);
        frontier.push(start, 0.0);

        while let Some((current, distance)) = frontier.pop() {
            let Some(cell) = map.get_mut(&current) else {
                continue;
            };
            // A cell may have been pushed several times as shorter routes were found.
            // Only its best entry is expanded.
            if cell.is_visited() || distance > cell.distance() {
                continue;
            }
            if cell.is_wall() {
                continue;
            }
            // Everything left is disconnected from the start
            if cell.distance().is_infinite() {
                break;
            }
            cell.set_as_visited();
            visited.push(cell.clone());
            if is_end_node(cell, end) {
                break;
            }
            for n in neighbors4(current, map, size) {
                let neighbor = &mut map[&n];
                let tentative = distance + neighbor.weight().cost();
                if tentative < neighbor.distance() {
                    neighbor.set_distance(tentative);
                    neighbor.set_previous(Some(current));
                    frontier.push(n, tentative);
                }
            }
        }
        visited
    }
}
