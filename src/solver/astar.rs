use fxhash::FxHashMap;

use crate::cell::{Cell, Coordinate};
use crate::frontier::Frontier;
use crate::grid::{is_end_node, neighbors4, GridMap, GridSize};
use crate::solver::GridSolver;
use crate::HEURISTIC_FACTOR;

/// Manhattan distance scaled by [HEURISTIC_FACTOR].
pub fn heuristic(a: &Coordinate, b: &Coordinate) -> f64 {
    a.manhattan_distance(b) as f64 * HEURISTIC_FACTOR
}

/// Weighted shortest path search guided by a Manhattan distance heuristic.
///
/// The accumulated cost from the start (the g-score) is kept in each cell's distance; cells
/// are expanded in order of g-score plus heuristic.
///
/// A cell already in the open set is pushed again whenever a cheaper route to it turns up,
/// and the older entry is skipped when popped. The open set may therefore hold a cell more
/// than once; the visit order is the one of the cheapest entries.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: HEURISTIC_FACTOR,
        }
    }

    /// Just the Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        a.manhattan_distance(b) as f64 * self.heuristic_factor
    }
}

impl GridSolver for AstarSolver {
    fn traverse(
        &self,
        map: &mut GridMap,
        size: GridSize,
        start: Coordinate,
        end: Coordinate,
    ) -> Vec<Cell> {
        let mut visited = Vec::new();
        let mut frontier = Frontier::new();
        let mut f_score: FxHashMap<Coordinate, f64> = FxHashMap::default();

        let Some(first) = map.get_mut(&start) else {
            return visited;
        };
        first.set_distance(0.0);
        let start_f = self.heuristic(&start, &end);
        f_score.insert(start, start_f);
        frontier.push(start, start_f);

        while let Some((current, f)) = frontier.pop() {
            let Some(cell) = map.get_mut(&current) else {
                continue;
            };
            // Skip entries superseded by a better route
            if cell.is_visited() || f_score.get(&current).is_some_and(|best| f > *best) {
                continue;
            }
            if cell.is_wall() {
                continue;
            }
            if cell.distance().is_infinite() {
                break;
            }
            cell.set_as_visited();
            visited.push(cell.clone());
            if is_end_node(cell, end) {
                break;
            }
            let g = cell.distance();
            for n in neighbors4(current, map, size) {
                let neighbor = &mut map[&n];
                if neighbor.is_wall() {
                    continue;
                }
                let tentative = g + neighbor.weight().cost();
                if tentative < neighbor.distance() {
                    neighbor.set_distance(tentative);
                    neighbor.set_previous(Some(current));
                    let neighbor_f = tentative + self.heuristic(&n, &end);
                    f_score.insert(n, neighbor_f);
                    frontier.push(n, neighbor_f);
                }
            }
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::solver::dijkstra::DijkstraSolver;
    use crate::solver::tests::{barrier_grid, coords, open_grid, END, START};

    #[test]
    fn heuristic_is_scaled_manhattan() {
        let a = Coordinate::new(10, 10);
        let b = Coordinate::new(40, 38);
        assert_eq!(heuristic(&a, &a), 0.0);
        assert!((heuristic(&a, &b) - 58.058).abs() < 1e-9);
        assert_eq!(heuristic(&a, &b), heuristic(&b, &a));
        assert_eq!(AstarSolver::new().heuristic(&a, &b), heuristic(&a, &b));
    }

    /// On an open grid the heuristic leads straight to the end.
    #[test]
    fn heads_straight_for_the_end() {
        let result = AstarSolver::new().solve(&open_grid(), START, END).unwrap();
        assert_eq!(
            result.visited_coordinates(),
            coords(&[
                (5, 2),
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
        assert_eq!(
            result.path_coordinates(),
            result.visited_coordinates()[1..]
        );
    }

    #[test]
    fn barrier_leaves_fifteen_cells() {
        let result = AstarSolver::new().solve(&barrier_grid(), START, END).unwrap();
        assert!(result.path.is_empty());
        assert_eq!(
            result.visited_coordinates(),
            coords(&[
                (5, 2),
                (4, 2),
                (3, 2),
                (3, 3),
                (3, 4),
                (4, 3),
                (4, 4),
                (5, 3),
                (5, 4),
                (3, 1),
                (4, 1),
                (5, 1),
                (3, 0),
                (4, 0),
                (5, 0)
            ])
        );
    }

    /// Asserts that the optimal solution around a wall is found with and without
    /// the tie-breaking inflation.
    #[test]
    fn matches_dijkstra_cost() {
        //  _____
        // |S....|
        // |####.|
        // |.....|
        // |.####|
        // |....E|
        //  _____
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(4, 4);
        let mut grid = Grid::with_destinations(5, 5, start, end).unwrap();
        for col in 0..4 {
            grid.set_wall(Coordinate::new(1, col));
        }
        for col in 1..5 {
            grid.set_wall(Coordinate::new(3, col));
        }
        let expected = DijkstraSolver.solve(&grid, start, end).unwrap().path_cost();
        assert_eq!(expected, 16.0);
        for factor in [0.0, 1.0, HEURISTIC_FACTOR] {
            let solver = AstarSolver {
                heuristic_factor: factor,
            };
            let result = solver.solve(&grid, start, end).unwrap();
            assert_eq!(result.path_cost(), expected);
            assert_eq!(result.path.last().unwrap().coordinate(), end);
        }
    }
}
