use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::Coordinate;
use crate::disjoint_set::DisjointSet;
use crate::grid::{coordinates, GridSize};
use crate::maze::MazeContext;

fn is_odd(n: usize) -> bool {
    n % 2 == 1
}

fn is_border(coordinate: &Coordinate, size: GridSize) -> bool {
    coordinate.row == 0
        || coordinate.col == 0
        || coordinate.row + 1 == size.rows
        || coordinate.col + 1 == size.cols
}

/// The two vertices an edge cell joins: left and right of it on an odd row, above and below
/// it on an odd column. Cells with even row and column join nothing.
fn flanking_vertices(edge: Coordinate) -> Option<(Coordinate, Coordinate)> {
    match (is_odd(edge.row), is_odd(edge.col)) {
        (true, false) => Some((
            Coordinate::new(edge.row, edge.col - 1),
            Coordinate::new(edge.row, edge.col + 1),
        )),
        (false, true) => Some((
            Coordinate::new(edge.row - 1, edge.col),
            Coordinate::new(edge.row + 1, edge.col),
        )),
        _ => None,
    }
}

/// Randomized Kruskal. Cells with an odd row and odd column are vertices, the other non-border
/// cells are candidate edges. Edges are tried in random order and an edge is opened,
/// together with both of its vertices, when it joins two vertices not yet connected.
pub(crate) fn generate<R: Rng + ?Sized>(context: &mut MazeContext, rng: &mut R) {
    let size = context.size;
    let mut vertices = DisjointSet::new();
    let mut edges = Vec::new();
    for coordinate in coordinates(size) {
        if is_odd(coordinate.row) && is_odd(coordinate.col) {
            vertices.add(coordinate);
        } else if !is_border(&coordinate, size) {
            edges.push(coordinate);
        }
    }
    if vertices.len() < 2 {
        warn!(
            "a {}x{} grid has {} maze vertices, nothing to connect",
            size.rows,
            size.cols,
            vertices.len()
        );
    }

    edges.shuffle(rng);
    for edge in edges {
        let Some((a, b)) = flanking_vertices(edge) else {
            continue;
        };
        let (Some(x), Some(y)) = (vertices.get(&a), vertices.get(&b)) else {
            continue;
        };
        if vertices.union(x, y) {
            context.carve(a);
            context.carve(edge);
            context.carve(b);
        }
    }
}
