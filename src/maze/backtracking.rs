use rand::Rng;

use crate::cell::Coordinate;
use crate::maze::{shuffled_directions, MazeContext};

const ORIGIN: Coordinate = Coordinate::new(0, 0);

/// Depth-first carve from the top left corner, recursing once per opened passage.
///
/// Recursion depth grows with the number of carved cells, roughly half the cell count, so
/// very large grids should use [generate_iterative].
pub(crate) fn generate_recursive<R: Rng + ?Sized>(context: &mut MazeContext, rng: &mut R) {
    carve_from(context, ORIGIN, rng);
}

fn carve_from<R: Rng + ?Sized>(context: &mut MazeContext, current: Coordinate, rng: &mut R) {
    context.carve(current);
    for dir in shuffled_directions(rng) {
        if let Some((wall, next)) = context.unvisited_pair(current, dir) {
            context.carve(wall);
            carve_from(context, next, rng);
        }
    }
}

/// Same carving rule as [generate_recursive] driven by an explicit stack.
pub(crate) fn generate_iterative<R: Rng + ?Sized>(context: &mut MazeContext, rng: &mut R) {
    if !context.size.contains(&ORIGIN) {
        return;
    }
    context.carve(ORIGIN);
    let mut stack = vec![ORIGIN];
    while let Some(current) = stack.pop() {
        let open = shuffled_directions(rng)
            .into_iter()
            .find_map(|dir| context.unvisited_pair(current, dir));
        if let Some((wall, next)) = open {
            stack.push(current);
            context.carve(wall);
            context.carve(next);
            stack.push(next);
        }
    }
}
