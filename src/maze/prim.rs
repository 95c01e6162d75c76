use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::cell::{Coordinate, Direction};
use crate::grid::FxIndexSet;
use crate::maze::MazeContext;

/// Random index in `1..len - 1` with the same parity as `anchor`, so that the carved lattice
/// runs through `anchor`. Falls back to `anchor` on grids too thin to have such an index.
fn aligned_index<R: Rng + ?Sized>(rng: &mut R, len: usize, anchor: usize) -> usize {
    let candidates = (1..len.saturating_sub(1))
        .filter(|ix| ix % 2 == anchor % 2)
        .collect::<SmallVec<[usize; 32]>>();
    candidates.choose(rng).copied().unwrap_or(anchor)
}

/// Randomized Prim. Grows the maze from a random interior cell two steps at a time: a random
/// frontier cell is opened together with the wall between it and a random carved cell two
/// steps away, and its own walled cells two steps away join the frontier.
pub(crate) fn generate<R: Rng + ?Sized>(context: &mut MazeContext, rng: &mut R) {
    let seed = Coordinate::new(
        aligned_index(rng, context.size.rows, context.start.row),
        aligned_index(rng, context.size.cols, context.start.col),
    );
    context.carve(seed);

    let mut frontier: FxIndexSet<Coordinate> = Direction::ALL
        .iter()
        .filter_map(|dir| context.neighbor(seed, *dir, 2))
        .collect();

    while !frontier.is_empty() {
        let ix = rng.gen_range(0..frontier.len());
        let Some(current) = frontier.swap_remove_index(ix) else {
            break;
        };
        let mut connectors: SmallVec<[Coordinate; 4]> = SmallVec::new();
        for dir in Direction::ALL {
            let (Some(wall), Some(beyond)) = (
                context.neighbor(current, dir, 1),
                context.neighbor(current, dir, 2),
            ) else {
                continue;
            };
            if context.is_wall(&beyond) {
                frontier.insert(beyond);
            } else {
                connectors.push(wall);
            }
        }
        if let Some(wall) = connectors.choose(rng).copied() {
            context.carve(wall);
            context.carve(current);
        }
    }
}
