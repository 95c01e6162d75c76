use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::Coordinate;

struct SmallestCostHolder {
    estimated_cost: f64,
    sequence: u64,
    coordinate: Coordinate,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest estimated cost first, then earliest discovery
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority open set of grid coordinates. Equal priorities pop in insertion order, so runs
/// over the same grid always expand cells in the same order.
///
/// A coordinate may be pushed again with a better priority; the caller discards the stale
/// entry when it pops.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<SmallestCostHolder>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    pub fn push(&mut self, coordinate: Coordinate, estimated_cost: f64) {
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            sequence: self.next_sequence,
            coordinate,
        });
        self.next_sequence += 1;
    }

    /// Removes the entry with the smallest priority, returning its coordinate and priority.
    pub fn pop(&mut self) -> Option<(Coordinate, f64)> {
        self.heap
            .pop()
            .map(|holder| (holder.coordinate, holder.estimated_cost))
    }
}
