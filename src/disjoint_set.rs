//! Union-find over arbitrary hashable values, used by Kruskal's maze generator.
use std::cmp::Ordering;
use std::hash::Hash;

use crate::grid::FxIndexSet;

/// Handle of a value added to a [DisjointSet].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetNode(usize);

/// Disjoint-set forest with path compression on [find](DisjointSet::find) and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    nodes: FxIndexSet<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<T: Hash + Eq> Default for DisjointSet<T> {
    fn default() -> Self {
        DisjointSet {
            nodes: FxIndexSet::default(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }
}

impl<T: Hash + Eq> DisjointSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` as a singleton set. Adding a value twice returns the existing node.
    pub fn add(&mut self, value: T) -> SetNode {
        let (ix, inserted) = self.nodes.insert_full(value);
        if inserted {
            self.parent.push(ix);
            self.rank.push(0);
        }
        SetNode(ix)
    }

    pub fn get(&self, value: &T) -> Option<SetNode> {
        self.nodes.get_index_of(value).map(SetNode)
    }

    pub fn value(&self, node: SetNode) -> Option<&T> {
        self.nodes.get_index(node.0)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `node`. Every node on the way is pointed at the root.
    pub fn find(&mut self, node: SetNode) -> SetNode {
        let mut root = node.0;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = node.0;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        SetNode(root)
    }

    /// Merges the sets containing `x` and `y`. Returns false if they were already merged.
    pub fn union(&mut self, x: SetNode, y: SetNode) -> bool {
        let root_x = self.find(x).0;
        let root_y = self.find(y).0;
        if root_x == root_y {
            return false;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, x: SetNode, y: SetNode) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    pub fn set_count(&mut self) -> usize {
        (0..self.len())
            .filter(|ix| self.find(SetNode(*ix)).0 == *ix)
            .count()
    }
}
