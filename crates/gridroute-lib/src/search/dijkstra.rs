use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::grid::Grid;

use super::SearchTree;

/// Run Dijkstra's algorithm from `start` using a binary heap.
///
/// Makes no assumption about the weight range beyond non-negativity.
pub fn search_dijkstra(graph: &Graph, grid: &Grid, start: usize) -> SearchTree {
    assert!(start < grid.len(), "start index {start} outside grid");

    let mut tree = SearchTree::rooted(grid.len(), start);
    let mut settled = vec![false; grid.len()];
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;
        tree.settled += 1;

        for &neighbour in graph.neighbours(entry.node) {
            let candidate = entry.cost + u64::from(grid.weight_at_index(neighbour));
            if tree.relax(neighbour, entry.node, candidate) {
                queue.push(QueueEntry::new(neighbour, candidate));
            }
        }
    }

    tracing::debug!(settled = tree.settled, "binary-heap search finished");

    tree
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: u64,
}

impl QueueEntry {
    fn new(node: usize, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
