use std::collections::VecDeque;

use crate::graph::Graph;
use crate::grid::Grid;

use super::SearchTree;

/// Ring of FIFO buckets keyed by `distance % (max_weight + 1)`.
///
/// Every push lands at most `max_weight` levels ahead of the level being
/// drained, so the ring never wraps onto an undrained bucket. Entries within
/// a bucket are returned in insertion order.
#[derive(Debug, Clone)]
pub struct BucketQueue {
    buckets: Vec<VecDeque<usize>>,
    level: u64,
    active: usize,
}

impl BucketQueue {
    /// Create a queue for edge weights up to `max_weight` (at least 1).
    pub fn new(max_weight: u8) -> Self {
        let ring = usize::from(max_weight.max(1)) + 1;
        Self {
            buckets: vec![VecDeque::new(); ring],
            level: 0,
            active: 0,
        }
    }

    /// Number of buckets in the ring.
    pub fn ring_size(&self) -> usize {
        self.buckets.len()
    }

    /// Current level cursor. Only ever moves forward.
    pub fn level(&self) -> u64 {
        self.level
    }

    /// Entries pushed but not yet popped, stale ones included.
    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    fn slot(&self, distance: u64) -> usize {
        (distance % self.buckets.len() as u64) as usize
    }

    /// Enqueue `node` at `distance`.
    pub fn push(&mut self, node: usize, distance: u64) {
        let slot = self.slot(distance);
        self.buckets[slot].push_back(node);
        self.active += 1;
    }

    /// Pop the oldest entry of the lowest non-empty level.
    pub fn pop(&mut self) -> Option<usize> {
        if self.active == 0 {
            return None;
        }
        loop {
            let slot = self.slot(self.level);
            if let Some(node) = self.buckets[slot].pop_front() {
                self.active -= 1;
                return Some(node);
            }
            self.level += 1;
        }
    }
}

/// State for one bucket-queue search: distances, parents, settled flags and
/// the bucket ring, all sized to the grid.
#[derive(Debug)]
pub struct DialSearch<'a> {
    graph: &'a Graph,
    grid: &'a Grid,
    tree: SearchTree,
    visited: Vec<bool>,
    queue: BucketQueue,
    relaxations: usize,
    stale: usize,
}

impl<'a> DialSearch<'a> {
    /// Prepare a search from the cell at linear index `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid index into `grid`.
    pub fn new(graph: &'a Graph, grid: &'a Grid, start: usize) -> Self {
        assert!(start < grid.len(), "start index {start} outside grid");

        let mut queue = BucketQueue::new(grid.max_weight());
        queue.push(start, 0);

        Self {
            graph,
            grid,
            tree: SearchTree::rooted(grid.len(), start),
            visited: vec![false; grid.len()],
            queue,
            relaxations: 0,
            stale: 0,
        }
    }

    /// Drain the queue and return the finished shortest path tree.
    pub fn run(mut self) -> SearchTree {
        self.drain();
        self.tree
    }

    /// Successful distance improvements so far.
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }

    /// Popped entries discarded because their cell was already settled.
    pub fn stale(&self) -> usize {
        self.stale
    }

    fn drain(&mut self) {
        while let Some(current) = self.queue.pop() {
            if self.visited[current] {
                self.stale += 1;
                continue;
            }
            self.settle(current);
        }

        tracing::debug!(
            settled = self.tree.settled,
            relaxations = self.relaxations,
            stale = self.stale,
            levels = self.queue.level(),
            "bucket-queue search finished"
        );
    }

    fn settle(&mut self, current: usize) {
        self.visited[current] = true;
        self.tree.settled += 1;

        let Some(base) = self.tree.distance(current) else {
            return;
        };

        for &neighbour in self.graph.neighbours(current) {
            let candidate = base + u64::from(self.grid.weight_at_index(neighbour));
            if self.tree.relax(neighbour, current, candidate) {
                self.queue.push(neighbour, candidate);
                self.relaxations += 1;
            }
        }
    }
}

/// Run Dial's algorithm from `start` (a linear cell index).
pub fn search(graph: &Graph, grid: &Grid, start: usize) -> SearchTree {
    DialSearch::new(graph, grid, start).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn ring_size_tracks_max_weight() {
        assert_eq!(BucketQueue::new(9).ring_size(), 10);
        assert_eq!(BucketQueue::new(3).ring_size(), 4);
        assert_eq!(BucketQueue::new(0).ring_size(), 2);
    }

    #[test]
    fn pop_is_fifo_within_a_level() {
        let mut queue = BucketQueue::new(9);
        queue.push(7, 2);
        queue.push(3, 2);
        queue.push(5, 1);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
        assert_eq!(queue.level(), 2);
    }

    #[test]
    fn level_cursor_wraps_around_the_ring() {
        let mut queue = BucketQueue::new(2);
        queue.push(0, 0);
        assert_eq!(queue.pop(), Some(0));
        queue.push(1, 2);
        assert_eq!(queue.pop(), Some(1));
        queue.push(2, 4);
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.level(), 4);
    }

    #[test]
    fn isolated_start_settles_only_itself() {
        let grid = Grid::new(1, 3, vec![4, 0, 4]).unwrap();
        let graph = build_graph(&grid);
        let tree = search(&graph, &grid, 0);
        assert_eq!(tree.settled(), 1);
        assert_eq!(tree.distance(0), Some(0));
        assert_eq!(tree.distance(2), None);
        assert_eq!(tree.parent(2), None);
    }

    #[test]
    fn prefers_cheap_detour_over_heavy_cell() {
        let grid = Grid::new(2, 3, vec![1, 9, 1, 1, 1, 1]).unwrap();
        let graph = build_graph(&grid);
        let tree = search(&graph, &grid, 0);
        assert_eq!(tree.distance(2), Some(4));
        assert_eq!(tree.parent(2), Some(5));
        assert_eq!(tree.distance(1), Some(9));
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.settled(), 6);
    }

    #[test]
    fn heavy_cell_is_relaxed_once_from_its_first_settled_neighbour() {
        // Entry cost depends only on the entered cell, so the first settled
        // neighbour already offers the best distance and nothing goes stale.
        let grid = Grid::new(2, 3, vec![1, 9, 1, 1, 1, 1]).unwrap();
        let graph = build_graph(&grid);
        let mut search = DialSearch::new(&graph, &grid, 0);
        search.drain();
        assert_eq!(search.relaxations(), 5);
        assert_eq!(search.stale(), 0);
        assert_eq!(search.tree.distance(1), Some(9));
        assert_eq!(search.tree.parent(1), Some(0));
    }

    #[test]
    fn duplicate_entries_for_settled_cells_are_discarded() {
        let grid = Grid::new(1, 3, vec![2, 5, 1]).unwrap();
        let graph = build_graph(&grid);
        let mut search = DialSearch::new(&graph, &grid, 0);
        // Extra copies queued at levels that do not improve on the real ones.
        search.queue.push(0, 3);
        search.queue.push(1, 5);
        search.drain();

        assert_eq!(search.stale(), 2);
        assert_eq!(search.tree.settled(), 3);
        assert_eq!(search.tree.distance(1), Some(5));
        assert_eq!(search.tree.distance(2), Some(6));
        assert_eq!(search.tree.parent(2), Some(1));
        assert!(search.queue.is_empty());
    }
}
