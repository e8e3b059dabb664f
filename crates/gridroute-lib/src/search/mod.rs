//! Single-source shortest path searches over a grid [`Graph`].
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported search algorithms (Dial, Dijkstra)
//! - [`SearchTree`] - Distances and parent pointers produced by a search
//! - [`SearchStrategy`] - Strategy trait implemented by each algorithm
//! - [`search`] - Bucket-queue search, the default entry point
//!
//! # Cost model
//!
//! The cost of a path is the sum of the weights of the cells it enters. The
//! start cell's own weight is never counted.
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`SearchStrategy`] implementation so the
//! routing layer can swap the bounded-weight bucket queue for a general
//! binary-heap search without changing the orchestration.

mod dial;
mod dijkstra;
mod strategy;

pub use dial::{search, BucketQueue, DialSearch};
pub use dijkstra::search_dijkstra;
pub use strategy::{select_strategy, DialStrategy, DijkstraStrategy, SearchStrategy};

use std::fmt;

use serde::Serialize;

/// Supported shortest path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Dial's algorithm: a ring of FIFO buckets indexed by distance.
    #[default]
    Dial,
    /// Dijkstra's algorithm backed by a binary heap.
    Dijkstra,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::Dial => "dial",
            SearchAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// Shortest path tree rooted at a start cell.
///
/// `None` distances mark unreached cells; `None` parents mark cells with no
/// predecessor. The start cell is its own parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    start: usize,
    distances: Vec<Option<u64>>,
    parents: Vec<Option<usize>>,
    settled: usize,
}

impl SearchTree {
    /// Fresh tree for `len` nodes with only `start` reached.
    fn rooted(len: usize, start: usize) -> Self {
        let mut distances = vec![None; len];
        let mut parents = vec![None; len];
        distances[start] = Some(0);
        parents[start] = Some(start);
        Self {
            start,
            distances,
            parents,
            settled: 0,
        }
    }

    /// Try to lower the distance of `node` to `candidate` via `parent`.
    ///
    /// Returns `true` when the candidate improved the known distance.
    fn relax(&mut self, node: usize, parent: usize, candidate: u64) -> bool {
        let improves = match self.distances[node] {
            Some(known) => candidate < known,
            None => true,
        };
        if improves {
            self.distances[node] = Some(candidate);
            self.parents[node] = Some(parent);
        }
        improves
    }

    /// Index of the start cell.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Shortest known distance to `index`, or `None` if unreached.
    pub fn distance(&self, index: usize) -> Option<u64> {
        self.distances.get(index).copied().flatten()
    }

    /// Predecessor of `index` on its shortest path.
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents.get(index).copied().flatten()
    }

    pub fn is_reached(&self, index: usize) -> bool {
        self.distance(index).is_some()
    }

    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Number of cells whose distance was finalised.
    pub fn settled(&self) -> usize {
        self.settled
    }
}
