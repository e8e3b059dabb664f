//! Search strategies implementing the Strategy pattern.
//!
//! This module provides the `SearchStrategy` trait and implementations for
//! the bucket-queue and binary-heap searches. The routing layer picks one via
//! [`select_strategy`] without knowing which algorithm runs underneath.

use crate::graph::Graph;
use crate::grid::Grid;

use super::{search, search_dijkstra, SearchAlgorithm, SearchTree};

/// Trait for shortest path strategies.
pub trait SearchStrategy: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Compute the shortest path tree rooted at the linear index `start`.
    fn search(&self, graph: &Graph, grid: &Grid, start: usize) -> SearchTree;
}

/// Dial's bucket-queue search. Requires small bounded cell weights.
#[derive(Debug, Clone, Default)]
pub struct DialStrategy;

impl SearchStrategy for DialStrategy {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Dial
    }

    fn search(&self, graph: &Graph, grid: &Grid, start: usize) -> SearchTree {
        search(graph, grid, start)
    }
}

/// Binary-heap Dijkstra search for arbitrary non-negative weights.
#[derive(Debug, Clone, Default)]
pub struct DijkstraStrategy;

impl SearchStrategy for DijkstraStrategy {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Dijkstra
    }

    fn search(&self, graph: &Graph, grid: &Grid, start: usize) -> SearchTree {
        search_dijkstra(graph, grid, start)
    }
}

/// Select the strategy for a given algorithm.
pub fn select_strategy(algorithm: SearchAlgorithm) -> Box<dyn SearchStrategy> {
    match algorithm {
        SearchAlgorithm::Dial => Box::new(DialStrategy),
        SearchAlgorithm::Dijkstra => Box::new(DijkstraStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    #[test]
    fn select_strategy_chooses_correct_type() {
        assert_eq!(
            select_strategy(SearchAlgorithm::Dial).algorithm(),
            SearchAlgorithm::Dial
        );
        assert_eq!(
            select_strategy(SearchAlgorithm::Dijkstra).algorithm(),
            SearchAlgorithm::Dijkstra
        );
    }

    #[test]
    fn strategies_agree_on_distances() {
        let grid = Grid::new(
            3,
            4,
            vec![
                3, 1, 4, 1, //
                5, 0, 2, 6, //
                5, 3, 5, 8,
            ],
        )
        .unwrap();
        let graph = build_graph(&grid);

        let dial = DialStrategy.search(&graph, &grid, 0);
        let heap = DijkstraStrategy.search(&graph, &grid, 0);
        assert_eq!(dial.distances(), heap.distances());
        assert_eq!(dial.settled(), heap.settled());
    }
}
