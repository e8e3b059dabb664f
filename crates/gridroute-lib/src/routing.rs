//! Route planning on a weighted grid.
//!
//! [`plan_route`] is the main entry point: it validates the endpoints, builds
//! the 4-connected graph, runs the selected
//! [`SearchStrategy`](crate::search::SearchStrategy) and turns the
//! resulting parent pointers into a [`RoutePlan`].
//!
//! # Example
//!
//! ```
//! use gridroute_lib::{plan_route, Cell, Grid, RouteRequest};
//!
//! let grid = Grid::new(3, 3, vec![1, 1, 1, 1, 0, 1, 1, 1, 1])?;
//! let plan = plan_route(&grid, &RouteRequest::dial(Cell::new(0, 0), Cell::new(2, 2)))?;
//! assert_eq!(plan.cost, 4);
//! # Ok::<(), gridroute_lib::Error>(())
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::grid::{Cell, Grid};
use crate::path::{path_cost, reconstruct_path};
use crate::search::{select_strategy, SearchAlgorithm};

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: Cell,
    pub end: Cell,
    pub algorithm: SearchAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for bucket-queue routes.
    pub fn dial(start: Cell, end: Cell) -> Self {
        Self {
            start,
            end,
            algorithm: SearchAlgorithm::Dial,
        }
    }

    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoutePlan {
    pub algorithm: SearchAlgorithm,
    pub start: Cell,
    pub end: Cell,
    /// Sum of the weights of every entered cell.
    pub cost: u64,
    pub steps: Vec<Cell>,
    /// Cells settled by the search; zero when no search was needed.
    pub settled: usize,
}

impl RoutePlan {
    /// Number of moves in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a cell to its linear index, rejecting cells outside the grid.
fn resolve_cell(grid: &Grid, cell: Cell) -> Result<usize> {
    grid.index_of(cell).ok_or_else(|| Error::CellOutOfBounds {
        row: i64::try_from(cell.row).unwrap_or(i64::MAX),
        col: i64::try_from(cell.col).unwrap_or(i64::MAX),
        rows: grid.rows(),
        cols: grid.cols(),
    })
}

/// Compute the cheapest route between the request's endpoints.
///
/// 1. Validates both endpoints against the grid bounds
/// 2. Short-circuits when start and end coincide
/// 3. Builds the graph and runs the selected strategy
/// 4. Reconstructs the path, failing with [`Error::Unreachable`] when none exists
pub fn plan_route(grid: &Grid, request: &RouteRequest) -> Result<RoutePlan> {
    // Step 1: Validate endpoints
    let start_index = resolve_cell(grid, request.start)?;
    resolve_cell(grid, request.end)?;

    // Step 2: Trivial route
    if request.start == request.end {
        return Ok(RoutePlan {
            algorithm: request.algorithm,
            start: request.start,
            end: request.end,
            cost: 0,
            steps: vec![request.start],
            settled: 0,
        });
    }

    // Step 3: Build graph and search
    let graph = build_graph(grid);
    let strategy = select_strategy(request.algorithm);
    tracing::debug!(
        algorithm = %strategy.algorithm(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "searching from {}",
        request.start
    );
    let tree = strategy.search(&graph, grid, start_index);

    // Step 4: Reconstruct
    let steps = reconstruct_path(&tree, grid, request.start, request.end).ok_or(
        Error::Unreachable {
            start: request.start,
            end: request.end,
        },
    )?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start,
        end: request.end,
        cost: path_cost(grid, &steps),
        steps,
        settled: tree.settled(),
    })
}
