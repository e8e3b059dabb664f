//! gridroute library entry points.
//!
//! This crate parses weighted grid problems, builds the 4-connected routing
//! graph, and finds cheapest paths with a bucket-queue (Dial's algorithm)
//! search. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod grid;
pub mod input;
pub mod output;
pub mod path;
pub mod routing;
pub mod search;

pub use error::{Error, Result};
pub use graph::{build_graph, Direction, Graph};
pub use grid::{Cell, Grid, IMPASSABLE, MAX_CELL_WEIGHT};
pub use input::{parse_problem, read_problem, Problem};
pub use output::{RouteRenderMode, RouteStep, RouteSummary, PATH_SENTINEL};
pub use path::{path_cost, reconstruct_path};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use search::{
    search, search_dijkstra, select_strategy, BucketQueue, DialSearch, DialStrategy,
    DijkstraStrategy, SearchAlgorithm, SearchStrategy, SearchTree,
};
