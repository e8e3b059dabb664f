use criterion::{criterion_group, criterion_main, Criterion};
use gridroute_lib::{
    build_graph, plan_route, search, search_dijkstra, Cell, Grid, RouteRequest, SearchAlgorithm,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

const SIDE: usize = 256;

/// Deterministic maze-like grid: weights cycle through 1..=9 with sparse walls
/// that always leave the first row and last column open.
fn build_fixture() -> Grid {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut weights = Vec::with_capacity(SIDE * SIDE);
    for row in 0..SIDE {
        for col in 0..SIDE {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let open_lane = row == 0 || col == SIDE - 1;
            let weight = if !open_lane && state % 8 == 0 {
                0
            } else {
                (state % 9 + 1) as u8
            };
            weights.push(weight);
        }
    }
    Grid::new(SIDE, SIDE, weights).expect("fixture grid is valid")
}

static GRID: Lazy<Grid> = Lazy::new(build_fixture);
static DIAL_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::dial(Cell::new(0, 0), Cell::new(SIDE - 1, SIDE - 1)));
static DIJKSTRA_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| DIAL_REQUEST.with_algorithm(SearchAlgorithm::Dijkstra));

fn benchmark_pathfinding(c: &mut Criterion) {
    let grid = &*GRID;
    let graph = build_graph(grid);

    c.bench_function("build_graph_256", |b| {
        b.iter(|| black_box(build_graph(grid).edge_count()));
    });

    c.bench_function("dial_search_256", |b| {
        b.iter(|| black_box(search(&graph, grid, 0).settled()));
    });

    c.bench_function("dijkstra_search_256", |b| {
        b.iter(|| black_box(search_dijkstra(&graph, grid, 0).settled()));
    });

    c.bench_function("dial_plan_corner_to_corner", |b| {
        let request = &*DIAL_REQUEST;
        b.iter(|| {
            let plan = plan_route(grid, request).expect("route exists");
            black_box(plan.cost)
        });
    });

    c.bench_function("dijkstra_plan_corner_to_corner", |b| {
        let request = &*DIJKSTRA_REQUEST;
        b.iter(|| {
            let plan = plan_route(grid, request).expect("route exists");
            black_box(plan.cost)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
