//! Common test utilities and fixture grids.

use gridroute_lib::{Grid, MAX_CELL_WEIGHT};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// 3x3 grid of unit weights with an impassable centre.
#[allow(dead_code)]
pub fn ring_grid() -> Grid {
    Grid::new(3, 3, vec![1, 1, 1, 1, 0, 1, 1, 1, 1]).expect("valid ring grid")
}

/// Generate a `rows x cols` grid from `seed`, with roughly `wall_percent`
/// percent of the cells impassable and the rest weighted `1..=9`.
#[allow(dead_code)]
pub fn generated_grid(seed: u64, rows: usize, cols: usize, wall_percent: u32) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let weights = (0..rows * cols)
        .map(|_| {
            if rng.gen_range(0..100) < wall_percent {
                0
            } else {
                rng.gen_range(1..=MAX_CELL_WEIGHT)
            }
        })
        .collect();
    Grid::new(rows, cols, weights).expect("generated grid is valid")
}
