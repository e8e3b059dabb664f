use crate::grid::{Cell, Grid};
use crate::search::SearchTree;

/// Walk parent pointers from `end` back to `start`.
///
/// Returns the path ordered start-first, end-last, or `None` when the walk
/// hits a cell without a parent before reaching `start`. When `start == end`
/// the path is the single cell and `tree` is not consulted.
pub fn reconstruct_path(
    tree: &SearchTree,
    grid: &Grid,
    start: Cell,
    end: Cell,
) -> Option<Vec<Cell>> {
    if start == end {
        return Some(vec![start]);
    }

    let start_index = grid.index_of(start)?;
    let mut current = grid.index_of(end)?;
    let mut path = Vec::new();

    // A walk longer than the grid would mean a cycle in the parent pointers.
    for _ in 0..grid.len() {
        path.push(grid.cell_at(current));
        if current == start_index {
            path.reverse();
            return Some(path);
        }
        current = tree.parent(current)?;
    }

    None
}

/// Cost of `path` under the cell-entry model: the sum of the weights of
/// every cell after the first.
pub fn path_cost(grid: &Grid, path: &[Cell]) -> u64 {
    path.iter()
        .skip(1)
        .filter_map(|&cell| grid.weight_at(cell))
        .map(u64::from)
        .sum()
}
