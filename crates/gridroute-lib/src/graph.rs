use crate::grid::Grid;

/// Neighbour offsets in the order edges are emitted: up, down, left, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Linear index of the neighbour of `index` in this direction, if it
    /// stays inside a `rows x cols` grid.
    fn step(self, index: usize, rows: usize, cols: usize) -> Option<usize> {
        let row = index / cols;
        let col = index % cols;
        match self {
            Direction::Up if row > 0 => Some(index - cols),
            Direction::Down if row + 1 < rows => Some(index + cols),
            Direction::Left if col > 0 => Some(index - 1),
            Direction::Right if col + 1 < cols => Some(index + 1),
            _ => None,
        }
    }
}

/// 4-connected adjacency derived from a [`Grid`].
///
/// Node identifiers are linear cell indices. Impassable cells are present as
/// nodes but have no edges in either direction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Return the neighbours for a given cell index.
    pub fn neighbours(&self, index: usize) -> &[usize] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of nodes (one per grid cell).
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// Build the routing graph for `grid`.
///
/// Every passable cell links to each passable orthogonal neighbour. Each
/// direction is added from its source cell, so edges come in symmetric pairs.
pub fn build_graph(grid: &Grid) -> Graph {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); grid.len()];

    for (index, edges) in adjacency.iter_mut().enumerate() {
        if !grid.is_passable_index(index) {
            continue;
        }
        edges.extend(
            Direction::ALL
                .iter()
                .filter_map(|direction| direction.step(index, rows, cols))
                .filter(|&neighbour| grid.is_passable_index(neighbour)),
        );
    }

    Graph { adjacency }
}
