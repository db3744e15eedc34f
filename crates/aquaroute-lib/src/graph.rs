use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::grid::GridCell;
use crate::mask::{CellKind, GeoMask};

/// Graph of water cells connected to their 4-connected water neighbours.
///
/// Adjacency is undirected with unit edge weight and lives behind an `Arc`,
/// so a built graph is cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct NavigableGraph {
    lat_cells: usize,
    lon_cells: usize,
    edge_count: usize,
    adjacency: Arc<HashMap<GridCell, Vec<GridCell>>>,
}

impl NavigableGraph {
    /// Return the neighbours of a cell; unknown cells have none.
    pub fn neighbours(&self, cell: &GridCell) -> &[GridCell] {
        self.adjacency
            .get(cell)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the cell participates in the graph.
    pub fn contains(&self, cell: &GridCell) -> bool {
        self.adjacency.contains_key(cell)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn lat_cells(&self) -> usize {
        self.lat_cells
    }

    pub fn lon_cells(&self) -> usize {
        self.lon_cells
    }
}

/// Materialize the navigable graph for a mask.
///
/// Walks the interior latitude rows (the two polar boundary rows are
/// excluded to avoid degenerate wrap at the poles) and every longitude
/// column with wrap-around lookup, inserting the south and east edge
/// whenever both endpoints are water. Each undirected edge is inserted
/// exactly once, from its lower endpoint, so an identical mask always
/// yields identical node and edge sets.
pub fn build_navigable_graph(mask: &GeoMask) -> NavigableGraph {
    let lat_cells = mask.lat_cells();
    let lon_cells = mask.lon_cells();

    let mut adjacency: HashMap<GridCell, Vec<GridCell>> = HashMap::new();
    let mut edge_count = 0usize;

    for row in 1..lat_cells.saturating_sub(1) {
        for col in 0..lon_cells {
            if mask.cell_state(row, col) != CellKind::Water {
                continue;
            }
            let cell = GridCell::new(row, col);
            adjacency.entry(cell).or_default();

            let south = GridCell::new(row + 1, col);
            if mask.cell_state(south.row, south.col) == CellKind::Water {
                connect(&mut adjacency, cell, south);
                edge_count += 1;
            }

            let east = GridCell::new(row, (col + 1) % lon_cells);
            // On a two-column grid the wrap edge would duplicate the interior
            // edge; a one-column grid would self-loop.
            let degenerate_wrap = east.col < col && lon_cells <= 2;
            if east != cell
                && !degenerate_wrap
                && mask.cell_state(east.row, east.col) == CellKind::Water
            {
                connect(&mut adjacency, cell, east);
                edge_count += 1;
            }
        }
    }

    info!(
        nodes = adjacency.len(),
        edges = edge_count,
        "navigable graph built"
    );

    NavigableGraph {
        lat_cells,
        lon_cells,
        edge_count,
        adjacency: Arc::new(adjacency),
    }
}

fn connect(adjacency: &mut HashMap<GridCell, Vec<GridCell>>, a: GridCell, b: GridCell) {
    adjacency.entry(a).or_default().push(b);
    adjacency.entry(b).or_default().push(a);
}
