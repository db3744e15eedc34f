use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::graph::NavigableGraph;
use crate::grid::GridCell;

/// Bounds applied during pathfinding.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum number of node expansions before the search gives up and
    /// reports no path. `None` bounds the search only by graph size.
    pub max_expanded: Option<usize>,
}

/// Run A* between two cells over unit-weight grid edges.
///
/// The heuristic is Manhattan distance in cell space with wrapped longitude,
/// which never overestimates the true remaining hop count, so returned paths
/// are minimum-cost. Equal-priority frontier entries expand in row-major cell
/// order, making the output path deterministic for identical inputs.
///
/// Returns `None` when the endpoints are disconnected or the expansion bound
/// is exceeded; both are normal outcomes callers must branch on.
pub fn find_route_a_star(
    graph: &NavigableGraph,
    start: GridCell,
    goal: GridCell,
    limits: SearchLimits,
) -> Option<Vec<GridCell>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut g_score: HashMap<GridCell, usize> = HashMap::new();
    let mut parents: HashMap<GridCell, Option<GridCell>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;

    g_score.insert(start, 0);
    parents.insert(start, None);
    queue.push(AStarEntry::new(start, 0, heuristic(graph, start, goal)));

    while let Some(entry) = queue.pop() {
        match g_score.get(&entry.node) {
            Some(score) if *score < entry.cost => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        expanded += 1;
        if let Some(bound) = limits.max_expanded {
            if expanded > bound {
                debug!(bound, "search expansion bound exceeded");
                return None;
            }
        }

        for &next in graph.neighbours(&entry.node) {
            let tentative_g = entry.cost + 1;
            if tentative_g < *g_score.get(&next).unwrap_or(&usize::MAX) {
                g_score.insert(next, tentative_g);
                parents.insert(next, Some(entry.node));
                queue.push(AStarEntry::new(next, tentative_g, heuristic(graph, next, goal)));
            }
        }
    }

    None
}

/// Admissible remaining-cost estimate: latitude rows do not wrap, longitude
/// columns take the shorter way around.
fn heuristic(graph: &NavigableGraph, from: GridCell, to: GridCell) -> usize {
    let d_row = from.row.abs_diff(to.row);
    let d_col = from.col.abs_diff(to.col);
    let wrapped_col = d_col.min(graph.lon_cells().saturating_sub(d_col));
    d_row + wrapped_col
}

fn reconstruct_path(
    parents: &HashMap<GridCell, Option<GridCell>>,
    start: GridCell,
    goal: GridCell,
) -> Vec<GridCell> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: GridCell,
    cost: usize,
    estimate: usize,
}

impl AStarEntry {
    fn new(node: GridCell, cost: usize, heuristic: usize) -> Self {
        Self {
            node,
            cost,
            estimate: cost + heuristic,
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate, with
        // row-major cell order breaking ties.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
