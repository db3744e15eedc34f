//! Common test utilities and fixture helpers.
//!
//! Synthetic masks are drawn as ASCII art: `~` is water, `#` is land. The
//! first line of the drawing is the northmost latitude band, matching how a
//! map reads, and lines are reversed into the mask's south-to-north row
//! order.

use aquaroute_lib::{CellKind, GeoMask, GeoPoint, GridCell};

/// Build a mask from an ASCII drawing.
#[allow(dead_code)]
pub fn mask_from_ascii(art: &str) -> GeoMask {
    let rows: Vec<Vec<CellKind>> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .rev()
        .map(|line| {
            line.chars()
                .map(|c| match c {
                    '~' => CellKind::Water,
                    '#' => CellKind::Land,
                    other => panic!("unexpected mask character {other:?}"),
                })
                .collect()
        })
        .collect();
    GeoMask::from_rows(rows).expect("ascii fixture is rectangular")
}

/// Geographic point at the reference corner of a cell.
#[allow(dead_code)]
pub fn point_at(row: usize, col: usize) -> GeoPoint {
    GeoPoint::new(row as f64 - 90.0, col as f64 - 180.0).expect("corner in range")
}

/// Shorthand for a grid cell.
#[allow(dead_code)]
pub fn cell(row: usize, col: usize) -> GridCell {
    GridCell::new(row, col)
}
