use serde::Serialize;

use crate::geo::GeoPoint;

/// Discrete mask cell identified by latitude band and longitude band.
///
/// `Ord` is row-major so collections of cells (and search tie-breaks) have a
/// single canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Bidirectional mapping between geographic coordinates and grid cells.
///
/// Negative and boundary coordinates normalize via modular wrap rather than
/// clamping, so -180 and +180 degrees of longitude land in adjacent or
/// identical bands, consistent with a spherical world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridProjection {
    lat_cells: usize,
    lon_cells: usize,
}

impl GridProjection {
    pub fn new(lat_cells: usize, lon_cells: usize) -> Self {
        Self {
            lat_cells,
            lon_cells,
        }
    }

    pub fn lat_cells(&self) -> usize {
        self.lat_cells
    }

    pub fn lon_cells(&self) -> usize {
        self.lon_cells
    }

    /// Map a geographic point to its grid cell.
    pub fn cell_of(&self, point: &GeoPoint) -> GridCell {
        let row = wrap_band(point.latitude + 90.0, self.lat_cells);
        let col = wrap_band(point.longitude + 180.0, self.lon_cells);
        GridCell::new(row, col)
    }

    /// Map a grid cell back to its reference corner.
    ///
    /// This is the lossy inverse of [`cell_of`](Self::cell_of): every cell is
    /// represented by the corner `(row - 90, col - 180)`, not its centroid.
    pub fn point_of(&self, cell: &GridCell) -> GeoPoint {
        GeoPoint {
            latitude: cell.row as f64 - 90.0,
            longitude: cell.col as f64 - 180.0,
        }
    }
}

fn wrap_band(offset_degrees: f64, bands: usize) -> usize {
    (offset_degrees.floor() as i64).rem_euclid(bands as i64) as usize
}
