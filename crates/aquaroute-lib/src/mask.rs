use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::grid::{GridCell, GridProjection};

/// Classification of a single mask cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Water,
    Land,
}

/// Supplies the water/land decision for a sample point.
///
/// The mask samples each cell at its reference corner during construction, so
/// any coastline source can be substituted without touching the graph or
/// search logic.
pub trait MaskSource {
    fn kind_at(&self, latitude: f64, longitude: f64) -> CellKind;
}

/// Axis-aligned block of land in degree space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandRect {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl LandRect {
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..self.lat_max).contains(&latitude)
            && (self.lon_min..self.lon_max).contains(&longitude)
    }
}

/// Mask source classifying everything inside any rectangle as land.
#[derive(Debug, Clone, Default)]
pub struct RectLandSource {
    rects: Vec<LandRect>,
}

impl RectLandSource {
    pub fn new(rects: Vec<LandRect>) -> Self {
        Self { rects }
    }
}

impl MaskSource for RectLandSource {
    fn kind_at(&self, latitude: f64, longitude: f64) -> CellKind {
        if self.rects.iter().any(|r| r.contains(latitude, longitude)) {
            CellKind::Land
        } else {
            CellKind::Water
        }
    }
}

/// Immutable world classification at fixed angular resolution.
///
/// Dimensions are fixed at construction and the cell table is never mutated
/// afterwards, so a mask can be shared read-only across threads and requests.
/// Longitude wraps: column `lon_cells - 1` is adjacent to column 0.
#[derive(Clone, PartialEq, Eq)]
pub struct GeoMask {
    projection: GridProjection,
    cells: Vec<CellKind>,
}

impl GeoMask {
    /// Sample a mask source once per cell at the cell's reference corner.
    pub fn from_source(lat_cells: usize, lon_cells: usize, source: &dyn MaskSource) -> Self {
        Self::from_fn(lat_cells, lon_cells, |lat, lon| source.kind_at(lat, lon))
    }

    /// Sample a classification closure once per cell; convenient for
    /// synthetic fixtures.
    pub fn from_fn<F>(lat_cells: usize, lon_cells: usize, classify: F) -> Self
    where
        F: Fn(f64, f64) -> CellKind,
    {
        let projection = GridProjection::new(lat_cells, lon_cells);
        let mut cells = Vec::with_capacity(lat_cells * lon_cells);
        for row in 0..lat_cells {
            for col in 0..lon_cells {
                let corner = projection.point_of(&GridCell::new(row, col));
                cells.push(classify(corner.latitude, corner.longitude));
            }
        }
        let mask = Self { projection, cells };
        debug!(
            lat_cells,
            lon_cells,
            water_cells = mask.water_cell_count(),
            "geo mask built"
        );
        mask
    }

    /// Build a mask from explicit rows, for small synthetic fixtures.
    ///
    /// Rows are ordered south to north; every row must have the same width.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self> {
        let lat_cells = rows.len();
        let lon_cells = rows.first().map(Vec::len).unwrap_or(0);
        if lat_cells == 0 || lon_cells == 0 || rows.iter().any(|row| row.len() != lon_cells) {
            return Err(Error::MaskDimensions {
                rows: lat_cells,
                cols: lon_cells,
            });
        }

        Ok(Self {
            projection: GridProjection::new(lat_cells, lon_cells),
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// The built-in coarse world mask: one-degree cells with the continents
    /// approximated by rectangular blocks.
    pub fn coarse_world() -> Self {
        let continents = RectLandSource::new(vec![
            // North America
            LandRect::new(15.0, 72.0, -168.0, -52.0),
            // South America
            LandRect::new(-56.0, 12.0, -81.0, -34.0),
            // Greenland
            LandRect::new(59.0, 84.0, -73.0, -11.0),
            // Eurasia
            LandRect::new(8.0, 77.0, -10.0, 180.0),
            // Africa
            LandRect::new(-35.0, 37.0, -17.0, 51.0),
            // Australia
            LandRect::new(-39.0, -10.0, 112.0, 154.0),
            // Antarctica
            LandRect::new(-90.0, -60.0, -180.0, 180.0),
        ]);
        Self::from_source(180, 360, &continents)
    }

    /// Projection matching this mask's dimensions.
    pub fn projection(&self) -> GridProjection {
        self.projection
    }

    pub fn lat_cells(&self) -> usize {
        self.projection.lat_cells()
    }

    pub fn lon_cells(&self) -> usize {
        self.projection.lon_cells()
    }

    /// Classify a geographic point.
    ///
    /// Fails with [`Error::OutOfRange`] when the coordinates lie outside the
    /// valid global range; grid-index wrap is never a failure.
    pub fn classify(&self, latitude: f64, longitude: f64) -> Result<CellKind> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::OutOfRange {
                latitude,
                longitude,
            });
        }
        let cell = self.projection.cell_of(&GeoPoint {
            latitude,
            longitude,
        });
        Ok(self.cell_state(cell.row, cell.col))
    }

    /// Direct indexed lookup; `row` and `col` are always produced by the
    /// projection, which guarantees validity via wrap-around.
    pub fn cell_state(&self, row: usize, col: usize) -> CellKind {
        debug_assert!(row < self.lat_cells() && col < self.lon_cells());
        self.cells[row * self.lon_cells() + col]
    }

    fn water_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|kind| **kind == CellKind::Water)
            .count()
    }
}

impl fmt::Debug for GeoMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoMask")
            .field("lat_cells", &self.lat_cells())
            .field("lon_cells", &self.lon_cells())
            .field("water_cells", &self.water_cell_count())
            .finish()
    }
}
