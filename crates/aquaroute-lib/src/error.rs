use thiserror::Error;

use crate::geo::GeoPoint;

/// Convenient result alias for the AquaRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Latitude or longitude outside the valid global range.
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },

    /// One or both requested endpoints resolve to a land cell.
    #[error("endpoint{} on land: {}", plural(.offending), format_points(.offending))]
    LandEndpoint { offending: Vec<GeoPoint> },

    /// Raised when endpoint text does not match the `"<lat>, <lon>"` contract.
    #[error("malformed coordinate text: {input:?}")]
    Parse { input: String },

    /// Raised when a synthetic mask is built from empty or ragged rows.
    #[error("invalid mask dimensions: {rows} rows, {cols} columns")]
    MaskDimensions { rows: usize, cols: usize },
}

fn plural(points: &[GeoPoint]) -> &'static str {
    if points.len() == 1 {
        ""
    } else {
        "s"
    }
}

fn format_points(points: &[GeoPoint]) -> String {
    points
        .iter()
        .map(|point| format!("({}, {})", point.latitude, point.longitude))
        .collect::<Vec<_>>()
        .join(", ")
}
