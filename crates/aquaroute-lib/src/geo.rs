use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Mean Earth radius in kilometres, used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, validating it lies within the global coordinate range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Great-circle distance to another point, in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        great_circle_km(self, other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    /// Parse `"<lat>, <lon>"` endpoint text.
    ///
    /// Malformed text fails with [`Error::Parse`]; numerically valid input
    /// outside the global range fails with [`Error::OutOfRange`].
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.splitn(2, ',');
        let (lat_text, lon_text) = match (parts.next(), parts.next()) {
            (Some(lat), Some(lon)) => (lat.trim(), lon.trim()),
            _ => {
                return Err(Error::Parse {
                    input: input.to_string(),
                })
            }
        };

        let latitude: f64 = lat_text.parse().map_err(|_| Error::Parse {
            input: input.to_string(),
        })?;
        let longitude: f64 = lon_text.parse().map_err(|_| Error::Parse {
            input: input.to_string(),
        })?;

        Self::new(latitude, longitude)
    }
}

/// Haversine great-circle distance between two points, in kilometres.
///
/// Reported alongside routes independently of the discretized path length.
pub fn great_circle_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
