//! AquaRoute library entry points.
//!
//! This crate exposes helpers to classify the world into water and land
//! cells, build the navigable graph over water cells, and plan routes
//! between geographic endpoints. Higher-level consumers (the CLI, UI
//! layers) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod grid;
pub mod mask;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use geo::{great_circle_km, GeoPoint, EARTH_RADIUS_KM};
pub use graph::{build_navigable_graph, NavigableGraph};
pub use grid::{GridCell, GridProjection};
pub use mask::{CellKind, GeoMask, LandRect, MaskSource, RectLandSource};
pub use path::{find_route_a_star, SearchLimits};
pub use routing::{RouteMode, RoutePlanner, RouteQuery, RouteResult};
