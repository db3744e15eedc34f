//! Route planning over a geo mask.
//!
//! This module provides:
//! - [`RouteMode`] - Route computation strategies (grid search, direct)
//! - [`RouteQuery`] - A pair of geographic endpoints
//! - [`RouteResult`] - Computed route outcome
//! - [`RoutePlanner`] - The orchestrator: validates endpoints, runs the
//!   pathfinder over the lazily built navigable graph, and caches results
//!
//! # Example
//!
//! ```ignore
//! use aquaroute_lib::{GeoMask, GeoPoint, RoutePlanner, RouteQuery};
//!
//! let planner = RoutePlanner::new(GeoMask::coarse_world());
//! let query = RouteQuery::new(
//!     GeoPoint::new(0.0, -140.0)?,
//!     GeoPoint::new(20.0, -30.0)?,
//! );
//! let result = planner.plan_route(&query)?;
//! println!("found={} over {} points", result.found, result.points.len());
//! ```

mod cache;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::{great_circle_km, GeoPoint};
use crate::graph::{build_navigable_graph, NavigableGraph};
use crate::mask::{CellKind, GeoMask};
use crate::path::{find_route_a_star, SearchLimits};

use cache::{QueryKey, RouteCache};

/// Results kept in the cache before wholesale eviction kicks in.
const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Route computation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Full grid-graph search producing a cell-by-cell route.
    #[default]
    Grid,
    /// Straight route between the raw endpoints, skipping the grid entirely.
    /// Valid whenever cell-level path granularity is not required.
    Direct,
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::Grid => "grid",
            RouteMode::Direct => "direct",
        };
        f.write_str(value)
    }
}

/// A pair of geographic endpoints to route between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteQuery {
    pub start: GeoPoint,
    pub stop: GeoPoint,
}

impl RouteQuery {
    pub fn new(start: GeoPoint, stop: GeoPoint) -> Self {
        Self { start, stop }
    }
}

/// Computed route returned by the planner.
///
/// When `found` is true the point sequence starts at the (cell-snapped)
/// start and ends at the (cell-snapped) stop. `distance_km` is the
/// great-circle distance between the raw endpoints, independent of the
/// discretized path length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub points: Vec<GeoPoint>,
    pub found: bool,
    pub distance_km: f64,
}

/// Orchestrates validation, transformation, search, and caching.
///
/// The mask and the lazily built graph are immutable once constructed, so a
/// planner can be shared freely across threads; the route cache is the only
/// mutable state and is internally synchronized.
#[derive(Debug)]
pub struct RoutePlanner {
    mask: GeoMask,
    mode: RouteMode,
    limits: SearchLimits,
    graph: OnceCell<NavigableGraph>,
    cache: RouteCache,
    searches: AtomicUsize,
}

impl RoutePlanner {
    /// Create a planner over a mask with the default grid mode.
    pub fn new(mask: GeoMask) -> Self {
        Self {
            mask,
            mode: RouteMode::default(),
            limits: SearchLimits::default(),
            graph: OnceCell::new(),
            cache: RouteCache::new(DEFAULT_CACHE_CAPACITY),
            searches: AtomicUsize::new(0),
        }
    }

    /// Select the route computation mode.
    pub fn with_mode(mut self, mode: RouteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Bound the pathfinder's node expansions.
    pub fn with_search_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Override the route cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = RouteCache::new(capacity);
        self
    }

    /// The mask this planner routes over.
    pub fn mask(&self) -> &GeoMask {
        &self.mask
    }

    /// Number of pathfinder invocations so far; cache hits do not count.
    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::Relaxed)
    }

    /// Number of cached route results.
    pub fn cached_routes(&self) -> usize {
        self.cache.len()
    }

    /// The navigable graph, built on first use and reused afterwards.
    pub fn graph(&self) -> &NavigableGraph {
        self.graph.get_or_init(|| build_navigable_graph(&self.mask))
    }

    /// Compute a route between the query's endpoints.
    ///
    /// Both endpoints must classify as water ([`Error::LandEndpoint`]
    /// otherwise, identifying every offending endpoint). A missing route is
    /// not an error: the result comes back with `found` false and no points,
    /// and callers must branch on it before using `points`.
    pub fn plan_route(&self, query: &RouteQuery) -> Result<RouteResult> {
        self.validate_endpoints(query)?;

        let key = QueryKey::for_query(query);
        if let Some(hit) = self.cache.get(&key) {
            debug!(mode = %self.mode, "route cache hit");
            return Ok(hit);
        }

        let (points, found) = match self.mode {
            RouteMode::Direct => (vec![query.start, query.stop], true),
            RouteMode::Grid => self.search_grid(query),
        };

        let result = RouteResult {
            points,
            found,
            distance_km: great_circle_km(&query.start, &query.stop),
        };
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    fn validate_endpoints(&self, query: &RouteQuery) -> Result<()> {
        let mut offending = Vec::new();
        for endpoint in [query.start, query.stop] {
            if self.mask.classify(endpoint.latitude, endpoint.longitude)? == CellKind::Land {
                offending.push(endpoint);
            }
        }
        if offending.is_empty() {
            Ok(())
        } else {
            Err(Error::LandEndpoint { offending })
        }
    }

    fn search_grid(&self, query: &RouteQuery) -> (Vec<GeoPoint>, bool) {
        let projection = self.mask.projection();
        let start_cell = projection.cell_of(&query.start);
        let stop_cell = projection.cell_of(&query.stop);

        let graph = self.graph();
        self.searches.fetch_add(1, Ordering::Relaxed);

        match find_route_a_star(graph, start_cell, stop_cell, self.limits) {
            Some(cells) => {
                let points = cells.iter().map(|cell| projection.point_of(cell)).collect();
                (points, true)
            }
            None => {
                debug!(
                    ?start_cell,
                    ?stop_cell,
                    "no navigable path between endpoint cells"
                );
                (Vec::new(), false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_grid() {
        assert_eq!(RouteMode::default(), RouteMode::Grid);
    }

    #[test]
    fn mode_display_matches_cli_values() {
        assert_eq!(RouteMode::Grid.to_string(), "grid");
        assert_eq!(RouteMode::Direct.to_string(), "direct");
    }

    #[test]
    fn new_planner_has_no_searches_or_cached_routes() {
        let planner = RoutePlanner::new(GeoMask::coarse_world());
        assert_eq!(planner.search_count(), 0);
        assert_eq!(planner.cached_routes(), 0);
    }

    #[test]
    fn route_result_serializes_expected_shape() {
        let result = RouteResult {
            points: vec![GeoPoint {
                latitude: -89.0,
                longitude: -180.0,
            }],
            found: true,
            distance_km: 1.5,
        };
        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["found"], true);
        assert_eq!(json["distance_km"], 1.5);
        assert_eq!(json["points"][0]["latitude"], -89.0);
    }
}
