use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::{RouteQuery, RouteResult};

/// Queries closer than this are the same cache entry: four decimal places of
/// a degree, which absorbs float jitter from repeated text parsing.
const KEY_SCALE: f64 = 10_000.0;

/// Rounded form of a [`RouteQuery`], used as the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct QueryKey {
    start: (i64, i64),
    stop: (i64, i64),
}

impl QueryKey {
    pub(crate) fn for_query(query: &RouteQuery) -> Self {
        Self {
            start: (quantize(query.start.latitude), quantize(query.start.longitude)),
            stop: (quantize(query.stop.latitude), quantize(query.stop.longitude)),
        }
    }
}

fn quantize(degrees: f64) -> i64 {
    (degrees * KEY_SCALE).round() as i64
}

/// Bounded mapping from rounded queries to computed results.
///
/// A mutex guards insert and lookup so the cache can be shared by concurrent
/// callers; duplicate computation for the same key is tolerated and simply
/// overwrites with an identical value. When the map reaches capacity it is
/// cleared wholesale before the next insert.
#[derive(Debug)]
pub(crate) struct RouteCache {
    entries: Mutex<HashMap<QueryKey, RouteResult>>,
    capacity: usize,
}

impl RouteCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub(crate) fn get(&self, key: &QueryKey) -> Option<RouteResult> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub(crate) fn insert(&self, key: QueryKey, result: RouteResult) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            debug!(capacity = self.capacity, "route cache full, evicting");
            entries.clear();
        }
        entries.insert(key, result);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
