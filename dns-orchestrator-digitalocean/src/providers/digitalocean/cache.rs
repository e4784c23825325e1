//! Per-zone memo of remote records for one reconciliation run.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use crate::error::Result;

use super::types::WireRecord;

/// Zone name → rows last read from the API.
///
/// A missing entry means "not populated yet", never "populated and empty".
#[derive(Debug, Default)]
pub(crate) struct ZoneCache {
    entries: RwLock<HashMap<String, Vec<WireRecord>>>,
}

impl ZoneCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached rows for `zone`, running `fetch` on a miss.
    ///
    /// A `NotFound` from `fetch` yields an empty list and leaves the cache
    /// untouched so a later call asks again; other errors propagate.
    pub async fn get_or_fetch<F, Fut>(&self, zone: &str, fetch: F) -> Result<Vec<WireRecord>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<WireRecord>>>,
    {
        if let Some(records) = self.entries.read().await.get(zone).cloned() {
            return Ok(records);
        }

        match fetch().await {
            Ok(records) => {
                self.entries
                    .write()
                    .await
                    .insert(zone.to_string(), records.clone());
                Ok(records)
            }
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Whether `zone` has been populated.
    pub async fn contains(&self, zone: &str) -> bool {
        self.entries.read().await.contains_key(zone)
    }

    /// Drops the entry for `zone`, if any.
    pub async fn invalidate(&self, zone: &str) {
        self.entries.write().await.remove(zone);
    }
}
