use crate::archive::client::{ArchiveClient, ArchiveConfig};
use crate::archive::error::ArchiveError;
use crate::types::daily::DailyObservation;
use crate::types::location::ReferenceLocation;
use std::collections::{hash_map::Entry, HashMap};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Per-process memoization on top of the disk cache.
///
/// A reference location's series is fetched at most once per process
/// lifetime; concurrent callers share the same immutable `Arc` snapshot.
pub struct SeriesFetcher {
    client: ArchiveClient,
    series_cache: Mutex<HashMap<ReferenceLocation, Arc<Vec<DailyObservation>>>>,
}

impl SeriesFetcher {
    pub fn new(cache_dir: &Path, config: ArchiveConfig) -> Self {
        Self {
            client: ArchiveClient::new(cache_dir, config),
            series_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Gets the daily series for a location, using the memo if possible.
    pub async fn get_series(
        &self,
        location: ReferenceLocation,
    ) -> Result<Arc<Vec<DailyObservation>>, ArchiveError> {
        // Fast path: already loaded this process.
        {
            let cache = self.series_cache.lock().await;
            if let Some(series) = cache.get(&location) {
                return Ok(Arc::clone(series));
            }
        } // Release the lock before the slow load.

        let loaded = Arc::new(self.client.daily_series(location).await?);

        let mut cache = self.series_cache.lock().await;
        match cache.entry(location) {
            Entry::Occupied(entry) => {
                // Another caller loaded it while we were downloading; keep
                // theirs so everyone shares one snapshot.
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&loaded));
                Ok(loaded)
            }
        }
    }
}
