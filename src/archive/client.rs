//! Download, retry, and disk-cache layer for the Open-Meteo archive API.
//!
//! Retry and cache behavior are explicit configuration on this collaborator
//! ([`ArchiveConfig`]); the aggregation core never sees any of it.

use crate::archive::error::ArchiveError;
use crate::archive::response::ArchiveResponse;
use crate::types::daily::DailyObservation;
use crate::types::date_window::HistoryBounds;
use crate::types::location::ReferenceLocation;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::{info, warn};
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{fs, task};

const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// Policy knobs for the archive fetch.
///
/// Defaults mirror the deployment this crate was built for: five attempts
/// with a 0.2s exponential backoff factor, a 30 second request timeout,
/// Fahrenheit units over the 1970–2020 history range, and a cache that
/// never expires.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Total request attempts, including the first one.
    pub retries: u32,
    /// Backoff before attempt `n` is `backoff_factor * 2^(n-1)` seconds.
    pub backoff_factor: f64,
    pub timeout: Duration,
    /// The date range requested from the archive.
    pub bounds: HistoryBounds,
    /// `None` means a cached series is reused forever.
    pub cache_ttl: Option<Duration>,
    /// Passed through as the `temperature_unit` request parameter.
    pub temperature_unit: String,
    /// Civil time zone the daily series is indexed in.
    pub timezone: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            retries: 5,
            backoff_factor: 0.2,
            timeout: Duration::from_secs(30),
            bounds: HistoryBounds::default(),
            cache_ttl: None,
            temperature_unit: "fahrenheit".to_string(),
            timezone: "America/New_York".to_string(),
        }
    }
}

/// HTTP client for the archive API with an on-disk series cache.
///
/// Each reference location's daily series is downloaded once, decoded into
/// [`DailyObservation`]s and stored as a bincode file under the cache
/// directory; later calls read the file instead of hitting the network.
pub struct ArchiveClient {
    cache_dir: PathBuf,
    config: ArchiveConfig,
    http: Client,
}

impl ArchiveClient {
    pub fn new(cache_dir: &Path, config: ArchiveConfig) -> ArchiveClient {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        ArchiveClient {
            cache_dir: cache_dir.to_path_buf(),
            config,
            http,
        }
    }

    /// Returns the full daily series for a reference location.
    ///
    /// Serves from the disk cache when a fresh file exists; otherwise
    /// downloads (with retry/backoff), decodes, caches, and returns.
    pub async fn daily_series(
        &self,
        location: ReferenceLocation,
    ) -> Result<Vec<DailyObservation>, ArchiveError> {
        let cache_path = self
            .cache_dir
            .join(format!("archive-{}.bin", location.cache_key()));

        if self.cache_is_fresh(&cache_path).await? {
            info!("Cache hit for {} series at {:?}", location, cache_path);
            let path = cache_path.clone();
            return task::spawn_blocking(move || Self::read_cached_series(&path)).await?;
        }

        warn!("Cache miss for {} series. Downloading from archive.", location);
        let response = self.download(location).await?;
        let observations = response.into_observations(&location.to_string())?;
        info!(
            "Decoded {} daily observations for {}",
            observations.len(),
            location
        );

        fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| ArchiveError::CacheWrite(self.cache_dir.clone(), e))?;
        Self::cache_series(observations.clone(), &cache_path).await?;
        info!("Cached {} series to {:?}", location, cache_path);

        Ok(observations)
    }

    /// Issues the archive request, retrying transient failures with
    /// exponential backoff per [`ArchiveConfig`].
    async fn download(&self, location: ReferenceLocation) -> Result<ArchiveResponse, ArchiveError> {
        let attempts = self.config.retries.max(1);
        let mut last_error: Option<ArchiveError> = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = self.config.backoff_factor * f64::from(1u32 << (attempt - 1));
                warn!(
                    "Retrying archive request for {} in {:.1}s (attempt {}/{})",
                    location,
                    delay,
                    attempt + 1,
                    attempts
                );
                tokio::time::sleep(Duration::from_secs_f64(delay)).await;
            }

            match self.request_once(location).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() => {
                    warn!("Transient archive failure for {}: {}", location, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(ArchiveError::RetriesExhausted {
            url: ARCHIVE_URL.to_string(),
            attempts,
            last_error: last_error.map(Box::new),
        })
    }

    async fn request_once(
        &self,
        location: ReferenceLocation,
    ) -> Result<ArchiveResponse, ArchiveError> {
        let coordinate = location.coordinate();
        let response = self
            .http
            .get(ARCHIVE_URL)
            .query(&[
                ("latitude", coordinate.0.to_string()),
                ("longitude", coordinate.1.to_string()),
                (
                    "start_date",
                    self.config.bounds.earliest.format("%Y-%m-%d").to_string(),
                ),
                (
                    "end_date",
                    self.config.bounds.latest.format("%Y-%m-%d").to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,temperature_2m_mean".to_string(),
                ),
                ("temperature_unit", self.config.temperature_unit.clone()),
                ("timezone", self.config.timezone.clone()),
                ("timeformat", "unixtime".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ArchiveError::NetworkRequest(ARCHIVE_URL.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    ArchiveError::HttpStatus {
                        url: ARCHIVE_URL.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ArchiveError::NetworkRequest(ARCHIVE_URL.to_string(), e)
                });
            }
        };

        response
            .json::<ArchiveResponse>()
            .await
            .map_err(|e| ArchiveError::ResponseDecode {
                url: ARCHIVE_URL.to_string(),
                source: e,
            })
    }

    /// Whether a cache file exists and is within the configured TTL.
    async fn cache_is_fresh(&self, path: &Path) -> Result<bool, ArchiveError> {
        let metadata = match fs::metadata(path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(ArchiveError::CacheMetadataRead(path.to_path_buf(), e)),
        };

        let Some(ttl) = self.config.cache_ttl else {
            return Ok(true);
        };

        let modified = metadata
            .modified()
            .map_err(|e| ArchiveError::CacheMetadataRead(path.to_path_buf(), e))?;
        let age = modified
            .elapsed()
            .map_err(|e| ArchiveError::SystemTimeCalculation(path.to_path_buf(), e))?;
        Ok(age <= ttl)
    }

    fn read_cached_series(path: &Path) -> Result<Vec<DailyObservation>, ArchiveError> {
        let bytes =
            std::fs::read(path).map_err(|e| ArchiveError::CacheRead(path.to_path_buf(), e))?;
        let (series, _) =
            bincode::serde::decode_from_slice::<Vec<DailyObservation>, _>(&bytes, BINCODE_CONFIG)
                .map_err(|e| ArchiveError::CacheDecode(path.to_path_buf(), Box::new(e)))?;
        Ok(series)
    }

    async fn cache_series(
        series: Vec<DailyObservation>,
        cache_path: &Path,
    ) -> Result<(), ArchiveError> {
        let path = cache_path.to_path_buf();
        task::spawn_blocking(move || {
            let bytes = bincode::serde::encode_to_vec(series, BINCODE_CONFIG)
                .map_err(|e| ArchiveError::CacheEncode(Box::new(e)))?;

            // Write to a temp file first so a crash never leaves a
            // truncated cache behind.
            let dir = path.parent().unwrap_or(Path::new("."));
            let mut tmp = tempfile::NamedTempFile::new_in(dir)
                .map_err(|e| ArchiveError::CacheWrite(path.clone(), e))?;
            tmp.write_all(&bytes)
                .map_err(|e| ArchiveError::CacheWrite(path.clone(), e))?;
            tmp.persist(&path)
                .map_err(|e| ArchiveError::CacheWrite(path.clone(), e.error))?;
            Ok::<(), ArchiveError>(())
        })
        .await??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series() -> Vec<DailyObservation> {
        (1..=5)
            .map(|d| DailyObservation {
                date: NaiveDate::from_ymd_opt(2015, 1, d).unwrap(),
                temperature_max: 70.0 + d as f64,
                temperature_min: 50.0 + d as f64,
                temperature_mean: 60.0 + d as f64,
            })
            .collect()
    }

    #[tokio::test]
    async fn series_cache_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive-test.bin");

        ArchiveClient::cache_series(series(), &path).await.unwrap();
        let restored = ArchiveClient::read_cached_series(&path).unwrap();
        assert_eq!(restored, series());
    }

    #[tokio::test]
    async fn missing_cache_file_is_not_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let client = ArchiveClient::new(dir.path(), ArchiveConfig::default());
        let fresh = client
            .cache_is_fresh(&dir.path().join("absent.bin"))
            .await
            .unwrap();
        assert!(!fresh);
    }

    #[tokio::test]
    async fn cache_without_ttl_never_expires() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive-test.bin");
        ArchiveClient::cache_series(series(), &path).await.unwrap();

        let forever = ArchiveClient::new(dir.path(), ArchiveConfig::default());
        assert!(forever.cache_is_fresh(&path).await.unwrap());

        let short_ttl = ArchiveClient::new(
            dir.path(),
            ArchiveConfig {
                cache_ttl: Some(Duration::from_millis(10)),
                ..ArchiveConfig::default()
            },
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!short_ttl.cache_is_fresh(&path).await.unwrap());
    }

    #[test]
    fn default_config_matches_the_deployment() {
        let config = ArchiveConfig::default();
        assert_eq!(config.retries, 5);
        assert_eq!(config.backoff_factor, 0.2);
        assert_eq!(config.temperature_unit, "fahrenheit");
        assert_eq!(config.timezone, "America/New_York");
        assert!(config.cache_ttl.is_none());
        assert_eq!(
            config.bounds.earliest,
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
    }
}
