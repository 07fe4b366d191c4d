//! This module provides the main entry point for the soflo client. It ties
//! the external collaborators (weather archive, attraction lookup, county
//! list) to the pure aggregation pipeline, parameterized by location and
//! date window instead of per-county branches.

use crate::aggregate::windowed_monthly_means;
use crate::archive::client::ArchiveConfig;
use crate::archive::series_fetcher::SeriesFetcher;
use crate::attractions::client::AttractionClient;
use crate::attractions::response::Attraction;
use crate::error::SofloError;
use crate::regions::client::{RegionClient, RegionConfig};
use crate::types::daily::DailyObservation;
use crate::types::date_window::{DateWindow, HistoryBounds};
use crate::types::location::{County, ReferenceLocation};
use crate::types::monthly::MonthlyAggregate;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use futures_util::future::try_join_all;
use std::path::PathBuf;
use std::sync::Arc;

/// The main client for South Florida weather history and attractions.
///
/// Handles fetching and caching of the per-location daily archive series,
/// resampling and windowing for display, and the county/attraction
/// collaborators consumed by the hosting UI layer.
///
/// Create an instance using [`Soflo::new()`] for default behavior (standard
/// cache directory, deployment-default policies) or [`Soflo::with_options`]
/// to override the cache location or collaborator configuration.
///
/// # Examples
///
/// ```no_run
/// # use soflo::{Soflo, SofloError, ReferenceLocation};
/// # async fn run() -> Result<(), SofloError> {
/// let client = Soflo::new().await?;
/// let window = client.validate_window("01/2015", "03/2015")?;
/// let report = client
///     .monthly_report()
///     .location(ReferenceLocation::WestPalmBeach)
///     .window(window)
///     .call()
///     .await?;
/// assert_eq!(report.len(), 3);
/// # Ok(())
/// # }
/// ```
pub struct Soflo {
    fetcher: SeriesFetcher,
    attraction_client: AttractionClient,
    region_client: RegionClient,
    bounds: HistoryBounds,
}

#[bon]
impl Soflo {
    /// Creates a client using the default cache directory and deployment
    /// defaults for every collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`SofloError::CacheDirResolution`] if the default cache
    /// directory cannot be found, or [`SofloError::CacheDirCreation`] if it
    /// cannot be created.
    pub async fn new() -> Result<Self, SofloError> {
        let cache_folder = get_cache_dir().map_err(SofloError::CacheDirResolution)?;
        Self::with_cache_folder(cache_folder).await
    }

    /// Creates a client with a specific cache directory.
    ///
    /// The directory is created if it does not exist.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, SofloError> {
        Self::with_options()
            .cache_folder(cache_folder)
            .call()
            .await
    }

    /// Creates a fully configured client.
    ///
    /// # Arguments
    ///
    /// * `.cache_folder(PathBuf)`: Optional. Defaults to the system cache dir.
    /// * `.archive_config(ArchiveConfig)`: Optional. Retry, backoff, cache
    ///   TTL, units, and history bounds for the weather archive.
    /// * `.region_config(RegionConfig)`: Optional. API key and search
    ///   origin for the county list source.
    #[builder]
    pub async fn with_options(
        cache_folder: Option<PathBuf>,
        archive_config: Option<ArchiveConfig>,
        region_config: Option<RegionConfig>,
    ) -> Result<Self, SofloError> {
        let cache_folder = match cache_folder {
            Some(folder) => folder,
            None => get_cache_dir().map_err(SofloError::CacheDirResolution)?,
        };
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| SofloError::CacheDirCreation(cache_folder.clone(), e))?;

        let archive_config = archive_config.unwrap_or_default();
        let bounds = archive_config.bounds;
        Ok(Self {
            fetcher: SeriesFetcher::new(&cache_folder, archive_config),
            attraction_client: AttractionClient::new(),
            region_client: RegionClient::new(region_config.unwrap_or_default()),
            bounds,
        })
    }

    /// Parses and validates two `MM/YYYY` strings against this deployment's
    /// history bounds.
    ///
    /// An invalid window strictly preempts aggregation: callers render the
    /// error message and make no further calls.
    pub fn validate_window(&self, start: &str, end: &str) -> Result<DateWindow, SofloError> {
        DateWindow::parse(start, end, self.bounds).map_err(SofloError::from)
    }

    /// Returns the full cached daily series for a reference location.
    pub async fn daily_history(
        &self,
        location: impl Into<ReferenceLocation>,
    ) -> Result<Arc<Vec<DailyObservation>>, SofloError> {
        self.fetcher
            .get_series(location.into())
            .await
            .map_err(SofloError::from)
    }

    /// Fetches, resamples, and windows the monthly report for a location.
    ///
    /// This is the one parameterized pipeline behind every county and
    /// display tab; project the result with
    /// [`crate::table_rows`], [`crate::mean_series`] or
    /// [`crate::envelope_series`].
    ///
    /// # Arguments
    ///
    /// * `.location(ReferenceLocation)`: **Required.** Accepts a [`County`] too.
    /// * `.window(DateWindow)`: **Required.** A validated window from
    ///   [`Soflo::validate_window`].
    #[builder]
    pub async fn monthly_report(
        &self,
        #[builder(into)] location: ReferenceLocation,
        window: DateWindow,
    ) -> Result<Vec<MonthlyAggregate>, SofloError> {
        let days = self.daily_history(location).await?;
        Ok(windowed_monthly_means(&days, &window))
    }

    /// Warms the series cache for all reference locations concurrently.
    pub async fn prefetch_all(&self) -> Result<(), SofloError> {
        try_join_all(
            ReferenceLocation::ALL
                .into_iter()
                .map(|location| self.fetcher.get_series(location)),
        )
        .await?;
        Ok(())
    }

    /// Lists the tourist attractions of a county.
    pub async fn attractions(&self, county: County) -> Result<Vec<Attraction>, SofloError> {
        self.attraction_client
            .attractions(county)
            .await
            .map_err(SofloError::from)
    }

    /// Lists the selectable counties reported by the region source.
    ///
    /// Requires a RapidAPI key (config or `RAPIDAPI_KEY`).
    pub async fn counties(&self) -> Result<Vec<County>, SofloError> {
        self.region_client.counties().await.map_err(SofloError::from)
    }

    /// Raw division names from the region source, artifacts filtered.
    pub async fn division_names(&self) -> Result<Vec<String>, SofloError> {
        self.region_client
            .division_names()
            .await
            .map_err(SofloError::from)
    }
}
