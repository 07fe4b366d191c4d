mod aggregate;
mod archive;
mod attractions;
mod error;
mod regions;
mod soflo;
mod types;
mod utils;

pub use error::SofloError;
pub use soflo::*;

pub use aggregate::present::{
    envelope_series, mean_series, round2, table_rows, ChartPoint, EnvelopeSeries, MeanSeries,
    TableRow, TABLE_COLUMNS,
};
pub use aggregate::resample::monthly_means;
pub use aggregate::window::filter_window;
pub use aggregate::windowed_monthly_means;

pub use types::daily::DailyObservation;
pub use types::date_window::{DateWindow, DateWindowError, HistoryBounds, MIN_SPAN_DAYS};
pub use types::location::{County, LatLon, ReferenceLocation};
pub use types::monthly::MonthlyAggregate;

pub use archive::client::{ArchiveClient, ArchiveConfig};
pub use archive::error::ArchiveError;
pub use archive::response::{ArchiveResponse, DailyBlock};

pub use attractions::client::AttractionClient;
pub use attractions::error::AttractionError;
pub use attractions::map::{marker_bounds, MapBounds};
pub use attractions::query::attraction_query;
pub use attractions::response::{Attraction, SparqlResponse};

pub use regions::client::{RegionClient, RegionConfig};
pub use regions::error::RegionError;
