use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day's temperature summary for a fixed location.
///
/// Produced by the archive data source and treated as immutable once fetched.
/// A day either carries all three temperature fields or is absent from the
/// series entirely; missing individual fields are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Civil date in the source system's configured time zone.
    pub date: NaiveDate,
    /// Daily maximum 2m air temperature (°F in the default deployment).
    pub temperature_max: f64,
    /// Daily minimum 2m air temperature.
    pub temperature_min: f64,
    /// Daily mean 2m air temperature.
    pub temperature_mean: f64,
}
