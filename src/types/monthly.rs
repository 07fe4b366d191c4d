use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Arithmetic-mean summary of all daily observations in one calendar month.
///
/// `month` is anchored to the first day of the month. A month with zero
/// observations produces no record; there are no synthetic or NaN rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// First-of-month anchor date.
    pub month: NaiveDate,
    /// Unweighted mean of `temperature_max` over the month's observations.
    pub avg_max: f64,
    /// Unweighted mean of `temperature_min`.
    pub avg_min: f64,
    /// Unweighted mean of `temperature_mean`.
    pub avg_mean: f64,
}
