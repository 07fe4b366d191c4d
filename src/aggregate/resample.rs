//! Daily-to-monthly resampling.
//!
//! Converts a series of [`DailyObservation`] into one [`MonthlyAggregate`]
//! per calendar month present in the input, by unweighted arithmetic mean
//! of each temperature field over the month's observations.

use crate::types::daily::DailyObservation;
use crate::types::monthly::MonthlyAggregate;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

#[derive(Default)]
struct MonthBucket {
    count: u32,
    sum_max: f64,
    sum_min: f64,
    sum_mean: f64,
}

/// Resamples a daily series to monthly means.
///
/// No ordering precondition on the input; observations are grouped by
/// `(year, month)` and the output is emitted in ascending month order with
/// one aggregate per distinct month. An empty input yields an empty output.
///
/// Pure and idempotent: identical input floats produce bit-identical output.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use soflo::{monthly_means, DailyObservation};
///
/// let days = vec![
///     DailyObservation {
///         date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
///         temperature_max: 80.0,
///         temperature_min: 60.0,
///         temperature_mean: 70.0,
///     },
///     DailyObservation {
///         date: NaiveDate::from_ymd_opt(2015, 1, 2).unwrap(),
///         temperature_max: 82.0,
///         temperature_min: 62.0,
///         temperature_mean: 72.0,
///     },
/// ];
/// let months = monthly_means(&days);
/// assert_eq!(months.len(), 1);
/// assert_eq!(months[0].avg_max, 81.0);
/// ```
pub fn monthly_means(days: &[DailyObservation]) -> Vec<MonthlyAggregate> {
    // Keyed on the first-of-month anchor; BTreeMap iteration gives the
    // ascending month order for free.
    let mut buckets: BTreeMap<NaiveDate, MonthBucket> = BTreeMap::new();

    for day in days {
        let anchor = first_of_month(day.date);
        let bucket = buckets.entry(anchor).or_default();
        bucket.count += 1;
        bucket.sum_max += day.temperature_max;
        bucket.sum_min += day.temperature_min;
        bucket.sum_mean += day.temperature_mean;
    }

    buckets
        .into_iter()
        .map(|(month, bucket)| {
            let n = f64::from(bucket.count);
            MonthlyAggregate {
                month,
                avg_max: bucket.sum_max / n,
                avg_min: bucket.sum_min / n,
                avg_mean: bucket.sum_mean / n,
            }
        })
        .collect()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // with_day(1) cannot fail for a valid date.
    date.with_day(1).expect("day 1 exists in every month")
}
