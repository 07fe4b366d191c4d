//! Wire types for the Open-Meteo archive API and their conversion into
//! typed daily observations.

use crate::archive::error::ArchiveError;
use crate::types::daily::DailyObservation;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Top-level archive response.
///
/// `utc_offset_seconds` reflects the `timezone` request parameter; daily
/// timestamps are shifted by it before being floored to a civil date, so
/// a day is never split across two month buckets by a UTC/local mismatch.
#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_seconds: i64,
    pub daily: DailyBlock,
}

/// The daily block: a unix-time index plus three parallel value arrays.
///
/// Individual entries can be null at the edges of the archive; a row where
/// any of the three temperatures is null is dropped whole.
#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<i64>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub temperature_2m_mean: Vec<Option<f64>>,
}

impl ArchiveResponse {
    /// Flattens the parallel arrays into ordered [`DailyObservation`]s.
    ///
    /// Fails with [`ArchiveError::SeriesShape`] if the value arrays do not
    /// line up with the time index or a timestamp is unrepresentable.
    pub fn into_observations(self, location: &str) -> Result<Vec<DailyObservation>, ArchiveError> {
        let daily = self.daily;
        let n = daily.time.len();
        if daily.temperature_2m_max.len() != n
            || daily.temperature_2m_min.len() != n
            || daily.temperature_2m_mean.len() != n
        {
            return Err(ArchiveError::SeriesShape {
                location: location.to_string(),
                message: format!(
                    "time index has {} entries but value arrays have {}/{}/{}",
                    n,
                    daily.temperature_2m_max.len(),
                    daily.temperature_2m_min.len(),
                    daily.temperature_2m_mean.len()
                ),
            });
        }

        let mut observations = Vec::with_capacity(n);
        for i in 0..n {
            let (Some(max), Some(min), Some(mean)) = (
                daily.temperature_2m_max[i],
                daily.temperature_2m_min[i],
                daily.temperature_2m_mean[i],
            ) else {
                // Incomplete day, skip the whole row.
                continue;
            };
            let date = civil_date(daily.time[i], self.utc_offset_seconds).ok_or_else(|| {
                ArchiveError::SeriesShape {
                    location: location.to_string(),
                    message: format!("timestamp {} is out of range", daily.time[i]),
                }
            })?;
            observations.push(DailyObservation {
                date,
                temperature_max: max,
                temperature_min: min,
                temperature_mean: mean,
            });
        }
        Ok(observations)
    }
}

/// Civil date of a unix timestamp in the zone given by `utc_offset_seconds`.
fn civil_date(unix_seconds: i64, utc_offset_seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(unix_seconds.checked_add(utc_offset_seconds)?, 0)
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EST_OFFSET: i64 = -5 * 3600;

    fn response(daily: DailyBlock) -> ArchiveResponse {
        ArchiveResponse {
            latitude: 26.7153,
            longitude: -80.0534,
            utc_offset_seconds: EST_OFFSET,
            daily,
        }
    }

    #[test]
    fn decodes_the_documented_wire_shape() {
        let json = r#"{
            "latitude": 26.7153,
            "longitude": -80.0534,
            "utc_offset_seconds": -18000,
            "daily": {
                "time": [1420088400, 1420174800],
                "temperature_2m_max": [75.3, null],
                "temperature_2m_min": [61.2, 60.0],
                "temperature_2m_mean": [68.1, 66.9]
            }
        }"#;
        let parsed: ArchiveResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.daily.time.len(), 2);
        assert_eq!(parsed.daily.temperature_2m_max[1], None);
    }

    #[test]
    fn timestamps_resolve_to_local_civil_dates() {
        // 1420077600 is 2015-01-01 02:00 UTC, which is still 2014-12-31
        // 21:00 in EST. A UTC-naive conversion would bucket it into January.
        let resp = response(DailyBlock {
            time: vec![1420077600],
            temperature_2m_max: vec![Some(75.0)],
            temperature_2m_min: vec![Some(60.0)],
            temperature_2m_mean: vec![Some(67.0)],
        });
        let obs = resp.into_observations("test").unwrap();
        assert_eq!(obs[0].date, NaiveDate::from_ymd_opt(2014, 12, 31).unwrap());
    }

    #[test]
    fn rows_with_any_null_field_are_dropped_whole() {
        let resp = response(DailyBlock {
            time: vec![1420088400, 1420174800, 1420261200],
            temperature_2m_max: vec![Some(75.0), None, Some(77.0)],
            temperature_2m_min: vec![Some(60.0), Some(59.0), Some(61.0)],
            temperature_2m_mean: vec![Some(67.0), Some(66.0), None],
        });
        let obs = resp.into_observations("test").unwrap();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].temperature_max, 75.0);
    }

    #[test]
    fn mismatched_array_lengths_are_a_shape_error() {
        let resp = response(DailyBlock {
            time: vec![1420088400, 1420174800],
            temperature_2m_max: vec![Some(75.0)],
            temperature_2m_min: vec![Some(60.0), Some(59.0)],
            temperature_2m_mean: vec![Some(67.0), Some(66.0)],
        });
        let err = resp.into_observations("test").unwrap_err();
        assert!(matches!(err, ArchiveError::SeriesShape { .. }));
    }

    #[test]
    fn observations_keep_the_index_order() {
        let resp = response(DailyBlock {
            time: vec![1420088400, 1420174800, 1420261200],
            temperature_2m_max: vec![Some(75.0), Some(76.0), Some(77.0)],
            temperature_2m_min: vec![Some(60.0), Some(59.0), Some(61.0)],
            temperature_2m_mean: vec![Some(67.0), Some(66.0), Some(68.0)],
        });
        let obs = resp.into_observations("test").unwrap();
        let dates: Vec<_> = obs.iter().map(|o| o.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(obs.len(), 3);
    }
}
