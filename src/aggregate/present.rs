//! Presentation shaping of windowed monthly aggregates.
//!
//! The table and chart shapes are pure projections of the same aggregate
//! sequence; overlapping numeric fields agree bit-for-bit because both go
//! through [`round2`].

use crate::types::monthly::MonthlyAggregate;
use chrono::NaiveDate;

/// Human-readable column labels for the table shape, in column order.
pub const TABLE_COLUMNS: [&str; 4] = [
    "Date",
    "Average Max Temperature",
    "Average Min Temperature",
    "Average Mean Temperature",
];

/// Rounds to two decimal places for display.
///
/// Uses round-half-away-from-zero (`f64::round` semantics): `71.456`
/// becomes `71.46` and `71.454` becomes `71.45`. Presentation only; the
/// rounded value never feeds back into aggregation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One table row: the month and the three averaged fields, rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub month: NaiveDate,
    pub avg_max: f64,
    pub avg_min: f64,
    pub avg_mean: f64,
}

impl TableRow {
    /// The row's cells as display strings, matching [`TABLE_COLUMNS`].
    pub fn cells(&self) -> [String; 4] {
        [
            self.month.format("%Y-%m").to_string(),
            format!("{:.2}", self.avg_max),
            format!("{:.2}", self.avg_min),
            format!("{:.2}", self.avg_mean),
        ]
    }
}

/// A single `(month, value)` chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub month: NaiveDate,
    pub value: f64,
}

/// Single-line series over the monthly mean temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanSeries {
    pub points: Vec<ChartPoint>,
}

/// Dual-band series: the monthly average-max and average-min envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeSeries {
    pub max_points: Vec<ChartPoint>,
    pub min_points: Vec<ChartPoint>,
}

/// Projects windowed aggregates into table rows with rounded values.
pub fn table_rows(aggregates: &[MonthlyAggregate]) -> Vec<TableRow> {
    aggregates
        .iter()
        .map(|a| TableRow {
            month: a.month,
            avg_max: round2(a.avg_max),
            avg_min: round2(a.avg_min),
            avg_mean: round2(a.avg_mean),
        })
        .collect()
}

/// Projects windowed aggregates into the single-line mean series.
pub fn mean_series(aggregates: &[MonthlyAggregate]) -> MeanSeries {
    MeanSeries {
        points: aggregates
            .iter()
            .map(|a| ChartPoint {
                month: a.month,
                value: round2(a.avg_mean),
            })
            .collect(),
    }
}

/// Projects windowed aggregates into the max/min envelope series.
pub fn envelope_series(aggregates: &[MonthlyAggregate]) -> EnvelopeSeries {
    EnvelopeSeries {
        max_points: aggregates
            .iter()
            .map(|a| ChartPoint {
                month: a.month,
                value: round2(a.avg_max),
            })
            .collect(),
        min_points: aggregates
            .iter()
            .map(|a| ChartPoint {
                month: a.month,
                value: round2(a.avg_min),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(m: u32, avg_max: f64, avg_min: f64, avg_mean: f64) -> MonthlyAggregate {
        MonthlyAggregate {
            month: NaiveDate::from_ymd_opt(2015, m, 1).unwrap(),
            avg_max,
            avg_min,
            avg_mean,
        }
    }

    #[test]
    fn rounds_half_away_from_zero_at_two_decimals() {
        assert_eq!(round2(71.456), 71.46);
        assert_eq!(round2(71.454), 71.45);
        assert_eq!(round2(71.455), 71.46);
        assert_eq!(round2(-71.455), -71.46);
        assert_eq!(round2(80.0), 80.0);
    }

    #[test]
    fn table_rows_carry_rounded_values_and_labels() {
        let rows = table_rows(&[aggregate(1, 83.456, 61.454, 71.999)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].avg_max, 83.46);
        assert_eq!(rows[0].avg_min, 61.45);
        assert_eq!(rows[0].avg_mean, 72.0);
        assert_eq!(
            rows[0].cells(),
            ["2015-01", "83.46", "61.45", "72.00"].map(String::from)
        );
        assert_eq!(TABLE_COLUMNS[0], "Date");
    }

    #[test]
    fn table_and_chart_shapes_agree_bit_for_bit() {
        let aggregates = vec![
            aggregate(1, 83.456, 61.454, 71.456),
            aggregate(2, 84.111, 62.222, 72.333),
        ];
        let rows = table_rows(&aggregates);
        let mean = mean_series(&aggregates);
        let envelope = envelope_series(&aggregates);

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(mean.points[i].month, row.month);
            assert_eq!(mean.points[i].value.to_bits(), row.avg_mean.to_bits());
            assert_eq!(envelope.max_points[i].value.to_bits(), row.avg_max.to_bits());
            assert_eq!(envelope.min_points[i].value.to_bits(), row.avg_min.to_bits());
        }
    }

    #[test]
    fn empty_input_projects_to_empty_shapes() {
        assert!(table_rows(&[]).is_empty());
        assert!(mean_series(&[]).points.is_empty());
        let envelope = envelope_series(&[]);
        assert!(envelope.max_points.is_empty() && envelope.min_points.is_empty());
    }
}
