//! Windowing of monthly aggregates for display.

use crate::types::date_window::DateWindow;
use crate::types::monthly::MonthlyAggregate;

/// Keeps the aggregates whose month falls inside the window, inclusive on
/// both ends.
///
/// A window matching zero available months returns an empty vector; that is
/// a valid result, not an error.
pub fn filter_window(
    aggregates: &[MonthlyAggregate],
    window: &DateWindow,
) -> Vec<MonthlyAggregate> {
    aggregates
        .iter()
        .copied()
        .filter(|aggregate| window.contains(aggregate.month))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::date_window::HistoryBounds;
    use chrono::NaiveDate;

    fn twelve_months_of_2000() -> Vec<MonthlyAggregate> {
        (1..=12)
            .map(|m| MonthlyAggregate {
                month: NaiveDate::from_ymd_opt(2000, m, 1).unwrap(),
                avg_max: 80.0 + m as f64,
                avg_min: 60.0 + m as f64,
                avg_mean: 70.0 + m as f64,
            })
            .collect()
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let aggregates = twelve_months_of_2000();
        let window = DateWindow::parse("03/2000", "06/2000", HistoryBounds::default()).unwrap();
        let filtered = filter_window(&aggregates, &window);
        assert_eq!(filtered.len(), 4);
        assert_eq!(
            filtered.iter().map(|a| a.month).collect::<Vec<_>>(),
            (3..=6)
                .map(|m| NaiveDate::from_ymd_opt(2000, m, 1).unwrap())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_match_is_an_empty_result_not_an_error() {
        let aggregates = twelve_months_of_2000();
        let window = DateWindow::parse("01/2010", "06/2010", HistoryBounds::default()).unwrap();
        let filtered = filter_window(&aggregates, &window);
        assert!(filtered.is_empty());
    }

    #[test]
    fn filtering_preserves_order_and_values() {
        let aggregates = twelve_months_of_2000();
        let window = DateWindow::parse("01/2000", "12/2000", HistoryBounds::default()).unwrap();
        assert_eq!(filter_window(&aggregates, &window), aggregates);
    }
}
