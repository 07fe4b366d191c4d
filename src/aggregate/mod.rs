//! The aggregation core: a chain of pure functions from raw daily
//! observations to display-ready monthly rows and series.
//!
//! No function in this module performs I/O or holds state; concurrent
//! invocations over different locations or windows are fully independent.

pub mod present;
pub mod resample;
pub mod window;

use crate::types::daily::DailyObservation;
use crate::types::date_window::DateWindow;
use crate::types::monthly::MonthlyAggregate;

/// Runs the full pipeline: resample the daily series to monthly means, then
/// keep the months inside the window.
///
/// One parameterized path serves every location and display mode; the
/// caller picks a presentation shape afterwards via
/// [`present::table_rows`], [`present::mean_series`] or
/// [`present::envelope_series`].
pub fn windowed_monthly_means(
    days: &[DailyObservation],
    window: &DateWindow,
) -> Vec<MonthlyAggregate> {
    window::filter_window(&resample::monthly_means(days), window)
}
