//! User-supplied month ranges and their validation.
//!
//! A [`DateWindow`] is parsed from two `MM/YYYY` strings and is always
//! anchored to the first day of each month. Validation rejects windows that
//! fall outside the deployment's supported history or that are too narrow
//! to show a meaningful trend.

use chrono::NaiveDate;
use thiserror::Error;

/// Minimum accepted span between window start and end, in days.
///
/// 58 days is just under two calendar months, so any window shorter than
/// two months (including the degenerate `start == end`) is rejected.
pub const MIN_SPAN_DAYS: i64 = 58;

/// The closed range of history supported by a deployment.
///
/// The default matches the archive fetch issued by [`crate::ArchiveClient`]:
/// 1970-01-01 through 2020-01-01.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryBounds {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl Default for HistoryBounds {
    fn default() -> Self {
        Self {
            earliest: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            latest: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }
}

/// Errors produced while parsing and validating a [`DateWindow`].
///
/// `Format` corresponds to a malformed input string; `OutOfBounds` and
/// `SpanTooNarrow` are the two range-invariant failures, kept as separate
/// variants so callers can distinguish them by condition rather than by
/// matching on message text.
#[derive(Debug, Error, PartialEq)]
pub enum DateWindowError {
    #[error("Invalid date format. Please enter valid dates in MM/YYYY format.")]
    Format { input: String },

    #[error("Dates should be within the range from {} to {}.",
        earliest.format("%m/%Y"), latest.format("%m/%Y"))]
    OutOfBounds {
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("End date must be at least 2 months greater than start date.")]
    SpanTooNarrow { span_days: i64 },
}

impl DateWindowError {
    /// True for the range-invariant failures (as opposed to a parse failure).
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            DateWindowError::OutOfBounds { .. } | DateWindowError::SpanTooNarrow { .. }
        )
    }
}

/// A validated, inclusive month range used to filter aggregates for display.
///
/// Both ends are anchored to the first day of their month. Construction goes
/// through [`DateWindow::parse`], which enforces the bounds and minimum-span
/// invariants, so holding a `DateWindow` implies a displayable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Parses two `MM/YYYY` strings into a validated window.
    ///
    /// A synthetic day-of-month `01` is appended before parsing, so both
    /// ends land on the first of their month. Validation order:
    ///
    /// 1. [`DateWindowError::Format`] if either string is malformed.
    /// 2. [`DateWindowError::OutOfBounds`] if `start` precedes
    ///    `bounds.earliest` or `end` exceeds `bounds.latest`.
    /// 3. [`DateWindowError::SpanTooNarrow`] if `end - start` is less than
    ///    [`MIN_SPAN_DAYS`].
    ///
    /// Pure function of its inputs; no side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use soflo::{DateWindow, HistoryBounds};
    ///
    /// let window = DateWindow::parse("01/2015", "03/2015", HistoryBounds::default()).unwrap();
    /// assert_eq!(window.start().format("%Y-%m-%d").to_string(), "2015-01-01");
    /// assert_eq!(window.end().format("%Y-%m-%d").to_string(), "2015-03-01");
    /// ```
    pub fn parse(
        start: &str,
        end: &str,
        bounds: HistoryBounds,
    ) -> Result<DateWindow, DateWindowError> {
        let start = parse_month_year(start)?;
        let end = parse_month_year(end)?;

        if start < bounds.earliest || end > bounds.latest {
            return Err(DateWindowError::OutOfBounds {
                earliest: bounds.earliest,
                latest: bounds.latest,
            });
        }

        let span_days = (end - start).num_days();
        if span_days < MIN_SPAN_DAYS {
            return Err(DateWindowError::SpanTooNarrow { span_days });
        }

        Ok(DateWindow { start, end })
    }

    /// First day of the starting month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the ending month.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a first-of-month anchor falls inside the window (inclusive).
    pub fn contains(&self, month: NaiveDate) -> bool {
        self.start <= month && month <= self.end
    }
}

fn parse_month_year(input: &str) -> Result<NaiveDate, DateWindowError> {
    let with_day = format!("{}/01", input.trim());
    NaiveDate::parse_from_str(&with_day, "%m/%Y/%d").map_err(|_| DateWindowError::Format {
        input: input.to_string(),
    })
}
