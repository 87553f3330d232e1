//! Time-window resolution for "last N days" queries.
//!
//! Windows are anchored at the latest order timestamp in the dataset, not
//! at the wall clock: analyses over a fixed dataset are reproducible, and a
//! stale export still answers questions about its own final days of data.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use orderlens_core::Order;
use tracing::debug;

use crate::error::AnalysisError;

/// An inclusive timestamp range.
///
/// `start` is the midnight opening the first calendar day of the window,
/// in the same UTC offset as the latest order; `end` is the latest order
/// timestamp itself, untruncated. An order qualifies iff
/// `start <= timestamp <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First instant of the window.
    pub start: DateTime<FixedOffset>,
    /// Last instant of the window.
    pub end: DateTime<FixedOffset>,
}

impl Window {
    /// Whether `ts` falls inside the window, boundaries included.
    #[must_use]
    pub fn contains(&self, ts: DateTime<FixedOffset>) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Calendar date of the window start.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date of the window end.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }
}

/// Resolve the window covering the last `days` calendar days of `orders`.
///
/// The window always spans the full day of the latest order plus the
/// `days - 1` preceding calendar days, regardless of the time-of-day of the
/// latest order.
///
/// # Errors
///
/// - [`AnalysisError::InvalidDays`] if `days` is zero.
/// - [`AnalysisError::NoData`] if the order table is empty (no anchor).
pub fn resolve_window(orders: &[Order], days: u32) -> Result<Window, AnalysisError> {
    if days == 0 {
        return Err(AnalysisError::InvalidDays(days));
    }

    let latest = orders
        .iter()
        .map(|o| o.ordered_at)
        .max()
        .ok_or(AnalysisError::NoData)?;

    // Midnight of the latest order's day, in the same offset.
    let since_midnight = latest.time().signed_duration_since(NaiveTime::MIN);
    let span = Duration::try_days(i64::from(days) - 1).ok_or_else(|| {
        AnalysisError::internal("resolve_window", format!("day count {days} out of range"))
    })?;
    let start = latest
        .checked_sub_signed(since_midnight)
        .and_then(|midnight| midnight.checked_sub_signed(span))
        .ok_or_else(|| {
            AnalysisError::internal(
                "resolve_window",
                format!("window start underflows the calendar for days={days}"),
            )
        })?;

    let window = Window { start, end: latest };
    debug!(start = %window.start, end = %window.end, days, "resolved analysis window");
    Ok(window)
}

/// Named reporting periods accepted by the sales summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// The last 7 calendar days.
    Last7Days,
    /// The last 30 calendar days.
    Last30Days,
    /// The last 90 calendar days.
    Last90Days,
}

impl Period {
    /// Day-count for this period.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
        }
    }

    /// Look up a period by its wire name (`last_7_days`, `last_30_days`,
    /// `last_90_days`). Returns `None` for anything else.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "last_7_days" => Some(Self::Last7Days),
            "last_30_days" => Some(Self::Last30Days),
            "last_90_days" => Some(Self::Last90Days),
            _ => None,
        }
    }

    /// Day-count for `name`, falling back to `default_days` when the name
    /// is not a recognized period.
    #[must_use]
    pub fn days_or(name: &str, default_days: u32) -> u32 {
        Self::parse(name).map_or(default_days, Self::days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn order_at(id: &str, s: &str) -> Order {
        Order::new(id, "m1", ts(s))
    }

    #[test]
    fn test_window_covers_full_first_day() {
        let orders = vec![order_at("o1", "2024-01-10T15:00:00+00:00")];
        let window = resolve_window(&orders, 7).unwrap();

        assert_eq!(window.start, ts("2024-01-04T00:00:00+00:00"));
        assert_eq!(window.end, ts("2024-01-10T15:00:00+00:00"));
        assert!(window.contains(ts("2024-01-04T00:00:01+00:00")));
        assert!(!window.contains(ts("2024-01-03T23:59:59+00:00")));
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let orders = vec![order_at("o1", "2024-01-10T15:00:00+00:00")];
        let window = resolve_window(&orders, 7).unwrap();

        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(ts("2024-01-10T15:00:01+00:00")));
    }

    #[test]
    fn test_window_anchors_at_latest_order() {
        let orders = vec![
            order_at("o1", "2024-01-05T09:00:00+00:00"),
            order_at("o2", "2024-01-10T15:00:00+00:00"),
            order_at("o3", "2024-01-08T12:00:00+00:00"),
        ];
        let window = resolve_window(&orders, 1).unwrap();

        // days=1 covers only the latest order's calendar day.
        assert_eq!(window.start, ts("2024-01-10T00:00:00+00:00"));
        assert_eq!(window.end, ts("2024-01-10T15:00:00+00:00"));
    }

    #[test]
    fn test_window_keeps_offset_of_latest() {
        let orders = vec![order_at("o1", "2024-01-10T15:00:00+08:00")];
        let window = resolve_window(&orders, 7).unwrap();

        assert_eq!(window.start, ts("2024-01-04T00:00:00+08:00"));
        assert_eq!(window.start.offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_zero_days_rejected() {
        let orders = vec![order_at("o1", "2024-01-10T15:00:00+00:00")];
        assert!(matches!(
            resolve_window(&orders, 0),
            Err(AnalysisError::InvalidDays(0))
        ));
    }

    #[test]
    fn test_no_orders_is_no_data() {
        assert!(matches!(
            resolve_window(&[], 7),
            Err(AnalysisError::NoData)
        ));
    }

    #[test]
    fn test_period_table() {
        assert_eq!(Period::parse("last_7_days"), Some(Period::Last7Days));
        assert_eq!(Period::parse("last_30_days"), Some(Period::Last30Days));
        assert_eq!(Period::parse("last_90_days"), Some(Period::Last90Days));
        assert_eq!(Period::parse("yesterday"), None);

        assert_eq!(Period::days_or("last_90_days", 30), 90);
        assert_eq!(Period::days_or("forever", 30), 30);
    }
}
