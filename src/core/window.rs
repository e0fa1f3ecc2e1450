use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Datelike, Local, NaiveDateTime, NaiveTime, TimeDelta};

use crate::reading::Reading;

/// The «last week» interval relative to a reference instant.
///
/// The interval is always Sunday midnight to Sunday midnight in local
/// calendar terms, regardless of which weekday the reference falls on.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Debug for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl Window {
    /// Compute the last-week window for the given reference instant.
    ///
    /// The reference is converted to a local calendar date-time, anchored
    /// to the most recent Sunday on or before it, and the window spans the
    /// 7 days ending at that Sunday's midnight. The Sunday anchor is
    /// load-bearing: moving it shifts every downstream cost figure.
    #[must_use]
    pub fn last_week_of(reference: DateTime<Local>) -> Self {
        let local = reference.naive_local();
        let this_week_sunday =
            local.date() - TimeDelta::days(i64::from(local.weekday().num_days_from_sunday()));
        let start = (this_week_sunday - TimeDelta::days(7)).and_time(NaiveTime::MIN);
        Self { start, end: start + TimeDelta::days(7) }
    }

    /// Both bounds are exclusive: a reading stamped exactly at the window
    /// start does not count towards last week, same as one stamped exactly
    /// at the end. Billing history depends on this boundary, so it must
    /// not be widened.
    #[must_use]
    pub fn contains(self, time: DateTime<Local>) -> bool {
        let time = time.naive_local();
        (self.start < time) && (time < self.end)
    }

    /// Keep the readings that fall within the window, preserving their
    /// relative order.
    #[must_use]
    pub fn filter(self, readings: &[Reading]) -> Vec<Reading> {
        readings.iter().copied().filter(|reading| self.contains(reading.time)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::dec;

    use super::*;

    fn local(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_midweek_reference_anchors_to_previous_sunday() {
        // 2024-07-17 is a Wednesday; this week's Sunday is 2024-07-14.
        let window = Window::last_week_of(local(2024, 7, 17, 15));
        assert_eq!(window.start, local(2024, 7, 7, 0).naive_local());
        assert_eq!(window.end, local(2024, 7, 14, 0).naive_local());
    }

    #[test]
    fn test_sunday_reference_counts_as_this_week() {
        // A Sunday reference anchors to itself, not to the week before.
        let window = Window::last_week_of(local(2024, 7, 14, 9));
        assert_eq!(window.start, local(2024, 7, 7, 0).naive_local());
        assert_eq!(window.end, local(2024, 7, 14, 0).naive_local());
    }

    #[test]
    fn test_saturday_reference() {
        // 2024-07-13 is a Saturday, still anchored to Sunday 2024-07-07.
        let window = Window::last_week_of(local(2024, 7, 13, 23));
        assert_eq!(window.start, local(2024, 6, 30, 0).naive_local());
        assert_eq!(window.end, local(2024, 7, 7, 0).naive_local());
    }

    #[test]
    fn test_both_bounds_are_exclusive() {
        let window = Window::last_week_of(local(2024, 7, 17, 15));
        let start = local(2024, 7, 7, 0);
        let end = local(2024, 7, 14, 0);
        assert!(!window.contains(start));
        assert!(window.contains(start + TimeDelta::seconds(1)));
        assert!(window.contains(end - TimeDelta::seconds(1)));
        assert!(!window.contains(end));
    }

    #[test]
    fn test_filter_preserves_order() {
        let window = Window::last_week_of(local(2024, 7, 17, 15));
        let readings = vec![
            Reading::new(local(2024, 7, 10, 18), dec!(0.7).into()),
            Reading::new(local(2024, 7, 20, 9), dec!(0.9).into()),
            Reading::new(local(2024, 7, 9, 6), dec!(0.2).into()),
        ];
        let filtered = window.filter(&readings);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].time, local(2024, 7, 10, 18));
        assert_eq!(filtered[1].time, local(2024, 7, 9, 6));
    }
}
