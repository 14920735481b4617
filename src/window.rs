//! The rest-of-day window used to pick today's events.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

/// Time range [now, end of today] in the target zone.
/// Both bounds are inclusive.
#[derive(Debug, Clone)]
pub struct EventWindow {
    pub from: DateTime<Tz>,
    pub to: DateTime<Tz>,
}

impl EventWindow {
    /// Window from `now` until 23:59:59 of the same local date.
    pub fn rest_of_day(now: DateTime<Tz>) -> Self {
        let end_of_day = now.date_naive().and_hms_opt(23, 59, 59).unwrap();
        // A DST jump can make 23:59:59 ambiguous; take the later reading.
        let to = now
            .timezone()
            .from_local_datetime(&end_of_day)
            .latest()
            .unwrap_or(now);
        EventWindow { from: now, to }
    }

    /// Whether `at` falls inside the window.
    pub fn contains(&self, at: &DateTime<Tz>) -> bool {
        self.from <= *at && *at <= self.to
    }

    /// The zone the window was built in.
    pub fn timezone(&self) -> Tz {
        self.from.timezone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn shanghai() -> Tz {
        "Asia/Shanghai".parse().unwrap()
    }

    #[test]
    fn test_rest_of_day_ends_at_end_of_same_date() {
        let now = shanghai().with_ymd_and_hms(2024, 5, 4, 10, 30, 0).unwrap();
        let window = EventWindow::rest_of_day(now);

        assert_eq!(window.from, now);
        assert_eq!(
            window.to,
            shanghai().with_ymd_and_hms(2024, 5, 4, 23, 59, 59).unwrap(),
            "Window should close at 23:59:59 of the run's local date"
        );
    }

    #[test]
    fn test_contains_is_inclusive_on_both_bounds() {
        let now = shanghai().with_ymd_and_hms(2024, 5, 4, 10, 30, 0).unwrap();
        let window = EventWindow::rest_of_day(now);

        assert!(window.contains(&window.from), "Start bound should count");
        assert!(window.contains(&window.to), "End bound should count");
    }

    #[test]
    fn test_excludes_past_and_next_day() {
        let now = shanghai().with_ymd_and_hms(2024, 5, 4, 10, 30, 0).unwrap();
        let window = EventWindow::rest_of_day(now);

        assert!(!window.contains(&(now - Duration::minutes(1))));
        assert!(!window.contains(&(window.to + Duration::seconds(1))));
    }

    #[test]
    fn test_late_run_still_covers_remaining_minutes() {
        let now = shanghai().with_ymd_and_hms(2024, 5, 4, 23, 58, 0).unwrap();
        let window = EventWindow::rest_of_day(now);

        let last_minute = shanghai().with_ymd_and_hms(2024, 5, 4, 23, 59, 0).unwrap();
        assert!(window.contains(&last_minute));
    }
}
