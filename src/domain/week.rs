//! Academic week boundaries. Pure date math, no clock access.
//!
//! The schedule service is queried for Monday–Saturday spans; Sunday is
//! never a lesson day.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Inclusive [start, end] span of the academic week containing `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// Compute the week for a given date.
    ///
    /// `start` is `today`, unless `today` is a Sunday — then the week starts
    /// on the following Monday. `end` is found by walking forward from
    /// `start` one day at a time, counting only non-Sunday days, until 5
    /// have been counted. A week starting Monday therefore ends on Saturday.
    pub fn containing(today: NaiveDate) -> Self {
        let start = if today.weekday() == Weekday::Sun {
            next_day(today)
        } else {
            today
        };

        let mut end = start;
        let mut counted = 0;
        while counted < 5 {
            end = next_day(end);
            if end.weekday() != Weekday::Sun {
                counted += 1;
            }
        }

        Self { start, end }
    }

    /// Start date in ISO calendar form (YYYY-MM-DD), timezone-naive.
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date in ISO calendar form (YYYY-MM-DD), timezone-naive.
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

fn next_day(date: NaiveDate) -> NaiveDate {
    // chrono only fails here at the end of the representable range
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_today_on_weekdays_and_saturday() {
        // 2025-01-06 is a Monday, 2025-01-11 a Saturday
        for day in 6..=11 {
            let today = date(2025, 1, day);
            assert_eq!(WeekRange::containing(today).start, today);
        }
    }

    #[test]
    fn sunday_shifts_start_to_monday() {
        let sunday = date(2025, 1, 12);
        let range = WeekRange::containing(sunday);
        assert_eq!(range.start, date(2025, 1, 13));
        assert_eq!(range.start.weekday(), Weekday::Mon);
    }

    #[test]
    fn monday_week_ends_on_saturday() {
        let range = WeekRange::containing(date(2025, 1, 6));
        assert_eq!(range.end, date(2025, 1, 11));
        assert_eq!(range.end.weekday(), Weekday::Sat);
    }

    #[test]
    fn walk_counts_exactly_five_non_sundays() {
        // Property over a full cycle of weekdays (and a month boundary).
        for offset in 0..14 {
            let today = date(2025, 1, 25) + Days::new(offset);
            let range = WeekRange::containing(today);
            assert!(range.end > range.start, "end must be after start");

            let mut counted = 0;
            let mut day = range.start;
            while day < range.end {
                day = day.checked_add_days(Days::new(1)).unwrap();
                if day.weekday() != Weekday::Sun {
                    counted += 1;
                }
            }
            assert_eq!(counted, 5, "today={today}");
        }
    }

    #[test]
    fn week_never_contains_the_triggering_sunday() {
        let sunday = date(2025, 3, 2);
        let range = WeekRange::containing(sunday);
        assert!(range.start > sunday);
    }

    #[test]
    fn iso_rendering_is_zero_padded() {
        let range = WeekRange::containing(date(2025, 3, 3));
        assert_eq!(range.start_iso(), "2025-03-03");
        assert_eq!(range.end_iso(), "2025-03-08");
    }

    #[test]
    fn saturday_week_spans_the_sunday_gap() {
        // Saturday start: Sat + (skip Sun) + Mon..Fri = following Friday.
        let range = WeekRange::containing(date(2025, 1, 11));
        assert_eq!(range.end, date(2025, 1, 17));
        assert_eq!(range.end.weekday(), Weekday::Fri);
    }
}
