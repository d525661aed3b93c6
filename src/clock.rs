use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};

/// Number of non-Sunday days ahead of today that can still be booked.
pub const BOOKING_WINDOW_DAYS: u32 = 3;

/// Source of the process-local wall-clock time.
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn current_time_label(&self) -> String {
        current_time_label(self.now())
    }

    fn max_bookable_date(&self) -> NaiveDate {
        max_bookable_date(self.today())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub fn current_time_label(now: NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Counts days forward from `today`, skipping Sundays, until the booking
/// window is exhausted. Never returns a Sunday.
pub fn max_bookable_date(today: NaiveDate) -> NaiveDate {
    let mut date = today;
    let mut counted = 0;
    while counted < BOOKING_WINDOW_DAYS {
        date = date + Duration::days(1);
        if date.weekday() != Weekday::Sun {
            counted += 1;
        }
    }
    date
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test_case::test_case("2026-10-12", "2026-10-15" ; "monday")]
    #[test_case::test_case("2026-10-15", "2026-10-19" ; "thursday skips sunday")]
    #[test_case::test_case("2026-10-16", "2026-10-20" ; "friday skips sunday")]
    #[test_case::test_case("2026-10-17", "2026-10-21" ; "saturday skips sunday")]
    #[test_case::test_case("2026-10-18", "2026-10-21" ; "sunday")]
    #[test_case::test_case("2026-12-30", "2027-01-02" ; "year boundary")]
    fn test_max_bookable_date(today: &str, expected: &str) {
        assert_eq!(max_bookable_date(date(today)), date(expected));
    }

    #[test]
    fn test_max_bookable_date_counts_three_non_sundays() {
        let mut today = date("2026-01-01");
        for _ in 0..366 {
            let max = max_bookable_date(today);
            assert_ne!(max.weekday(), Weekday::Sun);
            let counted = today
                .iter_days()
                .skip(1)
                .take_while(|day| *day <= max)
                .filter(|day| day.weekday() != Weekday::Sun)
                .count();
            assert_eq!(counted, BOOKING_WINDOW_DAYS as usize);
            today = today + Duration::days(1);
        }
    }

    #[test]
    fn test_labels_are_zero_padded() {
        let now = date("2026-03-05").and_hms_opt(7, 5, 59).unwrap();
        assert_eq!(current_time_label(now), "07:05");
        assert_eq!(format_date(now.date()), "2026-03-05");
    }
}
