//! Calendar arithmetic for due dates.
//!
//! # Month Overflow
//! Month addition keeps the day of month and clamps it to the last day of
//! the target month when that day does not exist there:
//!
//! | Start | + months | Result |
//! |-------|----------|--------|
//! | 2024-01-31 | 1 | 2024-02-29 |
//! | 2023-01-31 | 1 | 2023-02-28 |
//! | 2024-08-31 | 6 | 2025-02-28 |
//! | 2024-01-15 | 6 | 2024-07-15 |
//!
//! # Bounds
//! Results outside chrono's representable range saturate to
//! [`NaiveDate::MIN`] / [`NaiveDate::MAX`] instead of failing.

use chrono::{Months, NaiveDate, TimeDelta};

/// Adds calendar months to `date`, clamping the day of month.
pub fn add_calendar_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Shifts `date` by a signed number of days, saturating at the calendar bounds.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Signed whole days from `from` to `to`.
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_calendar_months(date(2024, 1, 15), 6), date(2024, 7, 15));
        assert_eq!(add_calendar_months(date(2024, 1, 1), 12), date(2025, 1, 1));
        assert_eq!(add_calendar_months(date(2024, 1, 1), 54), date(2028, 7, 1));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_calendar_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_calendar_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_calendar_months(date(2024, 8, 31), 6), date(2025, 2, 28));
        assert_eq!(add_calendar_months(date(2024, 3, 31), 6), date(2024, 9, 30));
    }

    #[test]
    fn test_add_months_not_thirty_day_steps() {
        // 6 * 30 = 180 days would land on 2024-06-29
        let d = add_calendar_months(date(2024, 1, 1), 6);
        assert_eq!(d, date(2024, 7, 1));
        assert_ne!(d, shift_days(date(2024, 1, 1), 180));
    }

    #[test]
    fn test_add_months_leap_day() {
        assert_eq!(add_calendar_months(date(2024, 2, 29), 12), date(2025, 2, 28));
        assert_eq!(add_calendar_months(date(2024, 2, 29), 48), date(2028, 2, 29));
    }

    #[test]
    fn test_add_months_saturates() {
        assert_eq!(add_calendar_months(NaiveDate::MAX, 6), NaiveDate::MAX);
    }

    #[test]
    fn test_shift_days() {
        assert_eq!(shift_days(date(2024, 2, 20), 10), date(2024, 3, 1));
        assert_eq!(shift_days(date(2024, 1, 1), -12), date(2023, 12, 20));
        assert_eq!(shift_days(date(2024, 1, 1), 0), date(2024, 1, 1));
    }

    #[test]
    fn test_shift_days_saturates() {
        assert_eq!(shift_days(date(2024, 1, 1), i64::MAX), NaiveDate::MAX);
        assert_eq!(shift_days(date(2024, 1, 1), i64::MIN), NaiveDate::MIN);
        assert_eq!(shift_days(date(2024, 1, 1), 1_000_000_000), NaiveDate::MAX);
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2024, 1, 1), date(2023, 12, 20)), -12);
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 2, 20)), 50);
    }
}
