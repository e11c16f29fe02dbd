//! Schedule row (projected outcome for one service interval).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which estimator determined the projected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Calendar months since purchase.
    Time,
    /// Odometer projection reached the target before the calendar date.
    Mileage,
}

/// Lateness of a projected date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Projected date is in the past.
    Late,
    /// Projected date is today.
    DueToday,
    /// Projected date is in the future.
    OnTrack,
}

impl Status {
    /// Classifies `projected` against `today`.
    pub fn classify(projected: NaiveDate, today: NaiveDate) -> Self {
        match projected.cmp(&today) {
            std::cmp::Ordering::Less => Status::Late,
            std::cmp::Ordering::Equal => Status::DueToday,
            std::cmp::Ordering::Greater => Status::OnTrack,
        }
    }
}

/// One line of the computed schedule.
///
/// Invariant: `projected_date <= official_date`, and `basis == Mileage`
/// only when `projected_date < official_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Interval ordinal (1-based).
    pub ordinal: u8,
    /// Display label, e.g. "6 meses ou 1.000 km".
    pub label: String,
    /// Manufacturer due date (purchase + months).
    pub official_date: NaiveDate,
    /// Reported due date after considering mileage.
    pub projected_date: NaiveDate,
    /// Estimator that produced `projected_date`.
    pub basis: Basis,
    /// Lateness relative to today.
    pub status: Status,
    /// Signed days from today to `projected_date` (negative when late).
    pub days_remaining: i64,
}

impl ScheduleRow {
    /// Whether the service is overdue.
    #[inline]
    pub fn is_late(&self) -> bool {
        self.status == Status::Late
    }

    /// Days the mileage projection pulled the due date forward (0 for time-based rows).
    pub fn days_advanced(&self) -> i64 {
        (self.official_date - self.projected_date).num_days()
    }
}
