//! Service schedule projector.
//!
//! # Algorithm
//!
//! For each interval `(ordinal, months, target_mileage)`:
//!
//! 1. `official = purchase + months` (calendar months, day clamped).
//! 2. Start with `projected = official`, basis `Time`.
//! 3. With a usable sample and a rate `r > 0`:
//!    - `remaining = target - reading` (negative once the target is passed)
//!    - `days = ceil(remaining / r)` if `remaining >= 0`, else `floor(remaining / r)`
//!    - `mileage_date = measured_on + days`
//!    - if `mileage_date < official`, it replaces the projected date and the
//!      basis becomes `Mileage`.
//! 4. Status and signed days remaining are taken against `today`.
//!
//! A stationary vehicle (`r == 0`) never reaches a target, so every row
//! stays time-based.
//!
//! # Complexity
//! O(n) in the number of intervals (9 for the standard plan).

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use super::request::{ProjectionRequest, ScheduleInput};
use crate::calendar::{add_calendar_months, days_between, shift_days};
use crate::format::interval_label;
use crate::models::{
    Advisory, Basis, DailyMileageRate, MileageSample, ScheduleRow, ServiceInterval, Status,
    STANDARD_INTERVALS,
};
use crate::validation::{accepted_sample, validate_request};

/// Prompt shown while no purchase date has been selected.
pub const PURCHASE_DATE_PROMPT: &str = "Selecione a data de compra para gerar o cronograma.";

/// Result of a projection: rows plus the advisories raised on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Purchase date the schedule is anchored on.
    pub purchase_date: NaiveDate,
    /// Reference date used for status.
    pub today: NaiveDate,
    /// Odometer sample actually used (`None` if absent or rejected).
    pub sample: Option<MileageSample>,
    /// Daily rate derived from `sample`.
    pub rate: Option<DailyMileageRate>,
    /// One row per interval, ordinal ascending.
    pub rows: Vec<ScheduleRow>,
    /// Non-fatal warnings about the input.
    pub advisories: Vec<Advisory>,
}

impl Projection {
    /// Finds the row for an ordinal.
    pub fn row(&self, ordinal: u8) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.ordinal == ordinal)
    }

    /// Late rows, ordinal ascending.
    pub fn overdue_rows(&self) -> Vec<&ScheduleRow> {
        self.rows.iter().filter(|r| r.is_late()).collect()
    }

    /// Whether any advisory was raised.
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}

/// What the host should display for a given input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduleOutcome {
    /// No purchase date yet; show [`PURCHASE_DATE_PROMPT`].
    AwaitingPurchaseDate,
    /// A complete projection.
    Ready(Projection),
}

impl ScheduleOutcome {
    /// The projection, if ready.
    pub fn projection(&self) -> Option<&Projection> {
        match self {
            ScheduleOutcome::Ready(p) => Some(p),
            ScheduleOutcome::AwaitingPurchaseDate => None,
        }
    }
}

/// Projects the fixed service plan onto a purchase date and optional mileage.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_service_schedule::models::Basis;
/// use u_service_schedule::projector::{ProjectionRequest, ScheduleProjector};
///
/// let purchase = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let request = ProjectionRequest::new(purchase, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
///
/// let projection = ScheduleProjector::new().project(&request);
/// assert_eq!(projection.rows.len(), 9);
/// assert_eq!(projection.rows[0].official_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
/// assert_eq!(projection.rows[0].basis, Basis::Time);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleProjector {
    intervals: &'static [ServiceInterval],
}

impl Default for ScheduleProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleProjector {
    /// Creates a projector over the standard 9-revision plan.
    pub fn new() -> Self {
        Self {
            intervals: &STANDARD_INTERVALS,
        }
    }

    /// The interval table in use.
    pub fn intervals(&self) -> &[ServiceInterval] {
        self.intervals
    }

    /// Evaluates raw host input, projecting only once a purchase date exists.
    pub fn evaluate(&self, input: &ScheduleInput, today: NaiveDate) -> ScheduleOutcome {
        match input.to_request(today) {
            Some(request) => ScheduleOutcome::Ready(self.project(&request)),
            None => ScheduleOutcome::AwaitingPurchaseDate,
        }
    }

    /// Projects every interval.
    ///
    /// Never fails: an unusable mileage sample is dropped (with an advisory)
    /// and the rows fall back to the calendar estimate.
    pub fn project(&self, request: &ProjectionRequest) -> Projection {
        let advisories = validate_request(request).err().unwrap_or_default();
        let sample = accepted_sample(request);
        let rate = sample.and_then(|s| DailyMileageRate::derive(request.purchase_date, &s));

        if let Some(r) = rate {
            debug!("daily mileage rate {:.3} km/day", r.km_per_day());
        }

        let mileage = match (sample, rate) {
            (Some(s), Some(r)) => Some((s, r)),
            _ => None,
        };

        let rows = self
            .intervals
            .iter()
            .map(|interval| {
                project_interval(interval, request.purchase_date, mileage, request.today)
            })
            .collect();

        Projection {
            purchase_date: request.purchase_date,
            today: request.today,
            sample,
            rate,
            rows,
            advisories,
        }
    }
}

/// Projects a single interval.
pub fn project_interval(
    interval: &ServiceInterval,
    purchase_date: NaiveDate,
    mileage: Option<(MileageSample, DailyMileageRate)>,
    today: NaiveDate,
) -> ScheduleRow {
    let official_date = add_calendar_months(purchase_date, interval.months);

    let (projected_date, basis) = match mileage {
        Some((sample, rate)) if !rate.is_stationary() => {
            let mileage_date = mileage_due_date(&sample, rate, interval.target_mileage);
            if mileage_date < official_date {
                (mileage_date, Basis::Mileage)
            } else {
                (official_date, Basis::Time)
            }
        }
        _ => (official_date, Basis::Time),
    };

    ScheduleRow {
        ordinal: interval.ordinal,
        label: interval_label(interval),
        official_date,
        projected_date,
        basis,
        status: Status::classify(projected_date, today),
        days_remaining: days_between(today, projected_date),
    }
}

/// Date the odometer reaches (or reached) `target_mileage` at `rate`.
///
/// `rate` must be positive.
pub fn mileage_due_date(
    sample: &MileageSample,
    rate: DailyMileageRate,
    target_mileage: u32,
) -> NaiveDate {
    let remaining = target_mileage as i64 - sample.odometer_reading as i64;
    shift_days(sample.measured_on, days_to_target(remaining, rate))
}

/// Whole days to cover `remaining` km, rounded away from the sample date.
///
/// Positive remainders round up (the target is reached during that day);
/// negative ones round down (the target was passed on or before that day).
pub fn days_to_target(remaining: i64, rate: DailyMileageRate) -> i64 {
    let exact = remaining as f64 / rate.km_per_day();
    let days = if remaining >= 0 {
        exact.ceil()
    } else {
        exact.floor()
    };
    days as i64
}
