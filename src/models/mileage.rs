//! Odometer sample and the daily mileage rate derived from it.
//!
//! # Rate Derivation
//!
//! The rate is the average distance driven per day between purchase and the
//! day the odometer was read:
//!
//! | Reading | Days elapsed | Rate |
//! |---------|--------------|------|
//! | 0 | >= 0 | `Some(0.0)` (stationary vehicle) |
//! | > 0 | > 0 | `Some(reading / days)` |
//! | > 0 | 0 | `None` |
//! | any | < 0 | `None` (sample precedes purchase) |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single odometer reading and the day it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageSample {
    /// Odometer reading (km).
    pub odometer_reading: u32,
    /// Date the reading was taken.
    pub measured_on: NaiveDate,
}

impl MileageSample {
    /// Creates a new sample.
    pub fn new(odometer_reading: u32, measured_on: NaiveDate) -> Self {
        Self {
            odometer_reading,
            measured_on,
        }
    }

    /// Whether the sample can be used for a vehicle bought on `purchase_date`.
    #[inline]
    pub fn is_valid_for(&self, purchase_date: NaiveDate) -> bool {
        self.measured_on >= purchase_date
    }

    /// Days between purchase and measurement (negative if the sample is invalid).
    #[inline]
    pub fn days_elapsed(&self, purchase_date: NaiveDate) -> i64 {
        (self.measured_on - purchase_date).num_days()
    }
}

/// Average km driven per day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DailyMileageRate(f64);

impl DailyMileageRate {
    /// Derives the rate from a sample. See the module table for the cases.
    pub fn derive(purchase_date: NaiveDate, sample: &MileageSample) -> Option<Self> {
        if !sample.is_valid_for(purchase_date) {
            return None;
        }

        let days = sample.days_elapsed(purchase_date);
        if sample.odometer_reading == 0 {
            Some(Self(0.0))
        } else if days > 0 {
            Some(Self(sample.odometer_reading as f64 / days as f64))
        } else {
            None
        }
    }

    /// Km per day.
    #[inline]
    pub fn km_per_day(&self) -> f64 {
        self.0
    }

    /// Whether the vehicle has not moved since purchase.
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.0 <= 0.0
    }
}
