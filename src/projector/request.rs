//! Projection inputs.
//!
//! [`ScheduleInput`] is what the host layer hands over, with every field
//! optional. [`ProjectionRequest`] is the same input once a purchase date
//! is known and "today" has been fixed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MileageSample;

/// Input container for a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Vehicle purchase date.
    pub purchase_date: NaiveDate,
    /// Whether the user chose to supply mileage at all.
    pub has_mileage_input: bool,
    /// Odometer reading (km).
    pub odometer_reading: Option<u32>,
    /// Date of the odometer reading.
    pub measured_on: Option<NaiveDate>,
    /// Reference date for status and days remaining.
    pub today: NaiveDate,
}

impl ProjectionRequest {
    /// Creates a time-only request evaluated against `today`.
    ///
    /// The request never reads the clock; hosts that want the local date
    /// pass [`ScheduleConfig::today`](crate::config::ScheduleConfig::today).
    pub fn new(purchase_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            purchase_date,
            has_mileage_input: false,
            odometer_reading: None,
            measured_on: None,
            today,
        }
    }

    /// Supplies a complete odometer sample and enables mileage input.
    pub fn with_mileage(mut self, odometer_reading: u32, measured_on: NaiveDate) -> Self {
        self.has_mileage_input = true;
        self.odometer_reading = Some(odometer_reading);
        self.measured_on = Some(measured_on);
        self
    }

    /// Enables or disables mileage input without touching the fields.
    pub fn with_mileage_input(mut self, enabled: bool) -> Self {
        self.has_mileage_input = enabled;
        self
    }

    /// Sets the odometer reading.
    pub fn with_odometer_reading(mut self, km: u32) -> Self {
        self.odometer_reading = Some(km);
        self
    }

    /// Sets the measurement date.
    pub fn with_measured_on(mut self, measured_on: NaiveDate) -> Self {
        self.measured_on = Some(measured_on);
        self
    }

    /// The odometer sample, if mileage input is enabled and both fields are set.
    ///
    /// Validity against the purchase date is not checked here.
    pub fn mileage_sample(&self) -> Option<MileageSample> {
        if !self.has_mileage_input {
            return None;
        }
        match (self.odometer_reading, self.measured_on) {
            (Some(km), Some(on)) => Some(MileageSample::new(km, on)),
            _ => None,
        }
    }
}

/// Raw input from the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Vehicle purchase date, if selected yet.
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    /// Mileage toggle.
    #[serde(default)]
    pub has_mileage_input: bool,
    /// Odometer reading (km).
    #[serde(default)]
    pub odometer_reading: Option<u32>,
    /// Date of the odometer reading.
    #[serde(default)]
    pub measured_on: Option<NaiveDate>,
}

impl ScheduleInput {
    /// Converts to a request, or `None` while the purchase date is missing.
    pub fn to_request(&self, today: NaiveDate) -> Option<ProjectionRequest> {
        let purchase_date = self.purchase_date?;
        Some(ProjectionRequest {
            purchase_date,
            has_mileage_input: self.has_mileage_input,
            odometer_reading: self.odometer_reading,
            measured_on: self.measured_on,
            today,
        })
    }
}
