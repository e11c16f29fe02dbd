//! Input validation for projection requests.
//!
//! Detects inputs that must be disregarded before projecting. Nothing here
//! is fatal: each problem becomes an [`Advisory`] and the affected input is
//! dropped, leaving a time-based projection.
//!
//! Checks:
//! - Odometer measurement dated before the purchase

use log::warn;

use crate::models::{Advisory, MileageSample};
use crate::projector::ProjectionRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<Advisory>>;

/// Validates a projection request.
///
/// # Returns
/// `Ok(())` if every supplied input is usable, `Err(advisories)` otherwise.
/// At most one advisory is produced per condition, regardless of how many
/// schedule rows the condition affects.
pub fn validate_request(request: &ProjectionRequest) -> ValidationResult {
    let mut advisories = Vec::new();

    if let Some(measured_on) = request.measured_on.filter(|_| request.has_mileage_input) {
        if measured_on < request.purchase_date {
            warn!(
                "odometer measured on {} before purchase on {}; ignoring mileage",
                measured_on, request.purchase_date
            );
            advisories.push(Advisory::measurement_before_purchase());
        }
    }

    if advisories.is_empty() {
        Ok(())
    } else {
        Err(advisories)
    }
}

/// Returns the request's mileage sample if it is present and usable.
pub fn accepted_sample(request: &ProjectionRequest) -> Option<MileageSample> {
    request
        .mileage_sample()
        .filter(|sample| sample.is_valid_for(request.purchase_date))
}
