//! Non-fatal advisories attached to a projection.

use serde::{Deserialize, Serialize};

/// A condition the caller should surface as a warning.
///
/// Advisories never prevent a projection; they explain why part of the
/// input was disregarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Advisory category.
    pub kind: AdvisoryKind,
    /// Human-readable description (pt-BR).
    pub message: String,
}

/// Categories of advisories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvisoryKind {
    /// The odometer was read before the purchase date; mileage is ignored.
    MeasurementBeforePurchase,
}

impl Advisory {
    /// Creates a measurement-before-purchase advisory.
    pub fn measurement_before_purchase() -> Self {
        Self {
            kind: AdvisoryKind::MeasurementBeforePurchase,
            message: "A 'Data da medição da km' é anterior à data de compra. \
                      A previsão por quilometragem será ignorada."
                .to_string(),
        }
    }
}
