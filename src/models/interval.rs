//! Service interval model.
//!
//! A service interval is one entry of the manufacturer's maintenance plan:
//! "revision N is due after M months or K km, whichever comes first".
//! The plan itself is a fixed, ordered table.

use serde::{Deserialize, Serialize};

/// One scheduled service from the manufacturer's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInterval {
    /// Position in the plan (1-based).
    pub ordinal: u8,
    /// Calendar months after purchase.
    pub months: u32,
    /// Odometer reading (km) at which the service is due.
    pub target_mileage: u32,
}

impl ServiceInterval {
    /// Creates a new interval.
    pub const fn new(ordinal: u8, months: u32, target_mileage: u32) -> Self {
        Self {
            ordinal,
            months,
            target_mileage,
        }
    }
}

/// The standard 9-revision plan: first service at 6 months / 1.000 km,
/// then every 6 months / 6.000 km.
pub const STANDARD_INTERVALS: [ServiceInterval; 9] = [
    ServiceInterval::new(1, 6, 1_000),
    ServiceInterval::new(2, 12, 6_000),
    ServiceInterval::new(3, 18, 12_000),
    ServiceInterval::new(4, 24, 18_000),
    ServiceInterval::new(5, 30, 24_000),
    ServiceInterval::new(6, 36, 30_000),
    ServiceInterval::new(7, 42, 36_000),
    ServiceInterval::new(8, 48, 42_000),
    ServiceInterval::new(9, 54, 48_000),
];
