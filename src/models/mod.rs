//! Service schedule domain models.
//!
//! Value types for the inputs and outputs of the projector. All of them
//! are immutable once produced and serializable for the host layer.
//!
//! # Domain Mappings
//!
//! | Type | Meaning |
//! |------|---------|
//! | ServiceInterval | One revision of the manufacturer's plan |
//! | MileageSample | Odometer reading with its date |
//! | DailyMileageRate | Average km/day since purchase |
//! | ScheduleRow | Projected outcome for one revision |
//! | Advisory | Non-fatal warning about the input |

mod advisory;
mod interval;
mod mileage;
mod row;

pub use advisory::{Advisory, AdvisoryKind};
pub use interval::{ServiceInterval, STANDARD_INTERVALS};
pub use mileage::{DailyMileageRate, MileageSample};
pub use row::{Basis, ScheduleRow, Status};
