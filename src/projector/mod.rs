//! Service schedule projection.
//!
//! Turns a purchase date and an optional odometer sample into one
//! [`ScheduleRow`](crate::models::ScheduleRow) per service interval.
//!
//! # Algorithm
//!
//! Each interval has two competing due-date estimators: calendar months
//! since purchase, and the day the odometer reaches the interval's target
//! at the average daily rate. Whichever comes first governs, with ties
//! going to the calendar.
//!
//! # Summary
//!
//! `ScheduleSummary` aggregates a projection into status counts and the
//! next/most overdue services.

mod engine;
mod request;
mod summary;

pub use engine::{
    days_to_target, mileage_due_date, project_interval, Projection, ScheduleOutcome,
    ScheduleProjector, PURCHASE_DATE_PROMPT,
};
pub use request::{ProjectionRequest, ScheduleInput};
pub use summary::ScheduleSummary;
