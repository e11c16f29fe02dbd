//! Vehicle service schedule projection.
//!
//! Computes when each revision of a fixed maintenance plan falls due, given
//! the purchase date and, optionally, an odometer reading. The calendar
//! estimate (months since purchase) is the default; an odometer-based
//! estimate replaces it only when it comes strictly earlier.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ServiceInterval`, `MileageSample`,
//!   `DailyMileageRate`, `ScheduleRow`, `Basis`, `Status`, `Advisory`
//! - **`projector`**: `ScheduleProjector`, requests, outcomes and summary
//! - **`validation`**: Input checks that turn bad mileage into advisories
//! - **`calendar`**: Month addition and saturating day shifts
//! - **`format`**: pt-BR display strings (`DD/MM/YYYY`, `1.000 km`, tags)
//! - **`export`**: CSV export, overdue highlights, rate caption
//! - **`config`**: TOML settings (the only place that reads the local date)
//!
//! # Architecture
//!
//! Everything here is pure and synchronous. The presentation layer owns
//! input widgets, rendering and download wiring; it calls
//! [`projector::ScheduleProjector::evaluate`] on every input change and
//! renders the result.

pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod projector;
pub mod validation;

pub use error::{Result, ScheduleError};
