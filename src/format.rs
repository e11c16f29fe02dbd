//! Brazilian (pt-BR) display formatting for schedule values.
//!
//! These strings are part of the export contract; changing any of them
//! changes the exported file.

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::models::{Basis, ServiceInterval, Status};

/// Date format used for display, parsing and export.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats a distance with `.` thousands separators, e.g. `6.000 km`.
pub fn format_km_br(km: u32) -> String {
    let digits = km.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push_str(" km");
    grouped
}

/// Label for an interval, e.g. `6 meses ou 1.000 km`.
pub fn interval_label(interval: &ServiceInterval) -> String {
    format!(
        "{} meses ou {}",
        interval.months,
        format_km_br(interval.target_mileage)
    )
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `DD/MM/YYYY` date.
pub fn parse_br_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ScheduleError::InvalidDate(trimmed.to_string()))
}

/// Display tag for the estimator.
pub fn basis_tag(basis: Basis) -> &'static str {
    match basis {
        Basis::Time => "⏳ Prazo (meses)",
        Basis::Mileage => "📍 Quilometragem",
    }
}

/// Display tag for the lateness status.
pub fn status_tag(status: Status) -> &'static str {
    match status {
        Status::Late => "❌ Atrasada",
        Status::DueToday => "⚠️ Hoje",
        Status::OnTrack => "✔️ Em dia",
    }
}
