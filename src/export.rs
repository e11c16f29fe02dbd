//! Text renderings of a projection: CSV export, overdue highlights and the
//! average-rate caption.
//!
//! # CSV Format
//!
//! Comma separated, `\n` line endings, UTF-8 without BOM, header first,
//! one line per row in ordinal order:
//!
//! ```text
//! Revisão,Tipo,Data oficial (fabricante),Data prevista,Base,Status,Faltam (dias)
//! 1,6 meses ou 1.000 km,15/07/2024,15/07/2024,⏳ Prazo (meses),✔️ Em dia,165
//! ```
//!
//! A field is quoted only when it contains a comma, a double quote or a
//! line break; embedded quotes are doubled.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::config::ExportSettings;
use crate::error::{Result, ScheduleError};
use crate::format::{basis_tag, format_date_br, status_tag};
use crate::models::ScheduleRow;
use crate::projector::Projection;

/// Column headers, in order.
pub const CSV_HEADERS: [&str; 7] = [
    "Revisão",
    "Tipo",
    "Data oficial (fabricante)",
    "Data prevista",
    "Base",
    "Status",
    "Faltam (dias)",
];

/// A ready-to-download export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: String,
    /// UTF-8 encoded content.
    pub data: Vec<u8>,
}

/// Renders rows as CSV text.
pub fn to_csv(rows: &[ScheduleRow]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADERS)?;

    for row in rows {
        wtr.write_record([
            row.ordinal.to_string().as_str(),
            row.label.as_str(),
            format_date_br(row.official_date).as_str(),
            format_date_br(row.projected_date).as_str(),
            basis_tag(row.basis),
            status_tag(row.status),
            row.days_remaining.to_string().as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ScheduleError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Builds the downloadable export for a projection.
pub fn export_file(projection: &Projection, settings: &ExportSettings) -> Result<ExportFile> {
    Ok(ExportFile {
        file_name: settings.file_name.clone(),
        mime_type: settings.mime_type.clone(),
        data: to_csv(&projection.rows)?.into_bytes(),
    })
}

/// One highlight line per late row, e.g.
/// `Revisão 1 — 6 meses ou 1.000 km: 11/01/2024 (📍 Quilometragem)`.
pub fn overdue_lines(projection: &Projection) -> Vec<String> {
    projection
        .overdue_rows()
        .into_iter()
        .map(|row| {
            format!(
                "Revisão {} — {}: {} ({})",
                row.ordinal,
                row.label,
                format_date_br(row.projected_date),
                basis_tag(row.basis)
            )
        })
        .collect()
}

/// Caption describing the daily rate, when one was derived.
pub fn rate_caption(projection: &Projection) -> Option<String> {
    let rate = projection.rate?;
    let sample = projection.sample?;
    Some(format!(
        "Média estimada: {:.1} km/dia (calculada entre {} e {}).",
        rate.km_per_day(),
        format_date_br(projection.purchase_date),
        format_date_br(sample.measured_on)
    ))
}
