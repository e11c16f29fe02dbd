//! Runtime settings loaded from TOML.
//!
//! Every field is optional; an empty document yields the defaults.
//!
//! ```toml
//! # Pin the reference date (quoted ISO date) for reproducible output
//! today = "2024-01-01"
//!
//! [export]
//! file_name = "cronograma_revisoes.csv"
//! mime_type = "text/csv"
//! ```

use std::path::Path;

use chrono::{Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default export file name.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "cronograma_revisoes.csv";
/// Default export MIME type.
pub const DEFAULT_EXPORT_MIME_TYPE: &str = "text/csv";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Fixed reference date; `None` uses the local date.
    pub today: Option<NaiveDate>,
    /// Export file settings.
    pub export: ExportSettings,
}

/// Export file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Suggested download file name.
    pub file_name: String,
    /// MIME type of the download.
    pub mime_type: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            mime_type: DEFAULT_EXPORT_MIME_TYPE.to_string(),
        }
    }
}

impl ScheduleConfig {
    /// Parses settings from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading schedule config from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Pins the reference date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The reference date: the pinned one, else the local date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
