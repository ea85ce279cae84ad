// src/export/mod.rs

mod csv;
pub(crate) mod fs_utils;
mod json;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// `StudyExport_<YYYY-MM-DD>.<ext>`
pub fn export_file_name(day: NaiveDate, format: ExportFormat) -> String {
    format!(
        "StudyExport_{}.{}",
        day.format("%Y-%m-%d"),
        format.as_str()
    )
}
