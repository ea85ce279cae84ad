// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::{ExportFormat, export_file_name};
use crate::models::record::StudyRecord;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Where an export goes.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    /// `StudyExport_<day>.<ext>` inside the directory; same-day exports overwrite.
    Dated { dir: PathBuf, day: NaiveDate },
    /// Explicit path; an existing file needs `force` or confirmation.
    File { path: PathBuf, force: bool },
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` in `format` and return the path written.
    ///
    /// The log file itself is never touched.
    pub fn export(
        records: &[StudyRecord],
        format: ExportFormat,
        target: &ExportTarget,
    ) -> AppResult<PathBuf> {
        let path = match target {
            ExportTarget::Dated { dir, day } => dir.join(export_file_name(*day, format)),
            ExportTarget::File { path, force } => {
                ensure_writable(path, *force)?;
                path.clone()
            }
        };

        if records.is_empty() {
            warning("No study logs to export: writing an empty file.");
        }

        write(records, format, &path)?;
        Ok(path)
    }
}

fn write(records: &[StudyRecord], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(records, path),
        ExportFormat::Json => export_json(records, path),
    }
}
