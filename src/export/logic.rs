// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayExport, EntryExport};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export_entries(
        rows: &[EntryExport],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<bool> {
        Self::export(rows, format, path, force)
    }

    pub fn export_days(
        rows: &[DayExport],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<bool> {
        Self::export(rows, format, path, force)
    }

    /// Write `rows` to `path`. Returns `false` when there was nothing to write.
    fn export<T: Serialize>(
        rows: &[T],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<bool> {
        if rows.is_empty() {
            warning("No entries to export.");
            return Ok(false);
        }

        ensure_writable(path, force)?;

        tracing::debug!(format = format.as_str(), rows = rows.len(), path = %path.display(), "exporting");

        match format {
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
        }

        Ok(true)
    }
}
