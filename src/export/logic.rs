// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::sheet::build_sheet;
use crate::models::Table;
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a table snapshot to an explicit file.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    /// - `force`: skip the overwrite confirmation
    pub fn export_to_file(
        table: &Table,
        now: DateTime<Local>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;
        Self::write(table, now, format, path)
    }

    /// Auto-export used by `close` and `reset`: CSV into `export_dir` with a
    /// filename derived from the table id and the closing timestamp.
    pub fn auto_export(
        table: &Table,
        now: DateTime<Local>,
        export_dir: &str,
    ) -> AppResult<PathBuf> {
        let dir = Path::new(export_dir);
        std::fs::create_dir_all(dir)?;

        let name = format!("{}_{}.csv", table.id, now.format("%Y%m%d-%H%M%S"));
        let path = dir.join(name);

        Self::write(table, now, ExportFormat::Csv, &path)?;
        Ok(path)
    }

    fn write(
        table: &Table,
        now: DateTime<Local>,
        format: ExportFormat,
        path: &Path,
    ) -> AppResult<()> {
        let sheet = build_sheet(table, now);
        match format {
            ExportFormat::Csv => export_csv(&sheet, path),
            ExportFormat::Json => export_json(&sheet, path),
        }
    }
}
