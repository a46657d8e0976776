use crate::db::pool::DbPool;
use crate::db::queries::load_trend;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TrendPoint;
use crate::ui::messages::warning;
use crate::utils::date::STAMP_FMT;

use std::io;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the trend series (timestamp, bmi).
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    pub fn export(pool: &mut DbPool, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let points: Vec<TrendPoint> = load_trend(pool)?
            .into_iter()
            .map(|(date, bmi)| TrendPoint {
                date: date.format(STAMP_FMT).to_string(),
                bmi,
            })
            .collect();

        if points.is_empty() {
            warning("⚠️  No BMI data available to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&points, path)?,
            ExportFormat::Json => export_json(&points, path)?,
        }

        Ok(())
    }
}
