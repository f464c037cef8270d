// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV export of collected records.
//!
//! Activity summaries have no fixed schema, so the header is the union of
//! field names in first-seen order. GPS points always use `lat,lng`.

use crate::error::ExtractError;
use crate::models::{ActivitySummary, GpsPoint};
use serde_json::{Number, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Mode for exported files on Unix; temp files start out owner-only.
#[cfg(unix)]
const EXPORT_FILE_MODE: u32 = 0o644;

/// Header and rows ready to be written. Every row has one cell per header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Flatten activity summaries into a table.
    ///
    /// Fields absent from a record and JSON nulls become empty cells.
    pub fn from_activities(activities: &[ActivitySummary]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for activity in activities {
            for key in activity.fields().keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }

        let rows = activities
            .iter()
            .map(|activity| {
                headers
                    .iter()
                    .map(|key| activity.fields().get(key).map(cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    /// Table of GPS points with `lat,lng` columns.
    pub fn from_points(points: &[GpsPoint]) -> Self {
        Self {
            headers: vec!["lat".to_string(), "lng".to_string()],
            rows: points
                .iter()
                .map(|p| vec![coordinate(p.lat), coordinate(p.lng)])
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render one JSON value as a CSV cell.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        // Nested objects and arrays (e.g. `map`, `start_latlng`) stay as JSON.
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Render a coordinate the way JSON numbers are rendered (`38.0`, not `38`).
fn coordinate(value: f64) -> String {
    match Number::from_f64(value) {
        Some(number) => number.to_string(),
        None => format!("{:?}", value),
    }
}

/// Write `table` to `dir/file_name`, creating `dir` if needed.
///
/// The file is written to a temporary sibling and renamed into place, so a
/// failed write never leaves a truncated CSV behind. The temp file is synced
/// before the rename and ends up world-readable on Unix. A table with no
/// headers produces an empty file.
pub fn export_table(dir: &Path, file_name: &str, table: &Table) -> Result<PathBuf, ExtractError> {
    fs::create_dir_all(dir).map_err(|e| ExtractError::io(dir, e))?;

    let path = dir.join(file_name);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ExtractError::io(dir, e))?;

    {
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        if !table.headers.is_empty() {
            writer.write_record(&table.headers)?;
            for row in &table.rows {
                writer.write_record(row)?;
            }
        }
        writer.flush().map_err(|e| ExtractError::io(&path, e))?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(EXPORT_FILE_MODE))
            .map_err(|e| ExtractError::io(&path, e))?;
    }

    tmp.as_file()
        .sync_all()
        .map_err(|e| ExtractError::io(&path, e))?;
    tmp.persist(&path)
        .map_err(|e| ExtractError::io(&path, e.error))?;

    tracing::info!(path = %path.display(), rows = table.len(), "CSV saved");
    Ok(path)
}
