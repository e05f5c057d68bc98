//! Workbook reading - one worksheet into a [`Table`].
//!
//! `.xlsx` and legacy `.xls` are both handled; the backend is picked from
//! the file extension.

use crate::error::{ShiftError, ShiftResult};
use crate::types::{Cell, Table};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a named worksheet from an Excel file.
pub struct SheetReader {
    path: PathBuf,
}

impl SheetReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the named worksheet into a [`Table`].
    ///
    /// The first row becomes the column names; every following row becomes
    /// a data row, padded to the header width. An absent sheet is an error
    /// that names the sheets the workbook actually has.
    pub fn read(&self, sheet_name: &str) -> ShiftResult<Table> {
        if !self.path.exists() {
            return Err(ShiftError::FileNotFound(self.path.clone()));
        }

        let mut workbook =
            open_workbook_auto(&self.path).map_err(|e| ShiftError::Workbook(e.to_string()))?;

        let sheet_names = workbook.sheet_names().to_vec();
        if !sheet_names.iter().any(|n| n == sheet_name) {
            return Err(ShiftError::SheetNotFound {
                name: sheet_name.to_string(),
                available: sheet_names.join(", "),
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| ShiftError::Workbook(e.to_string()))?;

        if range.is_empty() {
            debug!(sheet = sheet_name, "worksheet is empty");
            return Ok(Table::default());
        }

        let (height, width) = range.get_size();

        // Header row (row 0)
        let mut columns: Vec<String> = Vec::with_capacity(width);
        for col in 0..width {
            let name = match range.get((0, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                _ => format!("col_{}", col),
            };
            columns.push(name);
        }

        // Data rows (row 1 onwards)
        let mut table = Table::new(columns);
        for row in 1..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                let cell = match range.get((row, col)) {
                    Some(data) => Self::cell_from_data(data),
                    None => Cell::Empty,
                };
                cells.push(cell);
            }
            table.push_row(cells);
        }

        debug!(
            sheet = sheet_name,
            rows = table.row_count(),
            columns = table.columns.len(),
            "loaded worksheet"
        );

        Ok(table)
    }

    /// Convert a raw cell into the crate's own [`Cell`] type.
    fn cell_from_data(data: &Data) -> Cell {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => Cell::DateTime(naive.format("%Y-%m-%dT%H:%M:%S").to_string()),
                None => Cell::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) => Cell::DateTime(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}
