//! Workbook writing - a [`Table`] out to an `.xlsx` file.

use crate::error::{ShiftError, ShiftResult};
use crate::types::{Cell, Table, MEETING_SHEET};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Suffix inserted before the extension of the output file name.
pub const OUTPUT_SUFFIX: &str = "_UTC+3";

/// Writes a [`Table`] as a single-sheet `.xlsx` workbook.
///
/// The sheet is named like the one the reader looks for, so a written file
/// can be fed straight back through the converter.
pub struct SheetWriter<'a> {
    table: &'a Table,
}

impl<'a> SheetWriter<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    /// Write the table to `output_path`: header row first, then data rows
    /// in order, nothing added and nothing dropped.
    pub fn write(&self, output_path: &Path) -> ShiftResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(MEETING_SHEET)
            .map_err(|e| ShiftError::Write(format!("Failed to set worksheet name: {}", e)))?;

        // Header row (row 0)
        for (col_idx, col_name) in self.table.columns.iter().enumerate() {
            worksheet
                .write_string(0, col_idx as u16, col_name)
                .map_err(|e| ShiftError::Write(format!("Failed to write header: {}", e)))?;
        }

        // Data rows (starting at row 1)
        for (row_idx, row) in self.table.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                Self::write_cell(worksheet, (row_idx + 1) as u32, col_idx as u16, cell)?;
            }
        }

        let buffer = workbook
            .save_to_buffer()
            .map_err(|e| ShiftError::Write(format!("Failed to save workbook: {}", e)))?;

        // Stage next to the destination, then rename into place: a failure
        // mid-write must not leave a partial output file behind.
        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(&buffer)?;
        staged
            .persist(output_path)
            .map_err(|e| ShiftError::Io(e.error))?;

        debug!(
            path = %output_path.display(),
            rows = self.table.row_count(),
            "wrote workbook"
        );

        Ok(())
    }

    /// Write a single cell according to its type. Empty cells stay unwritten.
    fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> ShiftResult<()> {
        match cell {
            Cell::Empty => {}
            Cell::Text(s) => {
                worksheet
                    .write_string(row, col, s)
                    .map_err(|e| ShiftError::Write(format!("Failed to write text: {}", e)))?;
            }
            Cell::Number(n) => {
                worksheet
                    .write_number(row, col, *n)
                    .map_err(|e| ShiftError::Write(format!("Failed to write number: {}", e)))?;
            }
            Cell::Bool(b) => {
                worksheet
                    .write_boolean(row, col, *b)
                    .map_err(|e| ShiftError::Write(format!("Failed to write boolean: {}", e)))?;
            }
            Cell::DateTime(s) => {
                worksheet
                    .write_string(row, col, s)
                    .map_err(|e| ShiftError::Write(format!("Failed to write datetime: {}", e)))?;
            }
        }
        Ok(())
    }
}

/// Derive the output path from the input path: the suffix goes between the
/// file stem and the extension, in the same directory.
///
/// `report.xlsx` becomes `report_UTC+3.xlsx`; an extensionless input gets
/// the bare suffix appended.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, OUTPUT_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, OUTPUT_SUFFIX),
    };
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_keeps_extension() {
        assert_eq!(
            output_path_for(Path::new("attendees.xlsx")),
            PathBuf::from("attendees_UTC+3.xlsx")
        );
        assert_eq!(
            output_path_for(Path::new("legacy.xls")),
            PathBuf::from("legacy_UTC+3.xls")
        );
    }

    #[test]
    fn test_output_path_keeps_directory() {
        assert_eq!(
            output_path_for(Path::new("/data/meetings/june.xlsx")),
            PathBuf::from("/data/meetings/june_UTC+3.xlsx")
        );
        assert_eq!(
            output_path_for(Path::new("reports/q2.xlsx")),
            PathBuf::from("reports/q2_UTC+3.xlsx")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(
            output_path_for(Path::new("attendees")),
            PathBuf::from("attendees_UTC+3")
        );
    }

    #[test]
    fn test_output_path_splits_on_last_dot() {
        assert_eq!(
            output_path_for(Path::new("2024.06.meeting.xlsx")),
            PathBuf::from("2024.06.meeting_UTC+3.xlsx")
        );
    }

    #[test]
    fn test_output_path_applied_twice_stacks_suffix() {
        let once = output_path_for(Path::new("attendees.xlsx"));
        let twice = output_path_for(&once);
        assert_eq!(twice, PathBuf::from("attendees_UTC+3_UTC+3.xlsx"));
    }
}
