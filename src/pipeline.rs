//! The whole conversion as one call: read, shift, write, report.

use crate::convert::convert_entry_cell;
use crate::error::{ShiftError, ShiftResult};
use crate::excel::{output_path_for, SheetReader, SheetWriter};
use crate::report::render_report;
use crate::types::{Table, COL_ENTRY_TIME, MEETING_SHEET};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub table: Table,
}

impl ConversionOutcome {
    /// Rows converted. Flagged rows count too; they are kept, not dropped.
    pub fn record_count(&self) -> usize {
        self.table.row_count()
    }

    /// The fixed-width summary for this outcome.
    pub fn report(&self) -> String {
        render_report(&self.table, &self.input_path, &self.output_path)
    }
}

/// Convert one attendance workbook.
///
/// Reads the `Meeting attendees` sheet, shifts every `Entry time` value
/// three hours forward, and writes the result next to the input with the
/// `_UTC+3` suffix. A missing file, sheet or `Entry time` column fails
/// before any output exists; a malformed timestamp only flags its own row.
pub fn convert_file<P: AsRef<Path>>(input: P) -> ShiftResult<ConversionOutcome> {
    let input = input.as_ref();

    let mut table = SheetReader::new(input).read(MEETING_SHEET)?;

    table
        .map_column(COL_ENTRY_TIME, convert_entry_cell)
        .ok_or_else(|| ShiftError::ColumnMissing(COL_ENTRY_TIME.to_string()))?;

    let output_path = output_path_for(input);
    SheetWriter::new(&table).write(&output_path)?;

    info!(
        input = %input.display(),
        output = %output_path.display(),
        records = table.row_count(),
        "conversion complete"
    );

    Ok(ConversionOutcome {
        input_path: input.to_path_buf(),
        output_path,
        table,
    })
}
