//! Core data model: typed cell values and the in-memory sheet table.

use serde::{Deserialize, Serialize};
use std::fmt;

//==============================================================================
// Domain constants
//==============================================================================

/// Worksheet the converter reads from (and names its output's sheet after,
/// so a converted file can itself be converted).
pub const MEETING_SHEET: &str = "Meeting attendees";

/// Column holding the timestamps to shift.
pub const COL_ENTRY_TIME: &str = "Entry time";

/// Display-only columns used by the plain-text report.
pub const COL_NAME: &str = "Name";
pub const COL_LOGIN: &str = "Login";

//==============================================================================
// Cell values
//==============================================================================

/// A single spreadsheet cell, decoupled from any reader/writer crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Date/time cell, carried as an ISO-8601 string.
    DateTime(String),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => f.write_str(&format_number(*n)),
            Cell::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            Cell::DateTime(s) => f.write_str(s),
        }
    }
}

/// Format a numeric cell for display: up to 6 decimal places with trailing
/// zeros removed, so integral values print without a decimal point.
fn format_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

//==============================================================================
// Table
//==============================================================================

/// A sheet in memory: ordered column names plus rows of cells.
///
/// Column order and row order are preserved exactly as read. The converter
/// never sorts, filters, or injects columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding or truncating it to the table width.
    pub fn push_row(&mut self, mut cells: Vec<Cell>) {
        cells.resize(self.columns.len(), Cell::Empty);
        self.rows.push(cells);
    }

    /// Index of a named column, if present. Names match exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, named column). `None` when either does not exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    /// Replace every cell of the named column with `f(cell)`, in place.
    ///
    /// Returns the column index, or `None` when the column does not exist
    /// (in which case no row is touched).
    pub fn map_column<F>(&mut self, name: &str, f: F) -> Option<usize>
    where
        F: Fn(&Cell) -> Cell,
    {
        let col = self.column_index(name)?;
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(col) {
                *cell = f(cell);
            }
        }
        Some(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_matches_sheet_rendering() {
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::Text("alice".into()).to_string(), "alice");
        assert_eq!(Cell::Number(42.0).to_string(), "42");
        assert_eq!(Cell::Number(42.5).to_string(), "42.5");
        assert_eq!(Cell::Number(-3.25).to_string(), "-3.25");
        assert_eq!(Cell::Bool(true).to_string(), "True");
        assert_eq!(Cell::Bool(false).to_string(), "False");
        assert_eq!(
            Cell::DateTime("2024-01-01T09:00:00".into()).to_string(),
            "2024-01-01T09:00:00"
        );
    }

    #[test]
    fn test_number_display_trims_float_artifacts() {
        assert_eq!(Cell::Number(0.1 + 0.2).to_string(), "0.3");
        assert_eq!(Cell::Number(1234567.0).to_string(), "1234567");
        assert_eq!(Cell::Number(0.0).to_string(), "0");
    }

    #[test]
    fn test_push_row_pads_short_rows() {
        let mut table = Table::new(vec!["a".into(), "b".into(), "c".into()]);
        table.push_row(vec![Cell::Text("x".into())]);
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[0][1], Cell::Empty);
        assert_eq!(table.rows[0][2], Cell::Empty);
    }

    #[test]
    fn test_push_row_truncates_long_rows() {
        let mut table = Table::new(vec!["a".into()]);
        table.push_row(vec![Cell::Number(1.0), Cell::Number(2.0)]);
        assert_eq!(table.rows[0], vec![Cell::Number(1.0)]);
    }

    #[test]
    fn test_column_index_is_exact_match() {
        let table = Table::new(vec!["Name".into(), "Entry time".into()]);
        assert_eq!(table.column_index("Entry time"), Some(1));
        assert_eq!(table.column_index("entry time"), None);
        assert_eq!(table.column_index("Entry time "), None);
    }

    #[test]
    fn test_map_column_rewrites_only_target_column() {
        let mut table = Table::new(vec!["Name".into(), "Entry time".into()]);
        table.push_row(vec![Cell::Text("a".into()), Cell::Text("x".into())]);
        table.push_row(vec![Cell::Text("b".into()), Cell::Text("y".into())]);

        let col = table.map_column("Entry time", |c| Cell::Text(format!("<{}>", c)));
        assert_eq!(col, Some(1));
        assert_eq!(table.rows[0][0], Cell::Text("a".into()));
        assert_eq!(table.rows[0][1], Cell::Text("<x>".into()));
        assert_eq!(table.rows[1][1], Cell::Text("<y>".into()));
    }

    #[test]
    fn test_map_column_missing_leaves_table_untouched() {
        let mut table = Table::new(vec!["Name".into()]);
        table.push_row(vec![Cell::Text("a".into())]);
        let before = table.clone();

        assert_eq!(table.map_column("Entry time", |_| Cell::Empty), None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_cell_lookup_by_name() {
        let mut table = Table::new(vec!["Name".into(), "Login".into()]);
        table.push_row(vec![Cell::Text("Alice".into()), Cell::Text("alice01".into())]);

        assert_eq!(
            table.cell(0, "Login"),
            Some(&Cell::Text("alice01".into()))
        );
        assert_eq!(table.cell(0, "Missing"), None);
        assert_eq!(table.cell(5, "Name"), None);
    }
}
