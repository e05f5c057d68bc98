//! The fixed-width plain-text summary shown after a conversion.

use crate::types::{Table, COL_ENTRY_TIME, COL_LOGIN, COL_NAME};
use std::path::Path;

/// Render the post-conversion summary: banner, input/output file names,
/// the three display columns at fixed widths, and the record count.
///
/// Layout is stable across runs; only the file names, the row content and
/// the count vary. Rows print in table order. Rows whose `Entry time` was
/// flagged appear like any other row, sentinel and all.
pub fn render_report(table: &Table, input: &Path, output: &Path) -> String {
    let rule = "=".repeat(60);
    let dashes = "-".repeat(60);

    let mut report = String::new();
    report.push_str(&format!("{}\n", rule));
    report.push_str("✅ CONVERSION SUCCESSFUL\n");
    report.push_str(&format!("{}\n", rule));
    report.push_str(&format!("Input:  {}\n", file_name(input)));
    report.push_str(&format!("Output: {}\n", file_name(output)));
    report.push('\n');
    report.push_str("CONVERTED DATA:\n");
    report.push_str(&format!("{}\n", dashes));
    report.push_str(&format!(
        "{:<20} | {:<12} | {}\n",
        "Name", "Login", "Entry Time"
    ));
    report.push_str(&format!("{}\n", dashes));

    for row in 0..table.row_count() {
        // Names wider than the column are cut to 19 chars so the separator
        // stays aligned; logins are never cut.
        let name: String = display_cell(table, row, COL_NAME).chars().take(19).collect();
        let login = display_cell(table, row, COL_LOGIN);
        let entry = display_cell(table, row, COL_ENTRY_TIME);
        report.push_str(&format!("{:<20} | {:<12} | {}\n", name, login, entry));
    }

    report.push_str(&format!("{}\n", dashes));
    report.push_str(&format!("Total records: {}\n", table.row_count()));

    report
}

/// A cell's display text; blank when the row or column does not exist, so
/// a sheet without `Name`/`Login` still reports cleanly.
fn display_cell(table: &Table, row: usize, column: &str) -> String {
    table
        .cell(row, column)
        .map(|cell| cell.to_string())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
