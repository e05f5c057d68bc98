//! The +3 hour shift applied to `Entry time` values.
//!
//! Timestamps are wall-clock strings in `DD-MM-YYYY HH:MM`. Values that do
//! not match the format are never dropped: they come back flagged with an
//! `ERROR: ` prefix so the row survives into the output file.

use chrono::{Datelike, Duration, NaiveDateTime};
use regex::Regex;
use tracing::warn;

use crate::error::TimestampError;
use crate::types::Cell;

/// Wall-clock format of the `Entry time` column, both in and out.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Hours added to every timestamp (UTC to UTC+3).
pub const SHIFT_HOURS: i64 = 3;

/// Prefix flagging a value that could not be parsed.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Strict `DD-MM-YYYY HH:MM` shape check. chrono's parser on its own also
/// takes surrounding whitespace, widened or missing separators, and signed
/// or five-digit years; none of those belong to the format.
fn has_timestamp_shape(value: &str) -> bool {
    // Pattern: 1-2 digit day/month/hour/minute, exactly 4 year digits,
    // ASCII digits and single literal separators only
    match Regex::new(r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4} [0-9]{1,2}:[0-9]{1,2}$") {
        Ok(shape) => shape.is_match(value),
        Err(_) => false,
    }
}

/// Parse a `DD-MM-YYYY HH:MM` timestamp, add three hours, re-format.
///
/// Rollover across midnight, month ends, 29 February and New Year comes
/// from calendar arithmetic, not string manipulation. Output is always
/// zero-padded even when the input was not. Years are meaningful from
/// 0001 to 9999 on both sides of the shift; values that would leave that
/// range are rejected like any other bad input.
pub fn shift_timestamp(value: &str) -> Result<String, TimestampError> {
    if !has_timestamp_shape(value) {
        return Err(TimestampError::new(value));
    }
    let parsed = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| TimestampError::new(value))?;
    let shifted = parsed
        .checked_add_signed(Duration::hours(SHIFT_HOURS))
        .ok_or_else(|| TimestampError::new(value))?;
    // Past 9999 the year prints with five digits and a sign; year zero is
    // not a calendar year in this format.
    if parsed.year() < 1 || shifted.year() > 9999 {
        return Err(TimestampError::new(value));
    }
    Ok(shifted.format(TIMESTAMP_FORMAT).to_string())
}

/// Shift a raw value, falling back to the `ERROR: <value>` sentinel when it
/// does not parse. Infallible on purpose: one bad row must not fail a file.
///
/// ```
/// use entryshift::convert::convert;
///
/// assert_eq!(convert("31-12-2024 22:00"), "01-01-2025 01:00");
/// assert_eq!(convert("not a timestamp"), "ERROR: not a timestamp");
/// ```
pub fn convert(value: &str) -> String {
    match shift_timestamp(value) {
        Ok(shifted) => shifted,
        Err(_) => format!("{}{}", ERROR_PREFIX, value),
    }
}

/// Convert one `Entry time` cell.
///
/// The cell is rendered to its display string first, so a numeric or
/// datetime-typed cell lands in the sentinel branch rather than panicking
/// or silently passing through.
pub fn convert_entry_cell(cell: &Cell) -> Cell {
    let raw = cell.to_string();
    match shift_timestamp(&raw) {
        Ok(shifted) => Cell::Text(shifted),
        Err(err) => {
            warn!(
                value = %err.value,
                "entry time does not match DD-MM-YYYY HH:MM, flagging row"
            );
            Cell::Text(format!("{}{}", ERROR_PREFIX, raw))
        }
    }
}
