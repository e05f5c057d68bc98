use std::path::PathBuf;

use thiserror::Error;

pub type ShiftResult<T> = Result<T, ShiftError>;

/// File-level failures: nothing recoverable per row, no output is produced.
#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("could not open workbook: {0}")]
    Workbook(String),

    #[error("sheet '{name}' not found (workbook contains: {available})")]
    SheetNotFound { name: String, available: String },

    #[error("required column '{0}' not found in sheet")]
    ColumnMissing(String),

    #[error("failed to write workbook: {0}")]
    Write(String),
}

/// A single `Entry time` value that does not match `DD-MM-YYYY HH:MM`,
/// or whose shifted result cannot be written back in that format.
///
/// Row-level: the conversion keeps going and flags the row instead of
/// failing the whole file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a DD-MM-YYYY HH:MM timestamp")]
pub struct TimestampError {
    pub value: String,
}

impl TimestampError {
    pub fn new<V: Into<String>>(value: V) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// An event the shell state machine refuses in its current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("a conversion is already in flight")]
    ConversionInFlight,

    #[error("no conversion is in flight")]
    NoConversionInFlight,
}
