//! entryshift - shift meeting attendance timestamps from UTC to UTC+3.
//!
//! Reads the `Meeting attendees` sheet of an Excel workbook, adds three
//! hours to every `Entry time` value (`DD-MM-YYYY HH:MM`), and writes a
//! sibling workbook named `<stem>_UTC+3<ext>`. Values that do not parse
//! are kept and flagged with an `ERROR: ` prefix, so one bad row never
//! sinks a whole file.
//!
//! # Example
//!
//! ```no_run
//! use entryshift::convert_file;
//!
//! let outcome = convert_file("attendees.xlsx")?;
//! println!("{}", outcome.report());
//! # Ok::<(), entryshift::error::ShiftError>(())
//! ```

pub mod convert;
pub mod error;
pub mod excel;
pub mod pipeline;
pub mod report;
pub mod shell;
pub mod types;

// Re-export commonly used types
pub use error::{ShellError, ShiftError, ShiftResult, TimestampError};
pub use pipeline::{convert_file, ConversionOutcome};
pub use shell::{ShellEvent, ShellState};
pub use types::{Cell, Table};
