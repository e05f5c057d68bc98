//! The UI-facing state machine.
//!
//! A front end (or the headless driver) owns a [`ShellState`] and feeds it
//! [`ShellEvent`]s. Every transition is explicit and everything else is a
//! typed rejection, so "convert clicked twice" or "completion arriving
//! after a clear" cannot scramble what is shown. The machine performs no
//! I/O and never calls the converter itself.

use crate::error::ShellError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One screenful of UI state. Each variant carries everything needed to
/// render it; there is no companion bag of mutable flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShellState {
    /// Nothing selected yet; converting is unavailable.
    NoFile,
    /// A file is picked and a conversion may start.
    Ready { input: PathBuf },
    /// A conversion is running; only its completion is honored.
    Converting { input: PathBuf },
    /// The last conversion succeeded.
    Done {
        input: PathBuf,
        output: PathBuf,
        records: usize,
    },
    /// The last conversion failed; the file stays selected for a retry.
    Failed { input: PathBuf, message: String },
}

/// Everything that can happen to the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShellEvent {
    FileChosen { path: PathBuf },
    ConvertRequested,
    ConversionSucceeded { output: PathBuf, records: usize },
    ConversionFailed { message: String },
    ResultsCleared,
}

impl Default for ShellState {
    fn default() -> Self {
        ShellState::NoFile
    }
}

impl ShellState {
    /// Apply one event, yielding the next state.
    ///
    /// A rejected event returns `Err` and leaves the current state to keep
    /// using; `Converting` in particular is latched until one of the two
    /// completion events arrives.
    pub fn apply(&self, event: ShellEvent) -> Result<ShellState, ShellError> {
        match (self, event) {
            // Mid-conversion, only completion events are honored.
            (
                ShellState::Converting { input },
                ShellEvent::ConversionSucceeded { output, records },
            ) => Ok(ShellState::Done {
                input: input.clone(),
                output,
                records,
            }),
            (ShellState::Converting { input }, ShellEvent::ConversionFailed { message }) => {
                Ok(ShellState::Failed {
                    input: input.clone(),
                    message,
                })
            }
            (ShellState::Converting { .. }, _) => Err(ShellError::ConversionInFlight),

            // Choosing a file (re)arms the machine from any idle state.
            (_, ShellEvent::FileChosen { path }) => Ok(ShellState::Ready { input: path }),

            (ShellState::NoFile, ShellEvent::ConvertRequested) => Err(ShellError::NoFileSelected),
            (ShellState::Ready { input }, ShellEvent::ConvertRequested)
            | (ShellState::Done { input, .. }, ShellEvent::ConvertRequested)
            | (ShellState::Failed { input, .. }, ShellEvent::ConvertRequested) => {
                Ok(ShellState::Converting {
                    input: input.clone(),
                })
            }

            // Completion events are only valid answers to a running conversion.
            (_, ShellEvent::ConversionSucceeded { .. })
            | (_, ShellEvent::ConversionFailed { .. }) => Err(ShellError::NoConversionInFlight),

            // Clearing results keeps the selected file.
            (ShellState::Done { input, .. }, ShellEvent::ResultsCleared)
            | (ShellState::Failed { input, .. }, ShellEvent::ResultsCleared) => {
                Ok(ShellState::Ready {
                    input: input.clone(),
                })
            }
            (state, ShellEvent::ResultsCleared) => Ok(state.clone()),
        }
    }

    /// One-line status text for a status bar.
    pub fn status_line(&self) -> String {
        match self {
            ShellState::NoFile => "Please select an Excel file".to_string(),
            ShellState::Ready { .. } => "File selected - ready to convert".to_string(),
            ShellState::Converting { .. } => "Converting...".to_string(),
            ShellState::Done { records, .. } => {
                format!("Conversion complete! {} records processed", records)
            }
            ShellState::Failed { .. } => "Conversion failed".to_string(),
        }
    }

    /// True while a conversion is running.
    pub fn is_busy(&self) -> bool {
        matches!(self, ShellState::Converting { .. })
    }

    /// The selected input file, in any state that has one.
    pub fn input(&self) -> Option<&Path> {
        match self {
            ShellState::NoFile => None,
            ShellState::Ready { input }
            | ShellState::Converting { input }
            | ShellState::Done { input, .. }
            | ShellState::Failed { input, .. } => Some(input),
        }
    }
}
