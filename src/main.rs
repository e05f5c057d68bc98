use clap::Parser;
use colored::Colorize;
use entryshift::{convert_file, ShellState};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "entryshift")]
#[command(about = "Shift the 'Entry time' column of a meeting attendance workbook from UTC to UTC+3")]
#[command(long_about = "entryshift - UTC to UTC+3 attendance converter

Reads the 'Meeting attendees' sheet of an Excel file (.xlsx or .xls),
adds three hours to every value of its 'Entry time' column
(DD-MM-YYYY HH:MM), and writes the result next to the input as
<name>_UTC+3<ext>. Rows whose timestamp does not parse are kept and
flagged with an 'ERROR: ' prefix; they never abort the conversion.

There are no knobs: sheet name, column name, shift and output naming
are fixed, so the tool always does the same thing.

EXAMPLE:
  entryshift attendees.xlsx     # writes attendees_UTC+3.xlsx")]
#[command(version)]
struct Cli {
    /// Excel workbook to convert (.xlsx or .xls)
    file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entryshift=info".into()),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "🕒 Time Converter UTC+3".bold().green());
    println!();

    match convert_file(&cli.file) {
        Ok(outcome) => {
            let state = ShellState::Done {
                input: outcome.input_path.clone(),
                output: outcome.output_path.clone(),
                records: outcome.record_count(),
            };
            print!("{}", outcome.report());
            println!();
            println!("{}", state.status_line().bold().green());
        }
        Err(e) => {
            let state = ShellState::Failed {
                input: cli.file.clone(),
                message: e.to_string(),
            };
            eprintln!("{} {}", "❌ Error:".bold().red(), e);
            eprintln!("{}", state.status_line().red());
            process::exit(1);
        }
    }
}
