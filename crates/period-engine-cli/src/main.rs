//! `periods` — total the calendar time covered by a file of date periods.
//!
//! Reads one `dd/mm/yyyy a dd/mm/yyyy` period per line and prints a JSON
//! report on stdout, or `{"error": "..."}` if the input cannot be used.

mod input;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use period_engine::{calculate_periods, AnalysisResponse};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "periods", version, about = "Calendar-correct total of overlapping date periods")]
struct Cli {
    /// File with one period per line ("dd/mm/yyyy a dd/mm/yyyy"). Reads stdin when omitted or "-".
    file: Option<PathBuf>,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let response = match input::read_input(cli.file.as_deref()) {
        Ok(text) => calculate_periods(&text),
        Err(err) => {
            warn!(kind = ?err.kind(), error = %err, "could not read input");
            AnalysisResponse::from(&err)
        }
    };

    let json = response
        .to_json(cli.pretty)
        .context("failed to serialize response")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write response")?;

    if response.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        info!("report written");
        Ok(ExitCode::SUCCESS)
    }
}
