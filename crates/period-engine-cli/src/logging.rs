//! Tracing setup for the CLI.
//!
//! Logs go to stderr so stdout carries only the JSON response.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count. `RUST_LOG` takes precedence.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("period_engine={level},periods={level}")
}

pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .compact()
        .init();
}
