//! Reading the period file.

use std::io::{self, Read};
use std::path::Path;

use period_engine::PeriodError;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Read the input as UTF-8 text from `path`, or from stdin when `path` is
/// `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, PeriodError> {
    let (source, bytes) = match path {
        None => ("stdin".to_string(), read_stdin()?),
        Some(p) if p == Path::new("-") => ("stdin".to_string(), read_stdin()?),
        Some(p) => {
            let source = format!("'{}'", p.display());
            let bytes = std::fs::read(p).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    PeriodError::MissingInput(format!("{source}: no such file"))
                }
                _ => PeriodError::MissingInput(format!("{source}: {e}")),
            })?;
            (source, bytes)
        }
    };
    debug!(%source, bytes = bytes.len(), "read input");
    decode(&source, bytes)
}

fn read_stdin() -> Result<Vec<u8>, PeriodError> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| PeriodError::MissingInput(format!("stdin: {e}")))?;
    Ok(bytes)
}

fn decode(source: &str, bytes: Vec<u8>) -> Result<String, PeriodError> {
    let text = String::from_utf8(bytes)
        .map_err(|e| PeriodError::InvalidEncoding(format!("{source} is not UTF-8: {e}")))?;
    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
