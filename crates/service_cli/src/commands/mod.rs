//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! human-facing output to a caller-supplied writer so they can be tested
//! without a terminal.

pub mod check;
pub mod compare;
pub mod interpolate;
pub mod spline;

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::{CliError, Result};

/// Serialisation of a comparison report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated table
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Parse a whitespace- or comma-separated list of numbers.
pub(crate) fn parse_numbers(raw: &str, what: &str) -> Result<Vec<f64>> {
    let values = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                CliError::InvalidArgument(format!("{}: '{}' is not a number", what, token))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(CliError::InvalidArgument(format!("{} must not be empty", what)));
    }
    Ok(values)
}

/// Send `emit` either to `path` or to `out`.
///
/// When a file is written, a one-line confirmation goes to `out` instead.
pub(crate) fn write_to<W, F>(output: Option<&Path>, out: &mut W, emit: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            emit(&mut file)?;
            file.flush()?;
            info!("Report written to {}", path.display());
            writeln!(out, "Report written to {}", path.display())?;
        }
        None => emit(out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_accepts_spaces_and_commas() {
        assert_eq!(
            parse_numbers(" 1, 2.5  -3 ", "vector").unwrap(),
            vec![1.0, 2.5, -3.0]
        );
    }

    #[test]
    fn test_parse_numbers_rejects_garbage() {
        let err = parse_numbers("1 two", "vector").unwrap_err();
        assert!(err.to_string().contains("'two'"));
        assert!(parse_numbers("  ", "vector").is_err());
    }

    #[test]
    fn test_write_to_file_confirms_on_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut out = Vec::new();

        write_to(Some(&path), &mut out, |w| {
            writeln!(w, "payload")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "payload\n");
        assert!(String::from_utf8(out).unwrap().starts_with("Report written to"));
    }
}
