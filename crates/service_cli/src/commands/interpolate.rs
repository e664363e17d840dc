//! Interpolate command implementation
//!
//! Runs every interpolation method on the same input and emits the
//! interpolation report as CSV.

use std::io::Write;
use std::path::Path;
use tracing::info;

use numerics_compare::{interpolation_report, write_interpolation_csv};

use super::write_to;
use crate::config::NumericsConfig;
use crate::Result;

/// Run the interpolate command
pub fn run<W: Write>(
    config: &NumericsConfig,
    x_raw: &str,
    y_raw: &str,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    info!("Running interpolation report...");

    let report = interpolation_report(x_raw, y_raw, &config.validator());
    let failed = report.outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        "  {} of {} methods produced an interpolant",
        report.outcomes.len() - failed,
        report.outcomes.len()
    );

    write_to(output, out, |w| {
        write_interpolation_csv(&report, w)?;
        Ok(())
    })
}
