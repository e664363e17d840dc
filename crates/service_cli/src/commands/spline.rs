//! Spline command implementation
//!
//! Builds the natural quadratic spline through user-typed points and prints
//! one expression per segment.

use std::io::Write;
use std::path::Path;
use tracing::info;

use numerics_compare::{build_spline, CsvSampleSink, NoopPlotSink, PlotSink};

use crate::config::NumericsConfig;
use crate::Result;

/// Run the spline command.
///
/// Rejected input and construction failures are printed as a message; only
/// I/O on `out` is an error.
pub fn run<W: Write>(
    config: &NumericsConfig,
    x_raw: &str,
    y_raw: &str,
    samples: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    info!("Building quadratic spline...");

    let points = match config.validator().validate(x_raw, y_raw) {
        Ok(points) => points,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
    };

    let sink: Box<dyn PlotSink> = match samples {
        Some(path) => {
            info!("  Samples: {}", path.display());
            Box::new(CsvSampleSink::new(path))
        }
        None => Box::new(NoopPlotSink),
    };

    match build_spline(&points, sink.as_ref()) {
        Ok(report) => {
            let knots = report.spline.knots();
            writeln!(out, "Quadratic spline through {} points:", points.len())?;
            for (i, expression) in report.expressions.iter().enumerate() {
                writeln!(
                    out,
                    "  S{}(x) = {}    on [{}, {}]",
                    i + 1,
                    expression,
                    knots[i],
                    knots[i + 1]
                )?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}
