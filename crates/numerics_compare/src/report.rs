//! Tabular and JSON emitters.
//!
//! Comparison CSV columns: `Method, Iterations, Solution, [Error], Converged?,
//! Best?`. The `Error` column appears for linear-system reports only.
//! Fields that do not apply, or that a faulted method never produced, are
//! written as `-`.

use crate::error::ReportError;
use crate::interpolation::InterpolationReport;
use crate::registry::ComparisonReport;
use serde::Serialize;
use std::io::Write;

const MISSING: &str = "-";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Header row of a comparison CSV.
pub fn comparison_header(with_error: bool) -> Vec<&'static str> {
    let mut header = vec!["Method", "Iterations", "Solution"];
    if with_error {
        header.push("Error");
    }
    header.extend(["Converged?", "Best?"]);
    header
}

/// Write a comparison report as CSV.
pub fn write_comparison_csv<W: Write>(
    report: &ComparisonReport,
    writer: W,
) -> Result<(), ReportError> {
    let with_error = report.kind.reports_error();
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(comparison_header(with_error))?;

    for entry in &report.entries {
        let r = &entry.result;
        let mut row = vec![
            r.method_name.clone(),
            r.iteration_count
                .filter(|_| !r.is_faulted())
                .map_or_else(|| MISSING.to_string(), |n| n.to_string()),
            r.solution.to_string(),
        ];
        if with_error {
            row.push(r.final_error.map_or_else(|| MISSING.to_string(), |e| format!("{:e}", e)));
        }
        row.push(yes_no(r.converged).to_string());
        row.push(yes_no(entry.is_best).to_string());
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// Comparison report as a CSV string.
pub fn comparison_csv(report: &ComparisonReport) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_comparison_csv(report, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pretty-printed JSON of any report.
pub fn write_json<T: Serialize, W: Write>(report: &T, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Write an interpolation report as CSV.
///
/// Header `Method, Result`, the raw inputs, then one block per method:
/// a `--- name ---` row followed by one expression (or the failure
/// message) per row.
pub fn write_interpolation_csv<W: Write>(
    report: &InterpolationReport,
    writer: W,
) -> Result<(), ReportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["Method", "Result"])?;
    out.write_record(["Input X", report.x_raw.as_str()])?;
    out.write_record(["Input Y", report.y_raw.as_str()])?;
    out.write_record(["", ""])?;

    for outcome in &report.outcomes {
        out.write_record([format!("--- {} ---", outcome.method).as_str(), ""])?;
        match &outcome.result {
            Ok(lines) => {
                for line in lines {
                    out.write_record(["", line.as_str()])?;
                }
            }
            Err(message) => out.write_record(["", message.as_str()])?,
        }
        out.write_record(["", ""])?;
    }
    out.flush()?;
    Ok(())
}

/// Interpolation report as a CSV string.
pub fn interpolation_csv(report: &InterpolationReport) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_interpolation_csv(report, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
