//! Quadratic spline builder with plot notification.

use crate::plot::PlotSink;
use numerics_core::math::interpolators::{Interpolator, QuadraticSplineInterpolator};
use numerics_core::types::{InterpolationError, PointSet};
use std::panic::{self, AssertUnwindSafe};

/// A built spline and its per-segment expressions.
#[derive(Debug, Clone)]
pub struct SplineReport {
    /// The interpolant
    pub spline: QuadraticSplineInterpolator<f64>,
    /// `a + b*(x - x_i) + c*(x - x_i)^2`, one per segment, left to right
    pub expressions: Vec<String>,
}

/// Build the natural quadratic spline through `points` and notify `sink`.
///
/// The sink runs after a successful build. Its failures, panics included,
/// are logged and never change the returned result.
///
/// # Example
///
/// ```
/// use numerics_compare::{build_spline, NoopPlotSink};
/// use numerics_core::types::PointSet;
///
/// let points = PointSet::from_pairs(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
/// let report = build_spline(&points, &NoopPlotSink).unwrap();
/// assert_eq!(report.expressions[0], "1.0000 + 2.0000*(x - 0.0000) + 0.0000*(x - 0.0000)^2");
/// ```
pub fn build_spline(
    points: &PointSet<f64>,
    sink: &dyn PlotSink,
) -> Result<SplineReport, InterpolationError> {
    let spline = QuadraticSplineInterpolator::new(points)?;
    let expressions = spline.expressions();
    tracing::debug!(points = points.len(), segments = expressions.len(), "spline built");

    match panic::catch_unwind(AssertUnwindSafe(|| sink.spline_built(points, &spline))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "plot sink failed"),
        Err(_) => tracing::warn!("plot sink panicked"),
    }

    Ok(SplineReport {
        spline,
        expressions,
    })
}
