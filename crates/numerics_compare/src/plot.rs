//! Plot collaborators notified after a spline is built.
//!
//! Rendering is out of scope; [`CsvSampleSink`] writes sampled `(x, S(x))`
//! pairs that an external tool can draw.

use crate::error::ReportError;
use numerics_core::math::interpolators::{Interpolator, QuadraticSplineInterpolator};
use numerics_core::types::PointSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receiver of freshly built splines.
pub trait PlotSink {
    /// Called once per successful build with the input points and the spline.
    fn spline_built(
        &self,
        points: &PointSet<f64>,
        spline: &QuadraticSplineInterpolator<f64>,
    ) -> Result<(), ReportError>;
}

/// Sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPlotSink;

impl PlotSink for NoopPlotSink {
    fn spline_built(
        &self,
        _points: &PointSet<f64>,
        _spline: &QuadraticSplineInterpolator<f64>,
    ) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Writes `kind,x,y` rows: the input points, then evenly spaced spline samples.
#[derive(Debug, Clone)]
pub struct CsvSampleSink {
    path: PathBuf,
    samples_per_segment: usize,
}

impl CsvSampleSink {
    /// Sink writing to `path` with 20 samples per segment.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            samples_per_segment: 20,
        }
    }

    /// Change the sampling density; at least one sample per segment is kept.
    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples.max(1);
        self
    }

    /// Output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_to<W: Write>(
        &self,
        writer: W,
        points: &PointSet<f64>,
        spline: &QuadraticSplineInterpolator<f64>,
    ) -> Result<(), ReportError> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["kind", "x", "y"])?;
        for p in points.points() {
            out.write_record(["point", p.x.to_string().as_str(), p.y.to_string().as_str()])?;
        }

        let knots = spline.knots();
        let n = self.samples_per_segment;
        for (i, window) in knots.windows(2).enumerate() {
            let (left, right) = (window[0], window[1]);
            // Shared knots are written once
            let start = if i == 0 { 0 } else { 1 };
            for k in start..=n {
                let x = if k == n {
                    right
                } else {
                    left + (right - left) * k as f64 / n as f64
                };
                if let Ok(y) = spline.interpolate(x) {
                    out.write_record(["sample", x.to_string().as_str(), y.to_string().as_str()])?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl PlotSink for CsvSampleSink {
    fn spline_built(
        &self,
        points: &PointSet<f64>,
        spline: &QuadraticSplineInterpolator<f64>,
    ) -> Result<(), ReportError> {
        let file = File::create(&self.path)?;
        self.write_to(file, points, spline)
    }
}
