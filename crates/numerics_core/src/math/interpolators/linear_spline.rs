//! Piecewise linear interpolation.

use super::traits::{check_domain, find_segment, fmt4};
use super::Interpolator;
use crate::types::{InterpolationError, PointSet};
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Requires at least 2 points.
#[derive(Debug, Clone)]
pub struct LinearSplineInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearSplineInterpolator<T> {
    /// Construct from a validated point set.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
    pub fn new(points: &PointSet<T>) -> Result<Self, InterpolationError> {
        if points.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: points.len(),
                need: 2,
            });
        }
        Ok(Self {
            xs: points.xs(),
            ys: points.ys(),
        })
    }

    #[inline]
    fn slope(&self, i: usize) -> T {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl<T: Float> Interpolator<T> for LinearSplineInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        check_domain(x, self.domain())?;
        let i = find_segment(&self.xs, x);
        Ok(self.ys[i] + self.slope(i) * (x - self.xs[i]))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    fn expressions(&self) -> Vec<String> {
        (0..self.xs.len() - 1)
            .map(|i| {
                format!(
                    "{} + {}*(x - {})",
                    fmt4(self.ys[i]),
                    fmt4(self.slope(i)),
                    fmt4(self.xs[i])
                )
            })
            .collect()
    }
}
