//! Common interface of every 1D interpolant.

use crate::types::InterpolationError;
use num_traits::Float;

/// A function reconstructed from a point set.
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::{Interpolator, LinearSplineInterpolator};
/// use numerics_core::types::PointSet;
///
/// let points = PointSet::from_pairs(&[0.0_f64, 2.0], &[0.0, 4.0]).unwrap();
/// let interp = LinearSplineInterpolator::new(&points).unwrap();
/// assert_eq!(interp.domain(), (0.0, 2.0));
/// assert!((interp.interpolate(1.0).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Value of the interpolant at `x`.
    ///
    /// Returns `InterpolationError::OutOfBounds` outside [`domain`](Self::domain).
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Closed interval on which the interpolant is defined.
    fn domain(&self) -> (T, T);

    /// Human-readable expressions, one per piece (a single one for global polynomials).
    fn expressions(&self) -> Vec<String>;
}

/// Shared bounds check used by the implementations.
pub(crate) fn check_domain<T: Float>(x: T, (min, max): (T, T)) -> Result<(), InterpolationError> {
    if x < min || x > max || x.is_nan() {
        return Err(InterpolationError::OutOfBounds {
            x: x.to_f64().unwrap_or(f64::NAN),
            min: min.to_f64().unwrap_or(f64::NAN),
            max: max.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// Segment index for `x` in sorted knots, clamped to `[0, len - 2]`.
#[inline]
pub(crate) fn find_segment<T: Float>(knots: &[T], x: T) -> usize {
    let pos = knots.partition_point(|&xi| xi <= x);
    if pos == 0 {
        0
    } else if pos >= knots.len() {
        knots.len() - 2
    } else {
        pos - 1
    }
}

/// Four-decimal rendering used in every textual expression.
#[inline]
pub(crate) fn fmt4<T: Float>(value: T) -> String {
    // + 0.0 folds negative zero so it does not print as "-0.0000"
    format!("{:.4}", value.to_f64().unwrap_or(f64::NAN) + 0.0)
}
