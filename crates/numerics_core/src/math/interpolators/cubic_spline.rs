//! Natural cubic spline interpolation.

use super::traits::{check_domain, find_segment, fmt4};
use super::Interpolator;
use crate::types::{InterpolationError, PointSet};
use num_traits::Float;

/// Minimum number of points for a natural cubic spline.
pub const CUBIC_SPLINE_MIN_POINTS: usize = 3;

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CubicSegment<T: Float> {
    /// Left knot (expansion point)
    pub x_left: T,
    /// Constant term (y value at segment start)
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Quadratic coefficient
    pub c: T,
    /// Cubic coefficient
    pub d: T,
}

impl<T: Float> CubicSegment<T> {
    /// Segment value at `x`.
    #[inline]
    pub fn value(&self, x: T) -> T {
        let dx = x - self.x_left;
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }

    /// `a + b*(x - xi) + c*(x - xi)^2 + d*(x - xi)^3` with four decimals.
    pub fn expression(&self) -> String {
        let knot = fmt4(self.x_left);
        format!(
            "{} + {}*(x - {k}) + {}*(x - {k})^2 + {}*(x - {k})^3",
            fmt4(self.a),
            fmt4(self.b),
            fmt4(self.c),
            fmt4(self.d),
            k = knot
        )
    }
}

/// Natural cubic spline interpolator with C² continuity.
///
/// Second derivatives at the interior knots come from the tridiagonal
/// moment system, solved with the Thomas algorithm; both end moments are
/// zero.
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
/// use numerics_core::types::PointSet;
///
/// let points = PointSet::from_pairs(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
/// let interp = CubicSplineInterpolator::new(&points).unwrap();
/// assert!((interp.interpolate(2.0).unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Polynomial coefficients for each segment
    segments: Vec<CubicSegment<T>>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 data points
    pub fn new(points: &PointSet<T>) -> Result<Self, InterpolationError> {
        if points.len() < CUBIC_SPLINE_MIN_POINTS {
            return Err(InterpolationError::InsufficientData {
                got: points.len(),
                need: CUBIC_SPLINE_MIN_POINTS,
            });
        }

        let xs = points.xs();
        let ys = points.ys();
        let segments = Self::compute_segments(&xs, &ys);
        Ok(Self { xs, segments })
    }

    /// Solve for the knot moments, then derive per-segment coefficients.
    fn compute_segments(xs: &[T], ys: &[T]) -> Vec<CubicSegment<T>> {
        let n = xs.len();
        let two = T::one() + T::one();
        let six = two + two + two;

        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();
        let interior = n - 2;

        // Tridiagonal system for the interior moments M[1..n-1]:
        // h[i-1]*M[i-1] + 2*(h[i-1]+h[i])*M[i] + h[i]*M[i+1] = 6*(...)
        let mut c_prime = vec![T::zero(); interior];
        let mut d_prime = vec![T::zero(); interior];

        for k in 0..interior {
            let i = k + 1;
            let diag = two * (h[i - 1] + h[i]);
            let rhs = six * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
            let upper = if k + 1 < interior { h[i] } else { T::zero() };

            if k == 0 {
                c_prime[k] = upper / diag;
                d_prime[k] = rhs / diag;
            } else {
                let lower = h[i - 1];
                let denom = diag - lower * c_prime[k - 1];
                c_prime[k] = upper / denom;
                d_prime[k] = (rhs - lower * d_prime[k - 1]) / denom;
            }
        }

        // Back substitution; natural boundary keeps M[0] = M[n-1] = 0
        let mut m = vec![T::zero(); n];
        for k in (0..interior).rev() {
            let next = m[k + 2];
            m[k + 1] = d_prime[k] - c_prime[k] * next;
        }

        (0..n - 1)
            .map(|i| CubicSegment {
                x_left: xs[i],
                a: ys[i],
                b: (ys[i + 1] - ys[i]) / h[i] - h[i] * (two * m[i] + m[i + 1]) / six,
                c: m[i] / two,
                d: (m[i + 1] - m[i]) / (six * h[i]),
            })
            .collect()
    }

    /// Segments in knot order.
    #[inline]
    pub fn segments(&self) -> &[CubicSegment<T>] {
        &self.segments
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        check_domain(x, self.domain())?;
        Ok(self.segments[find_segment(&self.xs, x)].value(x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    fn expressions(&self) -> Vec<String> {
        self.segments.iter().map(CubicSegment::expression).collect()
    }
}
