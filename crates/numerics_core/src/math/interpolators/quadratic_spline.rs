//! Natural quadratic spline interpolation.
//!
//! Each interval `[x_i, x_{i+1}]` carries
//!
//! ```text
//! S_i(x) = a_i + b_i*(x - x_i) + c_i*(x - x_i)^2
//! ```
//!
//! with `a_i = y_i` fixed by the data. The remaining `2(n-1)` unknowns are
//! ordered `[b_0 .. b_{n-2}, c_0 .. c_{n-2}]` and determined by a square
//! system of
//!
//! - `n-1` interpolation rows: `b_i*h_i + c_i*h_i^2 = y_{i+1} - y_i`
//! - `n-2` continuity rows: `b_i - b_{i+1} + 2*h_i*c_i = 0`
//! - one natural boundary row: `2*c_0 = 0`
//!
//! which is non-singular for any sorted point set with distinct abscissas.

use super::traits::{check_domain, find_segment, fmt4};
use super::Interpolator;
use crate::math::linalg::{solve, DenseMatrix};
use crate::types::{InterpolationError, PointSet};
use num_traits::Float;

/// Minimum number of points for a quadratic spline.
pub const QUADRATIC_SPLINE_MIN_POINTS: usize = 3;

/// One quadratic piece, expanded around its left knot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuadraticSegment<T: Float> {
    /// Left knot (expansion point)
    pub x_left: T,
    /// Right knot
    pub x_right: T,
    /// Constant term, equal to the ordinate at `x_left`
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Quadratic coefficient
    pub c: T,
}

impl<T: Float> QuadraticSegment<T> {
    /// `S_i(x)`.
    #[inline]
    pub fn value(&self, x: T) -> T {
        let dx = x - self.x_left;
        self.a + dx * (self.b + dx * self.c)
    }

    /// `S_i'(x)`.
    #[inline]
    pub fn derivative(&self, x: T) -> T {
        let two = T::one() + T::one();
        self.b + two * self.c * (x - self.x_left)
    }

    /// `S_i''`, constant over the piece.
    #[inline]
    pub fn second_derivative(&self) -> T {
        (T::one() + T::one()) * self.c
    }

    /// `a + b*(x - x_i) + c*(x - x_i)^2` with four decimals.
    pub fn expression(&self) -> String {
        let knot = fmt4(self.x_left);
        format!(
            "{} + {}*(x - {}) + {}*(x - {})^2",
            fmt4(self.a),
            fmt4(self.b),
            knot,
            fmt4(self.c),
            knot
        )
    }
}

/// Assemble the `2(n-1)` square system for a natural quadratic spline.
///
/// Exposed so the layout can be inspected; [`QuadraticSplineInterpolator::new`]
/// is the normal entry point.
///
/// # Returns
///
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 points
pub fn quadratic_spline_system<T: Float>(
    points: &PointSet<T>,
) -> Result<(DenseMatrix<T>, Vec<T>), InterpolationError> {
    let n = points.len();
    if n < QUADRATIC_SPLINE_MIN_POINTS {
        return Err(InterpolationError::InsufficientData {
            got: n,
            need: QUADRATIC_SPLINE_MIN_POINTS,
        });
    }

    let segments = n - 1;
    let size = 2 * segments;
    let h = points.widths();
    let ys = points.ys();
    let two = T::one() + T::one();

    let mut mat = DenseMatrix::zeros(size, size);
    let mut rhs = vec![T::zero(); size];

    // S_i(x_{i+1}) = y_{i+1}
    for i in 0..segments {
        mat[(i, i)] = h[i];
        mat[(i, segments + i)] = h[i] * h[i];
        rhs[i] = ys[i + 1] - ys[i];
    }

    // S_i'(x_{i+1}) = S_{i+1}'(x_{i+1})
    for i in 0..segments - 1 {
        let row = segments + i;
        mat[(row, i)] = T::one();
        mat[(row, i + 1)] = -T::one();
        mat[(row, segments + i)] = two * h[i];
    }

    // S_0''(x_0) = 0
    mat[(size - 1, segments)] = two;

    Ok((mat, rhs))
}

/// Natural quadratic spline with C¹ continuity.
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::{Interpolator, QuadraticSplineInterpolator};
/// use numerics_core::types::PointSet;
///
/// let points = PointSet::from_pairs(&[0.0_f64, 1.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
/// let spline = QuadraticSplineInterpolator::new(&points).unwrap();
///
/// assert_eq!(spline.segments().len(), 2);
/// assert_eq!(spline.segments()[0].c, 0.0);
/// assert!((spline.interpolate(2.0).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct QuadraticSplineInterpolator<T: Float> {
    knots: Vec<T>,
    segments: Vec<QuadraticSegment<T>>,
}

impl<T: Float> QuadraticSplineInterpolator<T> {
    /// Build the spline by solving its coefficient system directly.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 points
    /// * `Err(InterpolationError::SingularSystem)` - Coefficient system hit a zero or non-finite pivot
    pub fn new(points: &PointSet<T>) -> Result<Self, InterpolationError> {
        let (mat, rhs) = quadratic_spline_system(points)?;
        let solution = solve(&mat, &rhs)?;

        let n_segments = points.len() - 1;
        let (b, c) = solution.split_at(n_segments);
        let pts = points.points();

        let segments = (0..n_segments)
            .map(|i| QuadraticSegment {
                x_left: pts[i].x,
                x_right: pts[i + 1].x,
                a: pts[i].y,
                b: b[i],
                c: c[i],
            })
            .collect();

        Ok(Self {
            knots: points.xs(),
            segments,
        })
    }

    /// Pieces in knot order.
    #[inline]
    pub fn segments(&self) -> &[QuadraticSegment<T>] {
        &self.segments
    }

    /// Knot abscissas.
    #[inline]
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// First derivative at `x`.
    pub fn derivative(&self, x: T) -> Result<T, InterpolationError> {
        check_domain(x, self.domain())?;
        Ok(self.segments[find_segment(&self.knots, x)].derivative(x))
    }
}

impl<T: Float> Interpolator<T> for QuadraticSplineInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        check_domain(x, self.domain())?;
        Ok(self.segments[find_segment(&self.knots, x)].value(x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    fn expressions(&self) -> Vec<String> {
        self.segments.iter().map(QuadraticSegment::expression).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points(xs: &[f64], ys: &[f64]) -> PointSet<f64> {
        PointSet::from_pairs(xs, ys).unwrap()
    }

    #[test]
    fn test_three_point_scenario() {
        let spline = QuadraticSplineInterpolator::new(&points(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]))
            .unwrap();
        let s = spline.segments();
        assert_eq!(s.len(), 2);

        assert_eq!(s[0].c, 0.0);
        assert_relative_eq!(s[0].b, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s[1].a, 3.0);
        assert_relative_eq!(s[1].b, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s[1].c, -3.0, epsilon = 1e-12);

        assert_relative_eq!(s[0].value(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(s[0].value(1.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(s[1].value(1.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(s[1].value(2.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_system_layout() {
        let (mat, rhs) =
            quadratic_spline_system(&points(&[0.0, 1.0, 3.0], &[0.0, 1.0, 0.0])).unwrap();
        assert_eq!(mat.n_rows(), 4);
        assert!(mat.is_square());

        // Interpolation rows
        assert_eq!(mat.row(0), &[1.0, 0.0, 1.0, 0.0]);
        assert_eq!(mat.row(1), &[0.0, 2.0, 0.0, 4.0]);
        // Continuity row
        assert_eq!(mat.row(2), &[1.0, -1.0, 2.0, 0.0]);
        // Natural boundary row
        assert_eq!(mat.row(3), &[0.0, 0.0, 2.0, 0.0]);

        assert_eq!(rhs, vec![1.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_insufficient_points() {
        let result = QuadraticSplineInterpolator::new(&points(&[0.0, 1.0], &[0.0, 1.0]));
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::InsufficientData { got: 2, need: 3 }
        );
    }

    #[test]
    fn test_derivative_continuity_and_boundary() {
        let spline = QuadraticSplineInterpolator::new(&points(
            &[-1.0, 0.5, 1.0, 2.5, 4.0],
            &[2.0, -1.0, 0.0, 3.0, 1.5],
        ))
        .unwrap();
        let s = spline.segments();
        for i in 0..s.len() - 1 {
            let knot = s[i].x_right;
            assert_relative_eq!(s[i].derivative(knot), s[i + 1].derivative(knot), epsilon = 1e-9);
        }
        assert_relative_eq!(s[0].second_derivative(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let spline = QuadraticSplineInterpolator::new(&points(&[2.0, 0.0, 1.0], &[2.0, 1.0, 3.0]))
            .unwrap();
        assert_eq!(spline.knots(), &[0.0, 1.0, 2.0]);
        assert_relative_eq!(spline.interpolate(1.0).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_expression_format() {
        let spline = QuadraticSplineInterpolator::new(&points(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]))
            .unwrap();
        let exprs = spline.expressions();
        assert_eq!(exprs[0], "1.0000 + 2.0000*(x - 0.0000) + 0.0000*(x - 0.0000)^2");
        assert_eq!(exprs[1], "3.0000 + 2.0000*(x - 1.0000) + -3.0000*(x - 1.0000)^2");
    }

    #[test]
    fn test_out_of_bounds() {
        let spline = QuadraticSplineInterpolator::new(&points(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]))
            .unwrap();
        assert!(matches!(
            spline.interpolate(2.5),
            Err(InterpolationError::OutOfBounds { .. })
        ));
        assert!(spline.derivative(-0.1).is_err());
    }

    #[test]
    fn test_widely_scaled_knots() {
        for h in [1e-8, 1e9] {
            let xs = [0.0, h, 2.0 * h];
            let spline = QuadraticSplineInterpolator::new(&points(&xs, &[1.0, 3.0, 2.0])).unwrap();
            let s = spline.segments();

            assert_eq!(s[0].a, 1.0);
            assert_eq!(s[1].a, 3.0);
            assert_relative_eq!(s[1].value(xs[2]), 2.0, epsilon = 1e-6);
            assert_relative_eq!(s[0].value(xs[1]), 3.0, epsilon = 1e-6);
            assert_relative_eq!(s[0].derivative(xs[1]), s[1].derivative(xs[1]), max_relative = 1e-6);
        }
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strictly increasing knots with gaps in [0.1, 5] and bounded ordinates
        fn point_set_strategy() -> impl Strategy<Value = PointSet<f64>> {
            (3usize..=8).prop_flat_map(|n| {
                (
                    -10.0..10.0f64,
                    prop::collection::vec(0.1..5.0f64, n - 1),
                    prop::collection::vec(-50.0..50.0f64, n),
                )
                    .prop_map(|(start, gaps, ys)| {
                        let mut xs = vec![start];
                        for gap in gaps {
                            let last = xs[xs.len() - 1];
                            xs.push(last + gap);
                        }
                        PointSet::from_pairs(&xs, &ys).unwrap()
                    })
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_spline_interpolates_every_knot(points in point_set_strategy()) {
                let spline = QuadraticSplineInterpolator::new(&points).unwrap();
                let pts = points.points();
                for (i, seg) in spline.segments().iter().enumerate() {
                    prop_assert!((seg.value(pts[i].x) - pts[i].y).abs() < 1e-9);
                    prop_assert!((seg.value(pts[i + 1].x) - pts[i + 1].y).abs() < 1e-6);
                }
            }

            #[test]
            fn test_spline_first_derivative_continuous(points in point_set_strategy()) {
                let spline = QuadraticSplineInterpolator::new(&points).unwrap();
                let s = spline.segments();
                for i in 0..s.len() - 1 {
                    let knot = s[i].x_right;
                    let scale = 1.0 + s[i].derivative(knot).abs();
                    prop_assert!((s[i].derivative(knot) - s[i + 1].derivative(knot)).abs() < 1e-6 * scale);
                }
            }

            #[test]
            fn test_spline_natural_left_boundary(points in point_set_strategy()) {
                let spline = QuadraticSplineInterpolator::new(&points).unwrap();
                prop_assert!(spline.segments()[0].second_derivative().abs() < 1e-9);
            }
        }
    }
}
