//! Interpolation methods over validated point sets.
//!
//! ## Available Interpolators
//!
//! - [`QuadraticSplineInterpolator`]: Natural quadratic spline from a dense `2(n-1)` system
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//! - [`LinearSplineInterpolator`]: Piecewise linear interpolation
//! - [`PolynomialInterpolator`]: Global polynomial via Vandermonde, Lagrange or Newton
//!
//! ## Core Trait
//!
//! All interpolators implement [`Interpolator`], which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`
//! - `domain() -> (T, T)`
//! - `expressions() -> Vec<String>`: four-decimal textual pieces for reports
//!
//! All interpolators are generic over `T: num_traits::Float`.
//!
//! ## Example
//!
//! ```
//! use numerics_core::math::interpolators::{Interpolator, QuadraticSplineInterpolator};
//! use numerics_core::types::PointSet;
//!
//! let points = PointSet::from_pairs(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
//! let spline = QuadraticSplineInterpolator::new(&points).unwrap();
//!
//! let (x_min, x_max) = spline.domain();
//! assert_eq!((x_min, x_max), (0.0, 2.0));
//! assert_eq!(spline.expressions().len(), 2);
//! ```

mod cubic_spline;
mod linear_spline;
mod polynomial;
mod quadratic_spline;
mod traits;

// Re-export public types at module level
pub use cubic_spline::{CubicSegment, CubicSplineInterpolator, CUBIC_SPLINE_MIN_POINTS};
pub use linear_spline::LinearSplineInterpolator;
pub use polynomial::{
    divided_differences, lagrange, newton_divided_differences, vandermonde, Polynomial,
    PolynomialInterpolator, PolynomialMethod,
};
pub use quadratic_spline::{
    quadratic_spline_system, QuadraticSegment, QuadraticSplineInterpolator,
    QUADRATIC_SPLINE_MIN_POINTS,
};
pub use traits::Interpolator;
