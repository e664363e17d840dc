//! Every interpolation method on the same raw input.

use numerics_core::math::interpolators::{
    CubicSplineInterpolator, Interpolator, LinearSplineInterpolator, PolynomialInterpolator,
    PolynomialMethod, QuadraticSplineInterpolator,
};
use numerics_core::types::{InterpolationError, PointSet};
use numerics_core::validation::PointSetValidator;
use serde::Serialize;
use std::fmt;

/// Interpolation methods in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InterpolationMethod {
    /// Lagrange basis expansion
    Lagrange,
    /// Vandermonde system solve
    Vandermonde,
    /// Newton divided differences
    Newton,
    /// Piecewise linear
    LinearSpline,
    /// Natural quadratic spline
    QuadraticSpline,
    /// Natural cubic spline
    CubicSpline,
}

impl InterpolationMethod {
    /// All methods, in report order.
    pub const ALL: [InterpolationMethod; 6] = [
        InterpolationMethod::Lagrange,
        InterpolationMethod::Vandermonde,
        InterpolationMethod::Newton,
        InterpolationMethod::LinearSpline,
        InterpolationMethod::QuadraticSpline,
        InterpolationMethod::CubicSpline,
    ];

    /// Expressions of the interpolant through `points`.
    pub fn expressions(&self, points: &PointSet<f64>) -> Result<Vec<String>, InterpolationError> {
        let interp: Box<dyn Interpolator<f64>> = match self {
            InterpolationMethod::Lagrange => {
                Box::new(PolynomialInterpolator::new(points, PolynomialMethod::Lagrange)?)
            }
            InterpolationMethod::Vandermonde => {
                Box::new(PolynomialInterpolator::new(points, PolynomialMethod::Vandermonde)?)
            }
            InterpolationMethod::Newton => Box::new(PolynomialInterpolator::new(
                points,
                PolynomialMethod::NewtonDividedDifferences,
            )?),
            InterpolationMethod::LinearSpline => Box::new(LinearSplineInterpolator::new(points)?),
            InterpolationMethod::QuadraticSpline => {
                Box::new(QuadraticSplineInterpolator::new(points)?)
            }
            InterpolationMethod::CubicSpline => Box::new(CubicSplineInterpolator::new(points)?),
        };
        Ok(interp.expressions())
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterpolationMethod::Lagrange => "Lagrange",
            InterpolationMethod::Vandermonde => "Vandermonde",
            InterpolationMethod::Newton => "Newton",
            InterpolationMethod::LinearSpline => "Linear Spline",
            InterpolationMethod::QuadraticSpline => "Quadratic Spline",
            InterpolationMethod::CubicSpline => "Cubic Spline",
        };
        f.write_str(name)
    }
}

/// One method's expressions, or the message explaining why there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationOutcome {
    /// Method that was run
    pub method: InterpolationMethod,
    /// Expressions on success, user-facing message on failure
    pub result: Result<Vec<String>, String>,
}

/// Raw inputs plus every method's outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationReport {
    /// X values as typed
    pub x_raw: String,
    /// Y values as typed
    pub y_raw: String,
    /// One outcome per method, in [`InterpolationMethod::ALL`] order
    pub outcomes: Vec<InterpolationOutcome>,
}

/// Validate once, then run every method.
///
/// A validation failure becomes the outcome of every method, so the report
/// still has one block per method.
///
/// # Example
///
/// ```
/// use numerics_compare::interpolation_report;
/// use numerics_core::validation::PointSetValidator;
///
/// let report = interpolation_report("0 1", "1 3", &PointSetValidator::default());
/// assert_eq!(report.outcomes.len(), 6);
/// // Two points are enough for a line but not for a quadratic spline
/// assert!(report.outcomes[3].result.is_ok());
/// assert!(report.outcomes[4].result.is_err());
/// ```
pub fn interpolation_report(
    x_raw: &str,
    y_raw: &str,
    validator: &PointSetValidator,
) -> InterpolationReport {
    let points = validator.validate(x_raw, y_raw);
    let outcomes = InterpolationMethod::ALL
        .iter()
        .map(|&method| {
            let result = match &points {
                Ok(points) => method.expressions(points).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(reason) = &result {
                tracing::debug!(method = %method, %reason, "interpolation unavailable");
            }
            InterpolationOutcome { method, result }
        })
        .collect();

    InterpolationReport {
        x_raw: x_raw.to_string(),
        y_raw: y_raw.to_string(),
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_methods_on_three_points() {
        let report = interpolation_report("0 1 2", "1 3 2", &PointSetValidator::default());

        assert!(report.outcomes.iter().all(|o| o.result.is_ok()));
        let polys: Vec<&Vec<String>> = report.outcomes[..3]
            .iter()
            .map(|o| o.result.as_ref().unwrap())
            .collect();
        // The three polynomial constructions print the same polynomial
        assert_eq!(polys[0], polys[1]);
        assert_eq!(polys[1], polys[2]);

        let quad = report.outcomes[4].result.as_ref().unwrap();
        assert_eq!(quad.len(), 2);
    }

    #[test]
    fn test_validation_error_fills_every_block() {
        let report = interpolation_report("0 0 1", "1 2 3", &PointSetValidator::default());
        for outcome in &report.outcomes {
            let message = outcome.result.as_ref().unwrap_err();
            assert!(message.contains("unique"));
        }
    }

    #[test]
    fn test_method_names() {
        let names: Vec<String> = InterpolationMethod::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Lagrange",
                "Vandermonde",
                "Newton",
                "Linear Spline",
                "Quadratic Spline",
                "Cubic Spline"
            ]
        );
    }
}
