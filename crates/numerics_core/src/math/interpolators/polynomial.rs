//! Global interpolating polynomials.
//!
//! Three constructions of the same unique polynomial of degree `n-1`:
//! Vandermonde (dense solve), Lagrange basis expansion and Newton divided
//! differences. All three are reported in the power basis so their output
//! can be compared directly.

use super::traits::{check_domain, fmt4};
use super::Interpolator;
use crate::math::linalg::{solve, DenseMatrix};
use crate::types::{InterpolationError, PointSet};
use num_traits::Float;

/// Construction used for an interpolating polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolynomialMethod {
    /// Solve the Vandermonde system for power-basis coefficients
    Vandermonde,
    /// Sum of Lagrange basis polynomials
    Lagrange,
    /// Newton form from divided differences
    NewtonDividedDifferences,
}

/// Polynomial in the power basis, `coeffs[k]` multiplying `x^k`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polynomial<T: Float> {
    coeffs: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Wrap ascending-power coefficients.
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    /// Ascending-power coefficients.
    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Horner evaluation.
    pub fn evaluate(&self, x: T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &coef| acc * x + coef)
    }

    /// Multiply in place by `(x - root)`.
    fn mul_linear(&mut self, root: T) {
        let mut next = vec![T::zero(); self.coeffs.len() + 1];
        for (k, &coef) in self.coeffs.iter().enumerate() {
            next[k + 1] = next[k + 1] + coef;
            next[k] = next[k] - root * coef;
        }
        self.coeffs = next;
    }

    /// `c_n*x^n + ... + c_1*x + c_0`, highest power first.
    pub fn expression(&self) -> String {
        let degree = self.coeffs.len().saturating_sub(1);
        let mut out = String::new();
        for (power, &coef) in self.coeffs.iter().enumerate().rev() {
            let value = coef.to_f64().unwrap_or(f64::NAN);
            let term = match power {
                0 => fmt4(value.abs()),
                1 => format!("{}x", fmt4(value.abs())),
                _ => format!("{}x^{}", fmt4(value.abs()), power),
            };
            if power == degree {
                if value < 0.0 {
                    out.push('-');
                }
                out.push_str(&term);
            } else {
                out.push_str(if value < 0.0 { " - " } else { " + " });
                out.push_str(&term);
            }
        }
        out
    }
}

/// Power-basis coefficients from the Vandermonde system `V c = y`.
pub fn vandermonde<T: Float>(points: &PointSet<T>) -> Result<Polynomial<T>, InterpolationError> {
    let n = points.len();
    let mut mat = DenseMatrix::zeros(n, n);
    for (i, p) in points.points().iter().enumerate() {
        let mut power = T::one();
        for j in 0..n {
            mat[(i, j)] = power;
            power = power * p.x;
        }
    }
    let coeffs = solve(&mat, &points.ys())?;
    Ok(Polynomial::new(coeffs))
}

/// Expand `sum_i y_i * L_i(x)` into the power basis.
pub fn lagrange<T: Float>(points: &PointSet<T>) -> Polynomial<T> {
    let pts = points.points();
    let n = pts.len();
    let mut coeffs = vec![T::zero(); n];

    for (i, pi) in pts.iter().enumerate() {
        let mut basis = Polynomial::new(vec![T::one()]);
        let mut denom = T::one();
        for (j, pj) in pts.iter().enumerate() {
            if i != j {
                basis.mul_linear(pj.x);
                denom = denom * (pi.x - pj.x);
            }
        }
        let scale = pi.y / denom;
        for (acc, &b) in coeffs.iter_mut().zip(basis.coeffs()) {
            *acc = *acc + scale * b;
        }
    }

    Polynomial::new(coeffs)
}

/// Newton divided-difference coefficients `f[x_0], f[x_0,x_1], ...`.
pub fn divided_differences<T: Float>(points: &PointSet<T>) -> Vec<T> {
    let xs = points.xs();
    let mut table = points.ys();
    let n = xs.len();
    for order in 1..n {
        for i in (order..n).rev() {
            table[i] = (table[i] - table[i - 1]) / (xs[i] - xs[i - order]);
        }
    }
    table
}

/// Newton form expanded into the power basis.
pub fn newton_divided_differences<T: Float>(points: &PointSet<T>) -> Polynomial<T> {
    let xs = points.xs();
    let dd = divided_differences(points);
    let n = dd.len();

    // Nested expansion: p = dd[n-1]; p = p*(x - x_k) + dd[k]
    let mut poly = Polynomial::new(vec![dd[n - 1]]);
    for k in (0..n - 1).rev() {
        poly.mul_linear(xs[k]);
        poly.coeffs[0] = poly.coeffs[0] + dd[k];
    }
    poly
}

/// Interpolating polynomial restricted to the data range.
///
/// # Example
///
/// ```
/// use numerics_core::math::interpolators::{Interpolator, PolynomialInterpolator, PolynomialMethod};
/// use numerics_core::types::PointSet;
///
/// let points = PointSet::from_pairs(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
/// let p = PolynomialInterpolator::new(&points, PolynomialMethod::Lagrange).unwrap();
/// assert_eq!(p.expressions(), vec!["1.0000x^2 + 0.0000x + 1.0000"]);
/// ```
#[derive(Debug, Clone)]
pub struct PolynomialInterpolator<T: Float> {
    method: PolynomialMethod,
    polynomial: Polynomial<T>,
    domain: (T, T),
}

impl<T: Float> PolynomialInterpolator<T> {
    /// Build with the requested construction.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::SingularSystem)` - Vandermonde solve failed
    pub fn new(points: &PointSet<T>, method: PolynomialMethod) -> Result<Self, InterpolationError> {
        let polynomial = match method {
            PolynomialMethod::Vandermonde => vandermonde(points)?,
            PolynomialMethod::Lagrange => lagrange(points),
            PolynomialMethod::NewtonDividedDifferences => newton_divided_differences(points),
        };
        Ok(Self {
            method,
            polynomial,
            domain: points.domain(),
        })
    }

    /// Construction that produced this polynomial.
    pub fn method(&self) -> PolynomialMethod {
        self.method
    }

    /// Underlying polynomial.
    pub fn polynomial(&self) -> &Polynomial<T> {
        &self.polynomial
    }
}

impl<T: Float> Interpolator<T> for PolynomialInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        check_domain(x, self.domain)?;
        Ok(self.polynomial.evaluate(x))
    }

    fn domain(&self) -> (T, T) {
        self.domain
    }

    fn expressions(&self) -> Vec<String> {
        vec![self.polynomial.expression()]
    }
}
