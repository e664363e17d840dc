//! Bracketing root finders: bisection and regula falsi.
//!
//! Both require `f(a)` and `f(b)` of opposite sign. A bracket without a sign
//! change is not a fault: the output comes back with `is_successful = false`.

use super::output::{push_row, Estimate, IterationTable, SolverOutput};
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// How the next point inside the bracket is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    Midpoint,
    FalsePosition,
}

fn run_bracket<T, F>(
    config: &SolverConfig<T>,
    f: F,
    a: T,
    b: T,
    split: Split,
) -> Result<SolverOutput<T>, SolverError>
where
    T: Float,
    F: Fn(T) -> T,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(SolverError::InvalidInput(
            "bracket must satisfy a < b with finite ends".to_string(),
        ));
    }

    let (mut lo, mut hi) = (a, b);
    let mut f_lo = f(lo);
    let mut f_hi = f(hi);

    let mut table = IterationTable::new();
    for (end, f_end) in [(lo, f_lo), (hi, f_hi)] {
        if f_end == T::zero() {
            push_row(&mut table, Estimate::Scalar(end), Some(T::zero()), None);
            return Ok(SolverOutput::converged(table, Estimate::Scalar(end)));
        }
    }
    if f_lo * f_hi > T::zero() {
        return Ok(SolverOutput::unsuccessful(
            "The interval does not bracket a root: f(a) and f(b) have the same sign",
        ));
    }

    let two = T::one() + T::one();
    let mut previous: Option<T> = None;

    for _ in 0..config.max_iterations {
        let mid = match split {
            Split::Midpoint => (lo + hi) / two,
            Split::FalsePosition => {
                let denom = f_hi - f_lo;
                if denom == T::zero() {
                    return Err(SolverError::NumericalInstability(
                        "regula falsi denominator vanished".to_string(),
                    ));
                }
                hi - f_hi * (hi - lo) / denom
            }
        };
        if !mid.is_finite() {
            return Err(SolverError::NumericalInstability(
                "bracket iteration produced a non-finite value".to_string(),
            ));
        }

        let f_mid = f(mid);
        let error = previous.map(|p| config.error_measure.scalar(mid, p));
        push_row(&mut table, Estimate::Scalar(mid), Some(f_mid.abs()), error);

        if f_mid == T::zero() || error.is_some_and(|e| e < config.tolerance) {
            return Ok(SolverOutput::converged(table, Estimate::Scalar(mid)));
        }

        if f_lo * f_mid < T::zero() {
            hi = mid;
            f_hi = f_mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
        previous = Some(mid);
    }

    Ok(SolverOutput::exhausted(table, config.max_iterations))
}

/// Interval halving.
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::{BisectionSolver, Estimate, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-8, 100));
/// let output = solver.solve(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
///
/// assert!(output.have_solution);
/// if let Some(Estimate::Scalar(root)) = output.solution {
///     assert!((root - std::f64::consts::SQRT_2).abs() < 1e-7);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Halve `[a, b]` until successive midpoints agree within tolerance.
    ///
    /// The first row carries no error: it needs a previous midpoint.
    pub fn solve<F>(&self, f: F, a: T, b: T) -> Result<SolverOutput<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        run_bracket(&self.config, f, a, b, Split::Midpoint)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

/// False position: the secant through the bracket ends picks the next point.
#[derive(Debug, Clone)]
pub struct RegulaFalsiSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> RegulaFalsiSolver<T> {
    /// Create a new regula falsi solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Iterate on `[a, b]` with `c = b - f(b)(b - a) / (f(b) - f(a))`.
    pub fn solve<F>(&self, f: F, a: T, b: T) -> Result<SolverOutput<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        run_bracket(&self.config, f, a, b, Split::FalsePosition)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
