//! Newton-Raphson root-finding solver.

use super::output::{push_row, Estimate, IterationTable, SolverOutput};
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Smallest derivative magnitude accepted in a Newton-type update.
#[inline]
pub(crate) fn derivative_epsilon<T: Float>() -> T {
    T::from(1e-30).unwrap_or_else(T::min_positive_value)
}

/// Drive a one-point iteration `x_{k+1} = step(x_k)` from `x0`.
///
/// Records one row per update with `|f(x_{k+1})|` and the step error.
/// Stops when the error drops below tolerance or `f` vanishes exactly.
/// A zero `f(x0)` converges without any update.
pub(crate) fn iterate_open<T, F, S>(
    config: &SolverConfig<T>,
    f: F,
    x0: T,
    mut step: S,
) -> Result<SolverOutput<T>, SolverError>
where
    T: Float,
    F: Fn(T) -> T,
    S: FnMut(T) -> Result<T, SolverError>,
{
    let mut table = IterationTable::new();
    let mut x = x0;

    if f(x) == T::zero() {
        return Ok(SolverOutput::converged(table, Estimate::Scalar(x)));
    }

    for _ in 0..config.max_iterations {
        let next = step(x)?;
        if !next.is_finite() {
            return Err(SolverError::NumericalInstability(
                "iteration produced a non-finite value".to_string(),
            ));
        }

        let f_next = f(next);
        let error = config.error_measure.scalar(next, x);
        push_row(
            &mut table,
            Estimate::Scalar(next),
            Some(f_next.abs()),
            Some(error),
        );
        x = next;

        if f_next == T::zero() || error < config.tolerance {
            return Ok(SolverOutput::converged(table, Estimate::Scalar(x)));
        }
    }

    Ok(SolverOutput::exhausted(table, config.max_iterations))
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a simple root, meaning the
/// number of correct digits approximately doubles each iteration. It fails
/// when the derivative vanishes, and converges only linearly on multiple
/// roots (see [`MultipleRootsSolver`](super::MultipleRootsSolver)).
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::{Estimate, NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let output = solver.solve(f, f_prime, 1.0).unwrap();
/// assert!(output.have_solution);
/// match output.solution {
///     Some(Estimate::Scalar(root)) => assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Iterate from `x0` using the explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(output)` - Iteration table; `have_solution` is false when the
    ///   iteration cap was reached
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Non-finite iterate
    pub fn solve<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<SolverOutput<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let epsilon = derivative_epsilon::<T>();
        iterate_open(&self.config, &f, x0, |x| {
            let d = f_prime(x);
            if d.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }
            Ok(x - f(x) / d)
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn root_of(output: &SolverOutput<f64>) -> f64 {
        match output.solution {
            Some(Estimate::Scalar(x)) => x,
            ref other => panic!("expected scalar solution, got {:?}", other),
        }
    }

    // ========================================
    // Basic Root-Finding Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
        let output = solver.solve(|x| x * x - 2.0, |x| 2.0 * x, 1.0).unwrap();

        assert!(output.have_solution);
        assert!(output.is_successful);
        assert_relative_eq!(root_of(&output), std::f64::consts::SQRT_2, epsilon = 1e-12);
        assert!(
            output.iterations() < 10,
            "Newton should converge quickly, took {}",
            output.iterations()
        );
    }

    #[test]
    fn test_find_cubic_root() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
        let f = |x: f64| x * x * x - x - 2.0;
        let output = solver.solve(f, |x| 3.0 * x * x - 1.0, 1.5).unwrap();

        assert!(output.have_solution);
        assert!(f(root_of(&output)).abs() < 1e-10);
    }

    #[test]
    fn test_find_cos_root() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
        let output = solver.solve(|x: f64| x.cos() - x, |x: f64| -x.sin() - 1.0, 0.5).unwrap();

        assert_relative_eq!(root_of(&output), 0.739_085_133_215_160_6, epsilon = 1e-10);
    }

    #[test]
    fn test_table_rows_record_updates() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
        let output = solver.solve(|x| x * x - 2.0, |x| 2.0 * x, 1.0).unwrap();

        // First update from x0 = 1: 1 - (-1)/2 = 1.5
        let first = &output.table[&1];
        assert_eq!(first.estimate, Estimate::Scalar(1.5));
        assert_relative_eq!(first.error.unwrap(), 0.5);
        assert_relative_eq!(first.residual.unwrap(), 0.25);
        assert!(output.final_error().unwrap() < 1e-12);
    }

    #[test]
    fn test_exact_root_at_start() {
        let solver = NewtonRaphsonSolver::with_defaults();
        let output = solver.solve(|x| x - 3.0, |_| 1.0, 3.0).unwrap();

        assert!(output.have_solution);
        assert_eq!(output.iterations(), 0);
        assert_eq!(root_of(&output), 3.0);
    }

    // ========================================
    // Failure Tests
    // ========================================

    #[test]
    fn test_derivative_near_zero() {
        let solver = NewtonRaphsonSolver::with_defaults();
        // f(x) = x² + 1, f'(0) = 0
        let result = solver.solve(|x| x * x + 1.0, |x| 2.0 * x, 0.0);

        match result {
            Err(SolverError::DerivativeNearZero { x }) => assert_eq!(x, 0.0),
            other => panic!("Expected DerivativeNearZero, got {:?}", other),
        }
    }

    #[test]
    fn test_iteration_cap_reached() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-15, 3));
        // x² + 1 has no real root; iterates wander without converging
        let output = solver.solve(|x| x * x + 1.0, |x| 2.0 * x, 0.5).unwrap();

        assert!(!output.have_solution);
        assert!(output.is_successful);
        assert_eq!(output.iterations(), 3);
        assert!(output.solution.is_some());
        assert!(output.message.is_some());
    }

    // ========================================
    // API Tests
    // ========================================

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(1e-8, 50);
        let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::new(config);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_with_f32() {
        let solver: NewtonRaphsonSolver<f32> = NewtonRaphsonSolver::new(SolverConfig::new(1e-5, 50));
        let output = solver.solve(|x| x * x - 4.0, |x| 2.0 * x, 1.0).unwrap();
        match output.solution {
            Some(Estimate::Scalar(x)) => assert!((x - 2.0).abs() < 1e-4),
            other => panic!("unexpected {:?}", other),
        }
    }
}
