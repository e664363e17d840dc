//! Fixed-point iteration `x_{k+1} = g(x_k)`.

use super::newton_raphson::iterate_open;
use super::output::SolverOutput;
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Fixed-point solver for `f(x) = 0` rewritten as `x = g(x)`.
///
/// `f` is only evaluated to fill the residual column and to detect an
/// exact root; the iteration itself uses `g`.
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::{Estimate, FixedPointSolver, SolverConfig};
///
/// let solver = FixedPointSolver::new(SolverConfig::new(1e-10, 200));
/// let output = solver
///     .solve(|x: f64| x.cos() - x, |x: f64| x.cos(), 0.5)
///     .unwrap();
/// assert!(output.have_solution);
/// ```
#[derive(Debug, Clone)]
pub struct FixedPointSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> FixedPointSolver<T> {
    /// Create a new fixed-point solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Iterate `g` from `x0`.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::NumericalInstability)` - `g` diverged to a non-finite value
    pub fn solve<F, G>(&self, f: F, g: G, x0: T) -> Result<SolverOutput<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        iterate_open(&self.config, f, x0, |x| Ok(g(x)))
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
