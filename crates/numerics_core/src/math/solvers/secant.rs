//! Secant method.

use super::output::{push_row, Estimate, IterationTable, SolverOutput};
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Secant root finder started from two points.
///
/// `x_{k+1} = x_k - f(x_k) (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))`
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> SecantSolver<T> {
    /// Create a new secant solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Iterate from `x0` and `x1`.
    ///
    /// Rows start with the first computed point `x2`.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::NumericalInstability)` - `f(x_k) == f(x_{k-1})` or non-finite iterate
    pub fn solve<F>(&self, f: F, x0: T, x1: T) -> Result<SolverOutput<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut table = IterationTable::new();
        let (mut prev, mut curr) = (x0, x1);
        let (mut f_prev, mut f_curr) = (f(prev), f(curr));

        if f_prev == T::zero() {
            return Ok(SolverOutput::converged(table, Estimate::Scalar(prev)));
        }
        if f_curr == T::zero() {
            return Ok(SolverOutput::converged(table, Estimate::Scalar(curr)));
        }

        for _ in 0..self.config.max_iterations {
            let denom = f_curr - f_prev;
            if denom == T::zero() {
                return Err(SolverError::NumericalInstability(
                    "secant denominator vanished".to_string(),
                ));
            }
            let next = curr - f_curr * (curr - prev) / denom;
            if !next.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "secant iteration produced a non-finite value".to_string(),
                ));
            }

            let f_next = f(next);
            let error = self.config.error_measure.scalar(next, curr);
            push_row(
                &mut table,
                Estimate::Scalar(next),
                Some(f_next.abs()),
                Some(error),
            );

            prev = curr;
            f_prev = f_curr;
            curr = next;
            f_curr = f_next;

            if f_curr == T::zero() || error < self.config.tolerance {
                return Ok(SolverOutput::converged(table, Estimate::Scalar(curr)));
            }
        }

        Ok(SolverOutput::exhausted(table, self.config.max_iterations))
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
