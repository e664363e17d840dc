//! Stationary iterative methods for `A x = b`: Jacobi, Gauss-Seidel and SOR.

use super::output::{push_row, Estimate, IterationTable, SolverOutput};
use super::SolverConfig;
use crate::math::linalg::DenseMatrix;
use crate::types::SolverError;
use num_traits::Float;

/// Sweep used by [`StationarySolver`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationaryMethod<T: Float> {
    /// Every component updated from the previous iterate
    Jacobi,
    /// Components updated in place, left to right
    GaussSeidel,
    /// Gauss-Seidel blended with the previous iterate by `omega` in (0, 2)
    Sor {
        /// Relaxation factor
        omega: T,
    },
}

impl<T: Float> StationaryMethod<T> {
    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            StationaryMethod::Jacobi => "Jacobi",
            StationaryMethod::GaussSeidel => "Gauss-Seidel",
            StationaryMethod::Sor { .. } => "SOR",
        }
    }
}

/// Iterative solver for square linear systems.
///
/// Each row of the iteration table holds the new iterate, the residual
/// `||b - A x||_inf` and the step error in the configured measure.
///
/// # Example
///
/// ```
/// use numerics_core::math::linalg::DenseMatrix;
/// use numerics_core::math::solvers::{SolverConfig, StationaryMethod, StationarySolver};
///
/// let a = DenseMatrix::from_rows(&[vec![4.0, 1.0], vec![2.0, 5.0]]).unwrap();
/// let b = vec![1.0, 2.0];
///
/// let solver = StationarySolver::new(StationaryMethod::GaussSeidel, SolverConfig::new(1e-10, 100));
/// let output = solver.solve(&a, &b, &[0.0, 0.0]).unwrap();
/// assert!(output.have_solution);
/// ```
#[derive(Debug, Clone)]
pub struct StationarySolver<T: Float> {
    method: StationaryMethod<T>,
    config: SolverConfig<T>,
}

impl<T: Float> StationarySolver<T> {
    /// Create a solver for the given sweep.
    pub fn new(method: StationaryMethod<T>, config: SolverConfig<T>) -> Self {
        Self { method, config }
    }

    /// Sweep in use.
    pub fn method(&self) -> StationaryMethod<T> {
        self.method
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Iterate from `x0`.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::DimensionMismatch)` - `A` not square, or `b`/`x0` of the wrong length
    /// * `Err(SolverError::ZeroDiagonal)` - Zero on the diagonal of `A`
    /// * `Err(SolverError::InvalidInput)` - SOR factor outside (0, 2)
    /// * `Err(SolverError::NumericalInstability)` - Iterates diverged to non-finite values
    pub fn solve(
        &self,
        a: &DenseMatrix<T>,
        b: &[T],
        x0: &[T],
    ) -> Result<SolverOutput<T>, SolverError> {
        let n = a.n_rows();
        if !a.is_square() {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: a.n_cols(),
            });
        }
        for len in [b.len(), x0.len()] {
            if len != n {
                return Err(SolverError::DimensionMismatch { expected: n, got: len });
            }
        }
        if let Some(row) = (0..n).find(|&i| a[(i, i)] == T::zero()) {
            return Err(SolverError::ZeroDiagonal { row });
        }
        if let StationaryMethod::Sor { omega } = self.method {
            let two = T::one() + T::one();
            if !(omega > T::zero() && omega < two) {
                return Err(SolverError::InvalidInput(format!(
                    "relaxation factor must lie in (0, 2), got {}",
                    omega.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        let mut table = IterationTable::new();
        let mut x = x0.to_vec();

        for _ in 0..self.config.max_iterations {
            let next = self.sweep(a, b, &x);
            if next.iter().any(|v| !v.is_finite()) {
                return Err(SolverError::NumericalInstability(format!(
                    "{} iteration diverged",
                    self.method.name()
                )));
            }

            let error = self.config.error_measure.vector(&next, &x);
            let residual = residual_inf_norm(a, b, &next);
            push_row(
                &mut table,
                Estimate::Vector(next.clone()),
                Some(residual),
                Some(error),
            );
            x = next;

            if residual == T::zero() || error < self.config.tolerance {
                return Ok(SolverOutput::converged(table, Estimate::Vector(x)));
            }
        }

        Ok(SolverOutput::exhausted(table, self.config.max_iterations))
    }

    fn sweep(&self, a: &DenseMatrix<T>, b: &[T], x: &[T]) -> Vec<T> {
        let n = x.len();
        match self.method {
            StationaryMethod::Jacobi => (0..n)
                .map(|i| {
                    let off = (0..n)
                        .filter(|&j| j != i)
                        .fold(T::zero(), |acc, j| acc + a[(i, j)] * x[j]);
                    (b[i] - off) / a[(i, i)]
                })
                .collect(),
            StationaryMethod::GaussSeidel => relaxed_sweep(a, b, x, T::one()),
            StationaryMethod::Sor { omega } => relaxed_sweep(a, b, x, omega),
        }
    }
}

// Gauss-Seidel is SOR with omega = 1
fn relaxed_sweep<T: Float>(a: &DenseMatrix<T>, b: &[T], x: &[T], omega: T) -> Vec<T> {
    let n = x.len();
    let mut next = x.to_vec();
    for i in 0..n {
        let off = (0..n)
            .filter(|&j| j != i)
            .fold(T::zero(), |acc, j| acc + a[(i, j)] * next[j]);
        let gs = (b[i] - off) / a[(i, i)];
        next[i] = (T::one() - omega) * x[i] + omega * gs;
    }
    next
}

fn residual_inf_norm<T: Float>(a: &DenseMatrix<T>, b: &[T], x: &[T]) -> T {
    b.iter().enumerate().fold(T::zero(), |acc, (i, &bi)| {
        let ax = a
            .row(i)
            .iter()
            .zip(x)
            .fold(T::zero(), |s, (&aij, &xj)| s + aij * xj);
        acc.max((bi - ax).abs())
    })
}
