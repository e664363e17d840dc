//! Solver result contract shared by every iterative method.
//!
//! Each solver returns a [`SolverOutput`]: the ordered iteration table, the
//! last estimate, and two flags. `is_successful` is false when the method
//! could not even start (for example a bracket without a sign change);
//! `have_solution` is true only when the tolerance was met.

use num_traits::Float;
use std::collections::BTreeMap;

/// A scalar root or a solution vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Estimate<T: Float> {
    /// Root of a scalar equation
    Scalar(T),
    /// Solution of a linear system
    Vector(Vec<T>),
}

/// One row of an iteration table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRow<T: Float> {
    /// Iterate produced in this step
    pub estimate: Estimate<T>,
    /// `|f(x)|` or `||b - A x||_inf`, when the method evaluates it
    pub residual: Option<T>,
    /// Step error; absent on the first row of methods that need two iterates
    pub error: Option<T>,
}

/// Iteration index (starting at 1) to row.
pub type IterationTable<T> = BTreeMap<usize, IterationRow<T>>;

/// Native output of an iterative solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverOutput<T: Float> {
    /// Ordered iteration history
    pub table: IterationTable<T>,
    /// Last estimate, if the method produced any
    pub solution: Option<Estimate<T>>,
    /// Tolerance met within the iteration cap
    pub have_solution: bool,
    /// False when preconditions of the method failed before iterating
    pub is_successful: bool,
    /// Explanation when no solution was found
    pub message: Option<String>,
}

impl<T: Float> SolverOutput<T> {
    /// Converged run.
    pub fn converged(table: IterationTable<T>, solution: Estimate<T>) -> Self {
        Self {
            table,
            solution: Some(solution),
            have_solution: true,
            is_successful: true,
            message: None,
        }
    }

    /// Run that exhausted the iteration cap; keeps the last estimate.
    pub fn exhausted(table: IterationTable<T>, max_iterations: usize) -> Self {
        let solution = table.values().next_back().map(|row| row.estimate.clone());
        Self {
            table,
            solution,
            have_solution: false,
            is_successful: true,
            message: Some(format!(
                "No solution found within {} iterations",
                max_iterations
            )),
        }
    }

    /// Method could not run on this input.
    pub fn unsuccessful(message: impl Into<String>) -> Self {
        Self {
            table: IterationTable::new(),
            solution: None,
            have_solution: false,
            is_successful: false,
            message: Some(message.into()),
        }
    }

    /// Number of recorded iterations.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.table.len()
    }

    /// Error column of the last row.
    pub fn final_error(&self) -> Option<T> {
        self.table.values().next_back().and_then(|row| row.error)
    }
}

/// Append a row with the next 1-based index.
pub(crate) fn push_row<T: Float>(
    table: &mut IterationTable<T>,
    estimate: Estimate<T>,
    residual: Option<T>,
    error: Option<T>,
) {
    let index = table.len() + 1;
    table.insert(
        index,
        IterationRow {
            estimate,
            residual,
            error,
        },
    );
}
