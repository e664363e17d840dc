//! Solver output to [`MethodResult`].

use crate::result::{MethodResult, Solution};
use numerics_core::math::solvers::{Estimate, SolverOutput};

/// Map a solver's native output onto the canonical result.
///
/// The iteration count is the table length, convergence is
/// `have_solution`, and the final error comes from the last row when that
/// row has one.
///
/// # Example
///
/// ```
/// use numerics_compare::normalize;
/// use numerics_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let output = NewtonRaphsonSolver::new(SolverConfig::new(1e-10, 50))
///     .solve(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0)
///     .unwrap();
/// let result = normalize(&output, "Newton-Raphson");
///
/// assert!(result.converged);
/// assert_eq!(result.iteration_count, Some(output.iterations()));
/// ```
pub fn normalize(output: &SolverOutput<f64>, method_name: &str) -> MethodResult {
    let solution = match &output.solution {
        Some(Estimate::Scalar(x)) => Solution::Scalar(*x),
        Some(Estimate::Vector(v)) => Solution::Vector(v.clone()),
        None => Solution::Unavailable,
    };

    MethodResult {
        method_name: method_name.to_string(),
        converged: output.have_solution,
        iteration_count: Some(output.iterations()),
        solution,
        final_error: output.final_error(),
        fault: None,
    }
}
