//! Iterative solvers for scalar equations and linear systems.
//!
//! Every solver here produces the same result contract, [`SolverOutput`]:
//! an ordered iteration table keyed from 1, the last estimate, and the
//! `have_solution` / `is_successful` flags. Conditions that stop a method
//! cold (a vanishing derivative, a zero diagonal, mismatched dimensions)
//! are returned as [`SolverError`](crate::types::SolverError) instead.
//!
//! ## Available Solvers
//!
//! ### Root-Finding
//!
//! - [`BisectionSolver`]: Interval halving on a sign-changing bracket
//! - [`RegulaFalsiSolver`]: False position on a sign-changing bracket
//! - [`FixedPointSolver`]: `x = g(x)` iteration
//! - [`NewtonRaphsonSolver`]: Quadratic convergence using the derivative
//! - [`SecantSolver`]: Derivative-free two-point update
//! - [`MultipleRootsSolver`]: Newton variants for roots of multiplicity > 1
//!
//! ### Linear Systems
//!
//! - [`StationarySolver`]: Jacobi, Gauss-Seidel and SOR sweeps
//!
//! ## Configuration
//!
//! All solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-7)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `error_measure`: [`ErrorMeasure::Absolute`] or [`ErrorMeasure::Relative`]
//!
//! ## Examples
//!
//! ```
//! use numerics_core::math::solvers::{NewtonRaphsonSolver, SecantSolver, SolverConfig};
//!
//! let config = SolverConfig::new(1e-12, 100);
//! let f = |x: f64| x * x - 2.0;
//!
//! let newton = NewtonRaphsonSolver::new(config).solve(f, |x| 2.0 * x, 1.0).unwrap();
//! let secant = SecantSolver::new(config).solve(f, 1.0, 2.0).unwrap();
//!
//! assert!(newton.have_solution && secant.have_solution);
//! assert!(newton.iterations() <= secant.iterations());
//! ```

mod bracketing;
mod config;
mod fixed_point;
mod multiple_roots;
mod newton_raphson;
mod output;
mod secant;
mod stationary;

// Re-export public types at module level
pub use bracketing::{BisectionSolver, RegulaFalsiSolver};
pub use config::{ErrorMeasure, SolverConfig};
pub use fixed_point::FixedPointSolver;
pub use multiple_roots::{MultipleRootsSolver, MultipleRootsVariant};
pub use newton_raphson::NewtonRaphsonSolver;
pub use output::{Estimate, IterationRow, IterationTable, SolverOutput};
pub use secant::SecantSolver;
pub use stationary::{StationaryMethod, StationarySolver};
