//! Dense linear algebra.
//!
//! Small row-major matrices and an exact direct solver, sized for the
//! coefficient systems built by the interpolation methods (at most a few
//! dozen unknowns). Generic over `T: num_traits::Float`.

mod dense;

pub use dense::{solve, DenseMatrix};
