//! Numerical methods.
//!
//! - `interpolators`: Polynomial and piecewise interpolants over a [`PointSet`](crate::types::PointSet)
//! - `linalg`: Dense matrices and Gaussian elimination
//! - `solvers`: Iterative root finders and linear-system sweeps

pub mod interpolators;
pub mod linalg;
pub mod solvers;
