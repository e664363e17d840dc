//! Core data types shared by every numerical method.
//!
//! This module provides:
//! - `point`: Interpolation points and sorted, duplicate-free point sets
//! - `error`: Structured error types for validation, interpolation, linear algebra and solvers
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Point`], [`PointSet`] from `point`
//! - [`ValidationError`], [`InterpolationError`], [`LinalgError`], [`SolverError`] from `error`

pub mod error;
pub mod point;

// Re-export commonly used types at module level
pub use error::{InterpolationError, LinalgError, SolverError, ValidationError};
pub use point::{Point, PointSet};
