//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Errors from parsing and validating raw point input
//! - `InterpolationError`: Errors from building or evaluating interpolants
//! - `LinalgError`: Errors from dense linear solves
//! - `SolverError`: Faults raised inside iterative solvers

use thiserror::Error;

/// Raw point input validation errors.
///
/// Every variant renders a message suitable for showing directly to the
/// person who typed the input. Validation stops at the first failing check.
///
/// # Examples
/// ```
/// use numerics_core::types::ValidationError;
///
/// let err = ValidationError::TooManyPoints { got: 9, max: 8 };
/// assert_eq!(format!("{}", err), "The maximum number of points is 8 (got 9)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// The x or y list is empty, or the two lists differ in length.
    #[error("The x and y lists must be non-empty and of equal length (got {x_len} and {y_len})")]
    EmptyOrMismatchedLengths {
        /// Number of x tokens
        x_len: usize,
        /// Number of y tokens
        y_len: usize,
    },

    /// A token could not be parsed as a real number.
    #[error("All x and y values must be numeric: '{token}' is not a number")]
    NonNumericValue {
        /// The offending token
        token: String,
    },

    /// Two points share the same abscissa.
    #[error("The x values must be unique: {x} appears more than once")]
    DuplicateAbscissa {
        /// The repeated x value
        x: f64,
    },

    /// More points than the configured maximum.
    #[error("The maximum number of points is {max} (got {got})")]
    TooManyPoints {
        /// Number of points provided
        got: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Interpolation-related errors.
///
/// # Variants
/// - `InsufficientData`: Not enough data points for the chosen interpolant
/// - `OutOfBounds`: Query point outside the interpolation domain
/// - `SingularSystem`: The coefficient system could not be solved
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use numerics_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// The coefficient system is numerically singular.
    #[error("Computation failed: {0}")]
    SingularSystem(#[from] LinalgError),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Dense linear algebra errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinalgError {
    /// No usable pivot was found in the given column.
    #[error("Singular matrix: no pivot in column {column}")]
    Singular {
        /// Column where elimination broke down
        column: usize,
    },

    /// Matrix and vector sizes do not agree.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// The matrix has no rows.
    #[error("Empty system")]
    Empty,
}

/// Faults raised inside an iterative solver.
///
/// Non-convergence within the iteration cap is *not* a fault: it is reported
/// through `SolverOutput::have_solution`. These variants cover the cases
/// where the iteration itself cannot continue.
///
/// # Examples
/// ```
/// use numerics_core::types::SolverError;
///
/// let err = SolverError::DerivativeNearZero { x: 1.5 };
/// assert!(format!("{}", err).contains("x = 1.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Derivative near zero (division by zero risk in Newton-type updates).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Zero on the main diagonal of an iterative linear system.
    #[error("Zero diagonal entry in row {row}")]
    ZeroDiagonal {
        /// Row with the zero pivot
        row: usize,
    },

    /// Matrix, right-hand side and initial guess disagree in size.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Invalid solver parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
