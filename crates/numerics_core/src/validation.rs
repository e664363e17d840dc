//! Raw text input validation for interpolation methods.
//!
//! Turns the two whitespace-delimited strings typed by a user into a
//! [`PointSet`]. Checks run in a fixed order and stop at the first failure:
//!
//! 1. both lists non-empty and of equal length
//! 2. every token numeric
//! 3. abscissas pairwise distinct
//! 4. point count within the configured maximum
//!
//! # Example
//!
//! ```
//! use numerics_core::validation::PointSetValidator;
//!
//! let validator = PointSetValidator::default();
//! let points = validator.validate("2 0 1", "2 1 3").unwrap();
//! assert_eq!(points.xs(), vec![0.0, 1.0, 2.0]);
//!
//! assert!(validator.validate("0 1", "1").is_err());
//! ```

use crate::types::{PointSet, ValidationError};

/// Default maximum number of points accepted by interpolation methods.
pub const MAX_POINTS: usize = 8;

/// Validator for whitespace-delimited `x` / `y` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointSetValidator {
    max_points: usize,
}

impl Default for PointSetValidator {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
        }
    }
}

impl PointSetValidator {
    /// Create a validator with a custom point limit.
    ///
    /// # Panics
    ///
    /// Panics if `max_points == 0`.
    pub fn new(max_points: usize) -> Self {
        assert!(max_points > 0, "max_points must be > 0");
        Self { max_points }
    }

    /// Configured point limit.
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Parse and validate raw input into a sorted point set.
    pub fn validate(&self, x_raw: &str, y_raw: &str) -> Result<PointSet<f64>, ValidationError> {
        let x_tokens: Vec<&str> = x_raw.split_whitespace().collect();
        let y_tokens: Vec<&str> = y_raw.split_whitespace().collect();

        if x_tokens.is_empty() || y_tokens.is_empty() || x_tokens.len() != y_tokens.len() {
            return Err(ValidationError::EmptyOrMismatchedLengths {
                x_len: x_tokens.len(),
                y_len: y_tokens.len(),
            });
        }

        let xs = parse_tokens(&x_tokens)?;
        let ys = parse_tokens(&y_tokens)?;

        let points = PointSet::from_pairs(&xs, &ys)?;

        if points.len() > self.max_points {
            return Err(ValidationError::TooManyPoints {
                got: points.len(),
                max: self.max_points,
            });
        }

        Ok(points)
    }
}

fn parse_tokens(tokens: &[&str]) -> Result<Vec<f64>, ValidationError> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ValidationError::NonNumericValue {
                    token: (*token).to_string(),
                })
        })
        .collect()
}
