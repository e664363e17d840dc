//! Solver configuration types.

use num_traits::Float;

/// How the step error between successive iterates is measured.
///
/// `Absolute` counts correct decimals (`|x_k - x_{k-1}|`); `Relative`
/// counts significant figures (`|x_k - x_{k-1}| / |x_k|`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ErrorMeasure {
    /// Absolute step size
    #[default]
    Absolute,
    /// Step size relative to the new iterate
    Relative,
}

impl ErrorMeasure {
    /// Error between a new and a previous scalar iterate.
    #[inline]
    pub fn scalar<T: Float>(&self, new: T, old: T) -> T {
        let step = (new - old).abs();
        match self {
            ErrorMeasure::Absolute => step,
            ErrorMeasure::Relative => relative(step, new.abs()),
        }
    }

    /// Error between two vector iterates, in the infinity norm.
    pub fn vector<T: Float>(&self, new: &[T], old: &[T]) -> T {
        let step = new
            .iter()
            .zip(old)
            .fold(T::zero(), |acc, (&n, &o)| acc.max((n - o).abs()));
        match self {
            ErrorMeasure::Absolute => step,
            ErrorMeasure::Relative => {
                let scale = new.iter().fold(T::zero(), |acc, &n| acc.max(n.abs()));
                relative(step, scale)
            }
        }
    }
}

// A zero scale falls back to the absolute step
#[inline]
fn relative<T: Float>(step: T, scale: T) -> T {
    if scale == T::zero() {
        step
    } else {
        step / scale
    }
}

/// Configuration for iterative solvers.
///
/// Shared by every root finder and linear sweep in this module.
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::{ErrorMeasure, SolverConfig};
///
/// // Significant-figures stopping rule
/// let config = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
///     error_measure: ErrorMeasure::Relative,
/// };
/// assert_eq!(config.error_measure.scalar(2.0, 1.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the step error.
    ///
    /// The solver stops when the error between successive iterates drops
    /// below this value, or when the residual is exactly zero.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// Hitting the cap is reported through `SolverOutput::have_solution`,
    /// not as an error.
    pub max_iterations: usize,

    /// Absolute or relative step error.
    pub error_measure: ErrorMeasure,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-7
    /// - `max_iterations`: 100
    /// - `error_measure`: absolute
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-7).unwrap_or_else(T::epsilon),
            max_iterations: 100,
            error_measure: ErrorMeasure::Absolute,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with an absolute error measure.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use numerics_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            error_measure: ErrorMeasure::Absolute,
        }
    }

    /// Same configuration with a different error measure.
    pub fn with_error_measure(mut self, error_measure: ErrorMeasure) -> Self {
        self.error_measure = error_measure;
        self
    }

    /// Tighter tolerance (1e-14) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap_or_else(T::epsilon),
            max_iterations: 500,
            error_measure: ErrorMeasure::Absolute,
        }
    }

    /// Relaxed tolerance (1e-4) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-4).unwrap_or_else(T::epsilon),
            max_iterations: 50,
            error_measure: ErrorMeasure::Absolute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_presets() {
        let defaults: SolverConfig<f64> = SolverConfig::default();
        assert_relative_eq!(defaults.tolerance, 1e-7);
        assert_eq!(
            (defaults.max_iterations, defaults.error_measure),
            (100, ErrorMeasure::Absolute)
        );

        let precise: SolverConfig<f64> = SolverConfig::high_precision();
        assert_relative_eq!(precise.tolerance, 1e-14);
        assert_eq!(precise.max_iterations, 500);

        let quick: SolverConfig<f64> = SolverConfig::fast();
        assert_relative_eq!(quick.tolerance, 1e-4);
        assert_eq!(quick.max_iterations, 50);
    }

    #[test]
    fn test_new_keeps_absolute_measure_until_changed() {
        let config = SolverConfig::new(1e-9_f64, 42);
        assert_eq!(config.error_measure, ErrorMeasure::Absolute);

        let relative = config.with_error_measure(ErrorMeasure::Relative);
        assert_eq!(relative.error_measure, ErrorMeasure::Relative);
        assert_eq!(relative.max_iterations, 42);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_negative_tolerance_rejected() {
        SolverConfig::new(-1e-6_f64, 10);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_zero_iteration_cap_rejected() {
        SolverConfig::new(1e-6_f64, 0);
    }

    #[test]
    fn test_scalar_error_measures() {
        assert_eq!(ErrorMeasure::Absolute.scalar(2.0, 1.5), 0.5);
        assert_eq!(ErrorMeasure::Relative.scalar(2.0, 1.5), 0.25);
        assert_eq!(ErrorMeasure::Absolute.scalar(-1.0, 1.0), 2.0);
        // Zero iterate falls back to the absolute step
        assert_eq!(ErrorMeasure::Relative.scalar(0.0, 0.5), 0.5);
    }

    #[test]
    fn test_vector_error_measures() {
        let new = [1.0, -4.0];
        let old = [0.5, -3.0];
        assert_eq!(ErrorMeasure::Absolute.vector(&new, &old), 1.0);
        assert_eq!(ErrorMeasure::Relative.vector(&new, &old), 0.25);
        assert_eq!(ErrorMeasure::Relative.vector(&[0.0, 0.0], &[0.1, -0.2]), 0.2);
    }

    #[test]
    fn test_single_precision_measures() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(ErrorMeasure::Relative.scalar(4.0_f32, 3.0), 0.25);
    }
}
