//! Newton variants that keep quadratic convergence on multiple roots.

use super::newton_raphson::{derivative_epsilon, iterate_open};
use super::output::SolverOutput;
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Which multiple-root correction to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MultipleRootsVariant<T: Float> {
    /// `x - m f / f'` with known multiplicity `m`
    KnownMultiplicity(T),
    /// Newton on `u = f / f'`: `x - f f' / (f'^2 - f f'')`
    Deflated,
}

/// Root finder for roots of multiplicity greater than one.
///
/// # Example
///
/// ```
/// use numerics_core::math::solvers::{MultipleRootsSolver, MultipleRootsVariant, SolverConfig};
///
/// // (x - 1)^2 has a double root at 1
/// let f = |x: f64| (x - 1.0) * (x - 1.0);
/// let df = |x: f64| 2.0 * (x - 1.0);
/// let d2f = |_: f64| 2.0;
///
/// let solver = MultipleRootsSolver::new(
///     SolverConfig::new(1e-10, 100),
///     MultipleRootsVariant::KnownMultiplicity(2.0),
/// );
/// let output = solver.solve(f, df, d2f, 3.0).unwrap();
/// assert!(output.have_solution);
/// ```
#[derive(Debug, Clone)]
pub struct MultipleRootsSolver<T: Float> {
    config: SolverConfig<T>,
    variant: MultipleRootsVariant<T>,
}

impl<T: Float> MultipleRootsSolver<T> {
    /// Create a solver for the given correction.
    pub fn new(config: SolverConfig<T>, variant: MultipleRootsVariant<T>) -> Self {
        Self { config, variant }
    }

    /// Iterate from `x0`. `f_second` is only evaluated by the deflated variant.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::InvalidInput)` - Multiplicity not positive
    /// * `Err(SolverError::DerivativeNearZero)` - Update denominator vanished
    pub fn solve<F, G, H>(
        &self,
        f: F,
        f_prime: G,
        f_second: H,
        x0: T,
    ) -> Result<SolverOutput<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
        H: Fn(T) -> T,
    {
        let epsilon = derivative_epsilon::<T>();
        let near_zero = |x: T| SolverError::DerivativeNearZero {
            x: x.to_f64().unwrap_or(f64::NAN),
        };

        match self.variant {
            MultipleRootsVariant::KnownMultiplicity(m) => {
                if m.is_nan() || m <= T::zero() {
                    return Err(SolverError::InvalidInput(
                        "multiplicity must be positive".to_string(),
                    ));
                }
                iterate_open(&self.config, &f, x0, |x| {
                    let d = f_prime(x);
                    if d.abs() < epsilon {
                        return Err(near_zero(x));
                    }
                    Ok(x - m * f(x) / d)
                })
            }
            MultipleRootsVariant::Deflated => iterate_open(&self.config, &f, x0, |x| {
                let (fx, d) = (f(x), f_prime(x));
                let denom = d * d - fx * f_second(x);
                if denom.abs() < epsilon {
                    return Err(near_zero(x));
                }
                Ok(x - fx * d / denom)
            }),
        }
    }

    /// Correction in use.
    pub fn variant(&self) -> MultipleRootsVariant<T> {
        self.variant
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
