//! Problem definitions and the standard method catalogues.
//!
//! Root-finding methods, in report order: Bisection, Regula Falsi, Fixed
//! Point, Newton-Raphson, Secant, Multiple Roots #1, Multiple Roots #2.
//! Linear-system methods: Jacobi, Gauss-Seidel, SOR.

use crate::policy::ComparisonKind;
use crate::registry::{MethodCollaborator, MethodRegistry};
use numerics_core::math::linalg::DenseMatrix;
use numerics_core::math::solvers::{
    BisectionSolver, FixedPointSolver, MultipleRootsSolver, MultipleRootsVariant,
    NewtonRaphsonSolver, RegulaFalsiSolver, SecantSolver, SolverConfig, SolverOutput,
    StationaryMethod, StationarySolver,
};
use numerics_core::types::SolverError;

/// Boxed real function.
pub type ScalarFn = Box<dyn Fn(f64) -> f64>;

/// Scalar equation `f(x) = 0` with everything the catalogue methods need.
///
/// `f'`, `f''` and `g` are optional; a method whose input is missing
/// faults with [`SolverError::InvalidInput`].
pub struct RootProblem {
    /// Function whose root is sought
    pub f: ScalarFn,
    /// First derivative
    pub f_prime: Option<ScalarFn>,
    /// Second derivative
    pub f_second: Option<ScalarFn>,
    /// Fixed-point iteration function
    pub g: Option<ScalarFn>,
    /// Left end of the bracket, also the first secant point
    pub a: f64,
    /// Right end of the bracket, also the second secant point
    pub b: f64,
    /// Starting point of the open methods
    pub x0: f64,
    /// Known root multiplicity for Multiple Roots #1
    pub multiplicity: f64,
    /// Tolerance, iteration cap and error measure
    pub config: SolverConfig<f64>,
}

impl RootProblem {
    /// Problem with only `f`, multiplicity 1 and the default solver config.
    pub fn new<F>(f: F, a: f64, b: f64, x0: f64) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        Self {
            f: Box::new(f),
            f_prime: None,
            f_second: None,
            g: None,
            a,
            b,
            x0,
            multiplicity: 1.0,
            config: SolverConfig::default(),
        }
    }

    /// Set `f'`.
    pub fn with_derivative<F>(mut self, f_prime: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.f_prime = Some(Box::new(f_prime));
        self
    }

    /// Set `f''`.
    pub fn with_second_derivative<F>(mut self, f_second: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.f_second = Some(Box::new(f_second));
        self
    }

    /// Set the fixed-point function `g`.
    pub fn with_iteration_function<F>(mut self, g: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.g = Some(Box::new(g));
        self
    }

    /// Set the root multiplicity.
    pub fn with_multiplicity(mut self, multiplicity: f64) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Set the solver configuration.
    pub fn with_config(mut self, config: SolverConfig<f64>) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for RootProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootProblem")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("x0", &self.x0)
            .field("multiplicity", &self.multiplicity)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn require<'a>(func: &'a Option<ScalarFn>, what: &str, method: &str) -> Result<&'a ScalarFn, SolverError> {
    func.as_ref()
        .ok_or_else(|| SolverError::InvalidInput(format!("{} requires {}", method, what)))
}

/// Linear system `A x = b` with a starting guess.
#[derive(Debug, Clone)]
pub struct LinearProblem {
    /// Square system matrix
    pub a: DenseMatrix<f64>,
    /// Right-hand side
    pub b: Vec<f64>,
    /// Initial guess
    pub x0: Vec<f64>,
    /// Relaxation factor for SOR
    pub omega: f64,
    /// Tolerance, iteration cap and error measure
    pub config: SolverConfig<f64>,
}

impl LinearProblem {
    /// Problem with `omega = 1.2` and the default solver config.
    pub fn new(a: DenseMatrix<f64>, b: Vec<f64>, x0: Vec<f64>) -> Self {
        Self {
            a,
            b,
            x0,
            omega: 1.2,
            config: SolverConfig::default(),
        }
    }

    /// Set the SOR relaxation factor.
    pub fn with_omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    /// Set the solver configuration.
    pub fn with_config(mut self, config: SolverConfig<f64>) -> Self {
        self.config = config;
        self
    }
}

/// Interval halving.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bisection;

impl MethodCollaborator<RootProblem> for Bisection {
    fn name(&self) -> &str {
        "Bisection"
    }

    fn solve(&self, p: &RootProblem) -> Result<SolverOutput<f64>, SolverError> {
        BisectionSolver::new(p.config).solve(&p.f, p.a, p.b)
    }
}

/// False position.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegulaFalsi;

impl MethodCollaborator<RootProblem> for RegulaFalsi {
    fn name(&self) -> &str {
        "Regula Falsi"
    }

    fn solve(&self, p: &RootProblem) -> Result<SolverOutput<f64>, SolverError> {
        RegulaFalsiSolver::new(p.config).solve(&p.f, p.a, p.b)
    }
}

/// `x = g(x)` iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPoint;

impl MethodCollaborator<RootProblem> for FixedPoint {
    fn name(&self) -> &str {
        "Fixed Point"
    }

    fn solve(&self, p: &RootProblem) -> Result<SolverOutput<f64>, SolverError> {
        let g = require(&p.g, "g", self.name())?;
        FixedPointSolver::new(p.config).solve(&p.f, g, p.x0)
    }
}

/// Newton's method.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonRaphson;

impl MethodCollaborator<RootProblem> for NewtonRaphson {
    fn name(&self) -> &str {
        "Newton-Raphson"
    }

    fn solve(&self, p: &RootProblem) -> Result<SolverOutput<f64>, SolverError> {
        let df = require(&p.f_prime, "f'", self.name())?;
        NewtonRaphsonSolver::new(p.config).solve(&p.f, df, p.x0)
    }
}

/// Secant method from `a` and `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secant;

impl MethodCollaborator<RootProblem> for Secant {
    fn name(&self) -> &str {
        "Secant"
    }

    fn solve(&self, p: &RootProblem) -> Result<SolverOutput<f64>, SolverError> {
        SecantSolver::new(p.config).solve(&p.f, p.a, p.b)
    }
}

/// Modified Newton with known multiplicity.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleRoots1;

impl MethodCollaborator<RootProblem> for MultipleRoots1 {
    fn name(&self) -> &str {
        "Multiple Roots #1"
    }

    fn solve(&self, p: &RootProblem) -> Result<SolverOutput<f64>, SolverError> {
        let df = require(&p.f_prime, "f'", self.name())?;
        MultipleRootsSolver::new(
            p.config,
            MultipleRootsVariant::KnownMultiplicity(p.multiplicity),
        )
        .solve(&p.f, df, |_| 0.0, p.x0)
    }
}

/// Newton on `f / f'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleRoots2;

impl MethodCollaborator<RootProblem> for MultipleRoots2 {
    fn name(&self) -> &str {
        "Multiple Roots #2"
    }

    fn solve(&self, p: &RootProblem) -> Result<SolverOutput<f64>, SolverError> {
        let df = require(&p.f_prime, "f'", self.name())?;
        let d2f = require(&p.f_second, "f''", self.name())?;
        MultipleRootsSolver::new(p.config, MultipleRootsVariant::Deflated).solve(&p.f, df, d2f, p.x0)
    }
}

/// Jacobi, Gauss-Seidel or SOR sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearSweep {
    /// Jacobi
    Jacobi,
    /// Gauss-Seidel
    GaussSeidel,
    /// SOR with the problem's relaxation factor
    Sor,
}

impl MethodCollaborator<LinearProblem> for LinearSweep {
    fn name(&self) -> &str {
        match self {
            LinearSweep::Jacobi => "Jacobi",
            LinearSweep::GaussSeidel => "Gauss-Seidel",
            LinearSweep::Sor => "SOR",
        }
    }

    fn solve(&self, p: &LinearProblem) -> Result<SolverOutput<f64>, SolverError> {
        let method = match self {
            LinearSweep::Jacobi => StationaryMethod::Jacobi,
            LinearSweep::GaussSeidel => StationaryMethod::GaussSeidel,
            LinearSweep::Sor => StationaryMethod::Sor { omega: p.omega },
        };
        StationarySolver::new(method, p.config).solve(&p.a, &p.b, &p.x0)
    }
}

/// The seven root-finding methods.
pub fn root_finding_catalogue() -> MethodRegistry<RootProblem> {
    MethodRegistry::new(ComparisonKind::RootFinding)
        .with(Bisection)
        .with(RegulaFalsi)
        .with(FixedPoint)
        .with(NewtonRaphson)
        .with(Secant)
        .with(MultipleRoots1)
        .with(MultipleRoots2)
}

/// Jacobi, Gauss-Seidel and SOR.
pub fn linear_system_catalogue() -> MethodRegistry<LinearProblem> {
    MethodRegistry::new(ComparisonKind::LinearSystem)
        .with(LinearSweep::Jacobi)
        .with(LinearSweep::GaussSeidel)
        .with(LinearSweep::Sor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::compare;
    use crate::result::Solution;
    use approx::assert_abs_diff_eq;

    fn sqrt_two() -> RootProblem {
        RootProblem::new(|x| x * x - 2.0, 1.0, 2.0, 1.5)
            .with_derivative(|x| 2.0 * x)
            .with_second_derivative(|_| 2.0)
            .with_iteration_function(|x| (x + 2.0 / x) / 2.0)
            .with_config(SolverConfig::new(1e-10, 200))
    }

    #[test]
    fn test_root_catalogue_order() {
        assert_eq!(
            root_finding_catalogue().names(),
            vec![
                "Bisection",
                "Regula Falsi",
                "Fixed Point",
                "Newton-Raphson",
                "Secant",
                "Multiple Roots #1",
                "Multiple Roots #2"
            ]
        );
        assert_eq!(
            linear_system_catalogue().names(),
            vec!["Jacobi", "Gauss-Seidel", "SOR"]
        );
    }

    #[test]
    fn test_all_root_methods_agree() {
        let report = compare(&root_finding_catalogue(), &sqrt_two(), None);

        for entry in &report.entries {
            assert!(entry.result.converged, "{} failed", entry.result.method_name);
            match entry.result.solution {
                Solution::Scalar(x) => assert_abs_diff_eq!(x, std::f64::consts::SQRT_2, epsilon = 1e-8),
                ref other => panic!("unexpected {:?}", other),
            }
        }
        let best = report.best().unwrap();
        assert_ne!(best.result.method_name, "Bisection");
    }

    #[test]
    fn test_missing_derivative_faults_only_dependent_methods() {
        let problem = RootProblem::new(|x| x * x - 2.0, 1.0, 2.0, 1.5);
        let report = compare(&root_finding_catalogue(), &problem, None);

        let faulted: Vec<&str> = report
            .entries
            .iter()
            .filter(|e| e.result.is_faulted())
            .map(|e| e.result.method_name.as_str())
            .collect();
        assert_eq!(
            faulted,
            vec!["Fixed Point", "Newton-Raphson", "Multiple Roots #1", "Multiple Roots #2"]
        );
        assert!(report.best().is_some());
    }

    #[test]
    fn test_linear_catalogue() {
        let a = DenseMatrix::from_rows(&[
            vec![4.0, -1.0, 0.0],
            vec![-1.0, 4.0, -1.0],
            vec![0.0, -1.0, 4.0],
        ])
        .unwrap();
        let problem = LinearProblem::new(a, vec![15.0, 10.0, 10.0], vec![0.0; 3])
            .with_omega(1.1)
            .with_config(SolverConfig::new(1e-10, 200));

        let report = compare(&linear_system_catalogue(), &problem, None);
        assert_eq!(report.kind, ComparisonKind::LinearSystem);
        assert!(report.entries.iter().all(|e| e.result.converged));
        assert!(report.entries.iter().all(|e| e.result.final_error.is_some()));

        // Exact solution (275/56, 65/14, 205/56)
        let best = report.best().unwrap();
        let x = best.result.solution.as_vector().unwrap();
        assert_abs_diff_eq!(x[0], 275.0 / 56.0, epsilon = 1e-8);
        assert_abs_diff_eq!(x[1], 65.0 / 14.0, epsilon = 1e-8);
        assert_abs_diff_eq!(x[2], 205.0 / 56.0, epsilon = 1e-8);
    }

    #[test]
    fn test_bad_omega_faults_sor_only() {
        let a = DenseMatrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
        let problem = LinearProblem::new(a, vec![3.0, 3.0], vec![0.0, 0.0]).with_omega(2.5);
        let report = compare(&linear_system_catalogue(), &problem, None);

        assert!(!report.entries[0].result.is_faulted());
        assert!(!report.entries[1].result.is_faulted());
        assert!(report.entries[2].result.is_faulted());
    }
}
