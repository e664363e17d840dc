//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute paths.

/// Validation entry points and the default point cap.
#[test]
fn test_validation_module_exports() {
    use numerics_core::validation::{PointSetValidator, MAX_POINTS};

    assert_eq!(MAX_POINTS, 8);
    assert_eq!(PointSetValidator::default().max_points(), MAX_POINTS);
}

/// Point and error types via the types module.
#[test]
fn test_types_module_exports() {
    use numerics_core::types::error::ValidationError;
    use numerics_core::types::{
        InterpolationError, LinalgError, Point, PointSet, SolverError,
    };

    let p = Point::new(1.0_f64, 2.0);
    assert_eq!(p.x, 1.0);

    let set = PointSet::from_pairs(&[1.0_f64], &[2.0]).unwrap();
    assert_eq!(set.len(), 1);

    let _ = ValidationError::NonNumericValue { token: "a".into() };
    let _ = InterpolationError::InvalidInput("x".into());
    let _ = LinalgError::Empty;
    let _ = SolverError::ZeroDiagonal { row: 0 };
}

/// Every interpolant behind the common trait.
#[test]
fn test_interpolators_module_exports() {
    use numerics_core::math::interpolators::{
        CubicSplineInterpolator, Interpolator, LinearSplineInterpolator, PolynomialInterpolator,
        PolynomialMethod, QuadraticSplineInterpolator,
    };
    use numerics_core::types::PointSet;

    let points = PointSet::from_pairs(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
    let all: Vec<Box<dyn Interpolator<f64>>> = vec![
        Box::new(QuadraticSplineInterpolator::new(&points).unwrap()),
        Box::new(CubicSplineInterpolator::new(&points).unwrap()),
        Box::new(LinearSplineInterpolator::new(&points).unwrap()),
        Box::new(PolynomialInterpolator::new(&points, PolynomialMethod::Lagrange).unwrap()),
    ];
    for interp in &all {
        assert_eq!(interp.domain(), (0.0, 2.0));
        for p in points.points() {
            assert!((interp.interpolate(p.x).unwrap() - p.y).abs() < 1e-10);
        }
    }
}

/// Dense solver and the iterative solvers.
#[test]
fn test_solvers_module_exports() {
    use numerics_core::math::linalg::{solve, DenseMatrix};
    use numerics_core::math::solvers::{
        BisectionSolver, ErrorMeasure, Estimate, FixedPointSolver, MultipleRootsSolver,
        MultipleRootsVariant, NewtonRaphsonSolver, RegulaFalsiSolver, SecantSolver,
        SolverConfig, StationaryMethod, StationarySolver,
    };

    let a = DenseMatrix::from_rows(&[vec![2.0_f64, 1.0], vec![1.0, 3.0]]).unwrap();
    let x = solve(&a, &[3.0, 5.0]).unwrap();
    assert!((x[0] - 0.8).abs() < 1e-12 && (x[1] - 1.4).abs() < 1e-12);

    let config = SolverConfig::new(1e-10, 200).with_error_measure(ErrorMeasure::Relative);
    let f = |x: f64| x * x - 2.0;
    let outputs = vec![
        BisectionSolver::new(config).solve(f, 0.0, 2.0).unwrap(),
        RegulaFalsiSolver::new(config).solve(f, 0.0, 2.0).unwrap(),
        FixedPointSolver::new(config)
            .solve(f, |x| (x + 2.0 / x) / 2.0, 1.0)
            .unwrap(),
        NewtonRaphsonSolver::new(config).solve(f, |x| 2.0 * x, 1.0).unwrap(),
        SecantSolver::new(config).solve(f, 0.0, 2.0).unwrap(),
        MultipleRootsSolver::new(config, MultipleRootsVariant::KnownMultiplicity(1.0))
            .solve(f, |x| 2.0 * x, |_| 2.0, 1.0)
            .unwrap(),
        MultipleRootsSolver::new(config, MultipleRootsVariant::Deflated)
            .solve(f, |x| 2.0 * x, |_| 2.0, 1.0)
            .unwrap(),
    ];
    for output in outputs {
        assert!(output.have_solution);
        match output.solution {
            Some(Estimate::Scalar(root)) => {
                assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    let lin = StationarySolver::new(StationaryMethod::Sor { omega: 1.2 }, config)
        .solve(&a, &[3.0, 5.0], &[0.0, 0.0])
        .unwrap();
    assert!(lin.have_solution);
}
