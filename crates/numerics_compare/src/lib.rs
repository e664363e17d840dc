//! # numerics_compare (L2: Comparison)
//!
//! Runs several numerical methods on one problem and reports which one to
//! trust.
//!
//! This crate provides:
//! - Result normalisation from the solver output contract
//! - Selection policies and the closest-pair best-method selector
//! - A registry of method collaborators with per-method fault isolation
//! - Standard root-finding and linear-system catalogues
//! - Quadratic spline building with plot notification
//! - The interpolation report over every interpolation method
//! - CSV and JSON emitters
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          numerics_compare (L2)          │
//! ├─────────────────────────────────────────┤
//! │  catalogue/  - problems, method lists   │
//! │  registry/   - isolation, compare()     │
//! │  normalize/  - output -> MethodResult   │
//! │  selector/   - closest pair + policy    │
//! │  report/     - CSV, JSON                │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           numerics_core (L1)            │
//! │  validation, splines, solvers           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use numerics_compare::{comparison_csv, compare, linear_system_catalogue, LinearProblem};
//! use numerics_core::math::linalg::DenseMatrix;
//!
//! let a = DenseMatrix::from_rows(&[vec![4.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let problem = LinearProblem::new(a, vec![1.0, 2.0], vec![0.0, 0.0]);
//!
//! let report = compare(&linear_system_catalogue(), &problem, None);
//! let csv = comparison_csv(&report).unwrap();
//! assert!(csv.starts_with("Method,Iterations,Solution,Error,Converged?,Best?"));
//! ```

#![deny(missing_docs)]

pub mod catalogue;
pub mod error;
pub mod interpolation;
pub mod normalize;
pub mod plot;
pub mod policy;
pub mod registry;
pub mod report;
pub mod result;
pub mod selector;
pub mod spline;

pub use catalogue::{
    linear_system_catalogue, root_finding_catalogue, LinearProblem, LinearSweep, RootProblem,
    ScalarFn,
};
pub use error::ReportError;
pub use interpolation::{
    interpolation_report, InterpolationMethod, InterpolationOutcome, InterpolationReport,
};
pub use normalize::normalize;
pub use plot::{CsvSampleSink, NoopPlotSink, PlotSink};
pub use policy::{ComparisonKind, SelectionPolicy, ERROR_TIE_TOLERANCE};
pub use registry::{compare, run_isolated, ComparisonReport, MethodCollaborator, MethodRegistry};
pub use report::{
    comparison_csv, comparison_header, interpolation_csv, write_comparison_csv,
    write_interpolation_csv, write_json,
};
pub use result::{MethodResult, Solution};
pub use selector::{rank, select_best, RankedResult};
pub use spline::{build_spline, SplineReport};
