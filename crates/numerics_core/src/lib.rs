//! # numerics_core: Numerical Methods Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! numerics_core is the bottom layer of the workspace, providing:
//! - Point input validation (`validation`)
//! - Point sets and error types (`types`)
//! - Quadratic, cubic and linear splines plus global polynomials (`math::interpolators`)
//! - Dense linear algebra (`math::linalg`)
//! - Iterative root finders and linear-system solvers (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 depends on no other workspace crate, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! Nothing in this crate logs; callers decide what to record.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerics_core::math::interpolators::{Interpolator, QuadraticSplineInterpolator};
//! use numerics_core::validation::PointSetValidator;
//!
//! let points = PointSetValidator::default().validate("0 1 2", "1 3 2").unwrap();
//! let spline = QuadraticSplineInterpolator::new(&points).unwrap();
//!
//! assert_eq!(spline.expressions().len(), 2);
//! # assert!((spline.interpolate(1.0).unwrap() - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for point sets, errors and solver output

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
pub mod validation;
