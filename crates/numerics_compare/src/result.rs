//! Canonical per-method outcome.

use serde::Serialize;
use std::fmt;

/// Solution carried by a [`MethodResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Solution {
    /// Root of a scalar equation
    Scalar(f64),
    /// Solution vector of a linear system
    Vector(Vec<f64>),
    /// The method produced no estimate
    Unavailable,
}

impl Solution {
    /// Solution promoted to a vector; `None` when unavailable or empty.
    pub fn as_vector(&self) -> Option<Vec<f64>> {
        match self {
            Solution::Scalar(x) => Some(vec![*x]),
            Solution::Vector(v) if !v.is_empty() => Some(v.clone()),
            _ => None,
        }
    }

    /// Every component finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Solution::Scalar(x) => x.is_finite(),
            Solution::Vector(v) => v.iter().all(|x| x.is_finite()),
            Solution::Unavailable => false,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Scalar(x) => write!(f, "{}", x),
            Solution::Vector(v) => {
                let parts: Vec<String> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Solution::Unavailable => write!(f, "-"),
        }
    }
}

/// Outcome of one method on one problem.
///
/// Absent optional fields on a completed run mean "not applicable"; a run
/// that faulted instead carries `fault` and leaves every other field empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    /// Display name of the method
    pub method_name: String,
    /// Tolerance met within the iteration cap
    pub converged: bool,
    /// Rows in the iteration table
    pub iteration_count: Option<usize>,
    /// Last estimate
    pub solution: Solution,
    /// Error column of the last iteration row
    pub final_error: Option<f64>,
    /// Reason the method failed to compute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl MethodResult {
    /// Result for a method that returned an error or panicked.
    pub fn faulted(method_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            converged: false,
            iteration_count: None,
            solution: Solution::Unavailable,
            final_error: None,
            fault: Some(reason.into()),
        }
    }

    /// True when the method failed to compute.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Eligible for ranking: converged with a non-empty solution.
    pub fn is_candidate(&self) -> bool {
        self.converged && self.solution.as_vector().is_some()
    }
}
