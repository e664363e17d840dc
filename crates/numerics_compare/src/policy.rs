//! Tie-break policies and comparison kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors within this distance of the minimum count as equal.
pub const ERROR_TIE_TOLERANCE: f64 = 1e-12;

/// How the closer pair of agreeing methods is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Fewer iterations wins, then earlier position
    IterationCount,
    /// Lower final error wins, then fewer iterations, then earlier position
    ErrorThenIterations,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::IterationCount => write!(f, "iteration-count"),
            SelectionPolicy::ErrorThenIterations => write!(f, "error-then-iterations"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iteration-count" | "iterations" => Ok(SelectionPolicy::IterationCount),
            "error-then-iterations" | "error" => Ok(SelectionPolicy::ErrorThenIterations),
            other => Err(format!(
                "unknown selection policy '{}' (expected iteration-count or error-then-iterations)",
                other
            )),
        }
    }
}

/// Family of problems being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonKind {
    /// Scalar equations `f(x) = 0`
    RootFinding,
    /// Linear systems `A x = b`
    LinearSystem,
}

impl ComparisonKind {
    /// Policy used when none is configured.
    pub fn default_policy(&self) -> SelectionPolicy {
        match self {
            ComparisonKind::RootFinding => SelectionPolicy::IterationCount,
            ComparisonKind::LinearSystem => SelectionPolicy::ErrorThenIterations,
        }
    }

    /// Whether reports of this kind carry the `Error` column.
    pub fn reports_error(&self) -> bool {
        matches!(self, ComparisonKind::LinearSystem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_kind() {
        assert_eq!(
            ComparisonKind::RootFinding.default_policy(),
            SelectionPolicy::IterationCount
        );
        assert_eq!(
            ComparisonKind::LinearSystem.default_policy(),
            SelectionPolicy::ErrorThenIterations
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for policy in [
            SelectionPolicy::IterationCount,
            SelectionPolicy::ErrorThenIterations,
        ] {
            assert_eq!(policy.to_string().parse::<SelectionPolicy>(), Ok(policy));
        }
        assert!("fastest".parse::<SelectionPolicy>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SelectionPolicy::ErrorThenIterations).unwrap();
        assert_eq!(json, "\"error-then-iterations\"");
    }
}
