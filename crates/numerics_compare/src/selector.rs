//! Best-method selection.
//!
//! Candidates are converged results with a non-empty solution. With two or
//! more, the two candidates whose solutions lie closest together (Euclidean
//! distance, scalars promoted to length-1 vectors, equal dimensions only)
//! are taken as the most trustworthy answer, and the policy picks one of
//! them. Candidates with non-finite components never enter the pairwise
//! search. When no pair is comparable, the policy decides among all finite
//! candidates.

use crate::policy::{SelectionPolicy, ERROR_TIE_TOLERANCE};
use crate::result::MethodResult;
use serde::Serialize;
use std::cmp::Ordering;

/// A result annotated with the selection outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// Canonical method outcome
    #[serde(flatten)]
    pub result: MethodResult,
    /// Chosen as the best method
    pub is_best: bool,
}

/// Index of the best result, if any.
pub fn select_best(results: &[MethodResult], policy: SelectionPolicy) -> Option<usize> {
    let candidates: Vec<usize> = (0..results.len())
        .filter(|&i| results[i].is_candidate())
        .collect();

    match candidates.len() {
        0 => return None,
        1 => return Some(candidates[0]),
        _ => {}
    }

    let comparable: Vec<(usize, Vec<f64>)> = candidates
        .iter()
        .filter(|&&i| results[i].solution.is_finite())
        .filter_map(|&i| results[i].solution.as_vector().map(|v| (i, v)))
        .collect();

    let finalists = match closest_pair(&comparable) {
        Some((i, j)) => vec![i, j],
        None => comparable.iter().map(|(i, _)| *i).collect(),
    };

    break_tie(results, &finalists, policy)
}

/// Annotate every result; at most one is marked best.
///
/// # Example
///
/// ```
/// use numerics_compare::{rank, MethodResult, SelectionPolicy, Solution};
///
/// let result = |name: &str, iters, x| MethodResult {
///     method_name: name.to_string(),
///     converged: true,
///     iteration_count: Some(iters),
///     solution: Solution::Scalar(x),
///     final_error: None,
///     fault: None,
/// };
/// let ranked = rank(
///     vec![result("A", 5, 1.0), result("B", 3, 1.0002), result("D", 10, 5.0)],
///     SelectionPolicy::IterationCount,
/// );
/// assert!(ranked[1].is_best);
/// ```
pub fn rank(results: Vec<MethodResult>, policy: SelectionPolicy) -> Vec<RankedResult> {
    let best = select_best(&results, policy);
    results
        .into_iter()
        .enumerate()
        .map(|(i, result)| RankedResult {
            result,
            is_best: best == Some(i),
        })
        .collect()
}

// First pair in input order wins exact ties
fn closest_pair(comparable: &[(usize, Vec<f64>)]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for (a, (i, u)) in comparable.iter().enumerate() {
        for (j, v) in &comparable[a + 1..] {
            if u.len() != v.len() {
                continue;
            }
            let d = euclidean(u, v);
            if best.map_or(true, |(_, _, bd)| d < bd) {
                best = Some((*i, *j, d));
            }
        }
    }
    best.map(|(i, j, _)| (i, j))
}

fn euclidean(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

fn by_iterations(results: &[MethodResult], a: usize, b: usize) -> Ordering {
    let iters = |i: usize| results[i].iteration_count.unwrap_or(usize::MAX);
    iters(a).cmp(&iters(b)).then(a.cmp(&b))
}

fn break_tie(results: &[MethodResult], finalists: &[usize], policy: SelectionPolicy) -> Option<usize> {
    match policy {
        SelectionPolicy::IterationCount => finalists
            .iter()
            .copied()
            .min_by(|&a, &b| by_iterations(results, a, b)),
        SelectionPolicy::ErrorThenIterations => {
            let error = |i: usize| results[i].final_error.filter(|e| e.is_finite());
            let min_error = finalists
                .iter()
                .filter_map(|&i| error(i))
                .min_by(|a, b| a.total_cmp(b));

            // Without any error metric the ranking falls back to iterations
            let pool: Vec<usize> = match min_error {
                Some(min) => finalists
                    .iter()
                    .copied()
                    .filter(|&i| error(i).is_some_and(|e| e - min <= ERROR_TIE_TOLERANCE))
                    .collect(),
                None => finalists.to_vec(),
            };
            pool.into_iter().min_by(|&a, &b| by_iterations(results, a, b))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Solution;
    use proptest::prelude::*;

    fn ok(name: &str, iterations: usize, solution: Solution, error: Option<f64>) -> MethodResult {
        MethodResult {
            method_name: name.to_string(),
            converged: true,
            iteration_count: Some(iterations),
            solution,
            final_error: error,
            fault: None,
        }
    }

    fn not_converged(name: &str) -> MethodResult {
        MethodResult {
            method_name: name.to_string(),
            converged: false,
            iteration_count: Some(100),
            solution: Solution::Scalar(0.3),
            final_error: Some(0.1),
            fault: None,
        }
    }

    fn best_name(ranked: &[RankedResult]) -> Option<&str> {
        ranked
            .iter()
            .find(|r| r.is_best)
            .map(|r| r.result.method_name.as_str())
    }

    // ========================================
    // Closest-Pair Selection
    // ========================================

    #[test]
    fn test_closest_pair_fewer_iterations_wins() {
        let ranked = rank(
            vec![
                ok("A", 5, Solution::Scalar(1.000), None),
                ok("B", 3, Solution::Scalar(1.0002), None),
                not_converged("C"),
                ok("D", 10, Solution::Scalar(5.0), None),
            ],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), Some("B"));
        assert_eq!(ranked.iter().filter(|r| r.is_best).count(), 1);
    }

    #[test]
    fn test_outlier_with_fewest_iterations_loses() {
        let ranked = rank(
            vec![
                ok("Fast", 1, Solution::Scalar(7.0), None),
                ok("A", 6, Solution::Scalar(2.0), None),
                ok("B", 4, Solution::Scalar(2.0 + 1e-9), None),
            ],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), Some("B"));
    }

    #[test]
    fn test_equal_iterations_earlier_wins() {
        let ranked = rank(
            vec![
                ok("A", 4, Solution::Scalar(1.0), None),
                ok("B", 4, Solution::Scalar(1.0), None),
            ],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), Some("A"));
    }

    #[test]
    fn test_exact_distance_tie_first_pair_wins() {
        // (A, B) and (C, D) both at distance 1; (A, B) comes first
        let ranked = rank(
            vec![
                ok("A", 9, Solution::Scalar(0.0), None),
                ok("B", 8, Solution::Scalar(1.0), None),
                ok("C", 1, Solution::Scalar(10.0), None),
                ok("D", 2, Solution::Scalar(11.0), None),
            ],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), Some("B"));
    }

    // ========================================
    // Error-Then-Iterations Policy
    // ========================================

    #[test]
    fn test_error_policy_prefers_lower_error() {
        let ranked = rank(
            vec![
                ok("Jacobi", 20, Solution::Vector(vec![1.0, 2.0]), Some(1e-8)),
                ok("Gauss-Seidel", 12, Solution::Vector(vec![1.0, 2.0]), Some(1e-6)),
            ],
            SelectionPolicy::ErrorThenIterations,
        );
        assert_eq!(best_name(&ranked), Some("Jacobi"));
    }

    #[test]
    fn test_error_within_tolerance_falls_to_iterations() {
        let ranked = rank(
            vec![
                ok("Jacobi", 20, Solution::Vector(vec![1.0, 2.0]), Some(1e-13)),
                ok("SOR", 9, Solution::Vector(vec![1.0, 2.0]), Some(5e-13)),
            ],
            SelectionPolicy::ErrorThenIterations,
        );
        assert_eq!(best_name(&ranked), Some("SOR"));
    }

    #[test]
    fn test_missing_error_ranks_last() {
        let ranked = rank(
            vec![
                ok("NoMetric", 1, Solution::Vector(vec![1.0]), None),
                ok("Metric", 50, Solution::Vector(vec![1.0]), Some(0.5)),
            ],
            SelectionPolicy::ErrorThenIterations,
        );
        assert_eq!(best_name(&ranked), Some("Metric"));
    }

    // ========================================
    // Degenerate Inputs
    // ========================================

    #[test]
    fn test_no_survivors() {
        let ranked = rank(
            vec![not_converged("A"), MethodResult::faulted("B", "boom")],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), None);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_single_survivor_always_best() {
        let ranked = rank(
            vec![
                not_converged("A"),
                ok("Only", 99, Solution::Scalar(3.0), None),
                MethodResult::faulted("C", "boom"),
            ],
            SelectionPolicy::ErrorThenIterations,
        );
        assert_eq!(best_name(&ranked), Some("Only"));
    }

    #[test]
    fn test_non_finite_excluded_from_pairs() {
        let ranked = rank(
            vec![
                ok("Nan", 1, Solution::Scalar(f64::NAN), None),
                ok("A", 5, Solution::Scalar(1.0), None),
                ok("B", 6, Solution::Scalar(1.1), None),
            ],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), Some("A"));
        assert!(!ranked[0].is_best);
    }

    #[test]
    fn test_mismatched_dimensions_fall_back_to_policy() {
        let ranked = rank(
            vec![
                ok("Two", 7, Solution::Vector(vec![1.0, 2.0]), None),
                ok("Three", 3, Solution::Vector(vec![1.0, 2.0, 3.0]), None),
            ],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), Some("Three"));
    }

    #[test]
    fn test_empty_vector_is_not_candidate() {
        let ranked = rank(
            vec![
                ok("Empty", 1, Solution::Vector(vec![]), None),
                ok("Real", 9, Solution::Vector(vec![0.5]), None),
            ],
            SelectionPolicy::IterationCount,
        );
        assert_eq!(best_name(&ranked), Some("Real"));
    }

    // ========================================
    // Property Tests
    // ========================================

    fn arb_result() -> impl Strategy<Value = MethodResult> {
        (
            any::<bool>(),
            proptest::option::of(0usize..50),
            proptest::option::of(-10.0f64..10.0),
            proptest::option::of(0.0f64..1.0),
        )
            .prop_map(|(converged, iterations, x, error)| MethodResult {
                method_name: "m".to_string(),
                converged,
                iteration_count: iterations,
                solution: x.map_or(Solution::Unavailable, Solution::Scalar),
                final_error: error,
                fault: None,
            })
    }

    proptest! {
        #[test]
        fn prop_at_most_one_best(results in proptest::collection::vec(arb_result(), 0..8)) {
            for policy in [SelectionPolicy::IterationCount, SelectionPolicy::ErrorThenIterations] {
                let ranked = rank(results.clone(), policy);
                prop_assert_eq!(ranked.len(), results.len());
                prop_assert!(ranked.iter().filter(|r| r.is_best).count() <= 1);
            }
        }

        #[test]
        fn prop_ranking_is_deterministic(results in proptest::collection::vec(arb_result(), 0..8)) {
            let first = rank(results.clone(), SelectionPolicy::ErrorThenIterations);
            let second = rank(results, SelectionPolicy::ErrorThenIterations);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_best_is_a_candidate(results in proptest::collection::vec(arb_result(), 0..8)) {
            let candidates = results.iter().filter(|r| r.is_candidate()).count();
            let ranked = rank(results, SelectionPolicy::IterationCount);
            let best = ranked.iter().find(|r| r.is_best);
            match best {
                Some(r) => prop_assert!(r.result.is_candidate()),
                None => prop_assert_eq!(candidates, 0),
            }
        }
    }
}
