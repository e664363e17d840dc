//! Method registry and comparison orchestration.

use crate::normalize::normalize;
use crate::policy::{ComparisonKind, SelectionPolicy};
use crate::result::MethodResult;
use crate::selector::{rank, RankedResult};
use numerics_core::math::solvers::SolverOutput;
use numerics_core::types::SolverError;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

/// A numerical method that can be run on problems of type `P`.
pub trait MethodCollaborator<P> {
    /// Name shown in reports.
    fn name(&self) -> &str;

    /// Run the method to completion.
    fn solve(&self, problem: &P) -> Result<SolverOutput<f64>, SolverError>;
}

/// Ordered set of methods for one kind of problem.
///
/// Methods run one after another in registration order, which is also the
/// order of the report rows.
pub struct MethodRegistry<P> {
    kind: ComparisonKind,
    methods: Vec<Box<dyn MethodCollaborator<P>>>,
}

impl<P> MethodRegistry<P> {
    /// Empty registry.
    pub fn new(kind: ComparisonKind) -> Self {
        Self {
            kind,
            methods: Vec::new(),
        }
    }

    /// Append a method.
    pub fn register<M>(&mut self, method: M) -> &mut Self
    where
        M: MethodCollaborator<P> + 'static,
    {
        self.methods.push(Box::new(method));
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<M>(mut self, method: M) -> Self
    where
        M: MethodCollaborator<P> + 'static,
    {
        self.register(method);
        self
    }

    /// Problem family.
    pub fn kind(&self) -> ComparisonKind {
        self.kind
    }

    /// Registered method names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name()).collect()
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Run every method, one result per method.
    pub fn run_all(&self, problem: &P) -> Vec<MethodResult> {
        self.methods
            .iter()
            .map(|m| run_isolated(m.as_ref(), problem))
            .collect()
    }
}

impl<P> std::fmt::Debug for MethodRegistry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("kind", &self.kind)
            .field("methods", &self.names())
            .finish()
    }
}

/// Run one method; an error or a panic becomes a faulted result.
pub fn run_isolated<P>(method: &dyn MethodCollaborator<P>, problem: &P) -> MethodResult {
    let name = method.name();
    tracing::debug!(method = name, "running method");

    match panic::catch_unwind(AssertUnwindSafe(|| method.solve(problem))) {
        Ok(Ok(output)) => {
            let result = normalize(&output, name);
            tracing::debug!(
                method = name,
                converged = result.converged,
                iterations = output.iterations(),
                "method finished"
            );
            if let (false, Some(message)) = (output.have_solution, &output.message) {
                tracing::debug!(method = name, %message, "no solution");
            }
            result
        }
        Ok(Err(e)) => {
            tracing::warn!(method = name, error = %e, "method faulted");
            MethodResult::faulted(name, e.to_string())
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            tracing::warn!(method = name, %reason, "method panicked");
            MethodResult::faulted(name, format!("panicked: {}", reason))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Ranked outcome of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Problem family
    pub kind: ComparisonKind,
    /// Tie-break policy applied
    pub policy: SelectionPolicy,
    /// One entry per attempted method, in registration order
    pub entries: Vec<RankedResult>,
}

impl ComparisonReport {
    /// Entry marked best, if any.
    pub fn best(&self) -> Option<&RankedResult> {
        self.entries.iter().find(|e| e.is_best)
    }
}

/// Run every registered method on `problem` and rank the results.
///
/// `policy` overrides the default of the registry's kind.
///
/// # Example
///
/// ```
/// use numerics_compare::{compare, root_finding_catalogue, RootProblem};
///
/// let problem = RootProblem::new(|x| x * x - 2.0, 1.0, 2.0, 1.5)
///     .with_derivative(|x| 2.0 * x)
///     .with_second_derivative(|_| 2.0)
///     .with_iteration_function(|x| (x + 2.0 / x) / 2.0);
///
/// let report = compare(&root_finding_catalogue(), &problem, None);
/// assert_eq!(report.entries.len(), 7);
/// assert!(report.best().is_some());
/// ```
pub fn compare<P>(
    registry: &MethodRegistry<P>,
    problem: &P,
    policy: Option<SelectionPolicy>,
) -> ComparisonReport {
    let kind = registry.kind();
    let policy = policy.unwrap_or_else(|| kind.default_policy());

    let entries = rank(registry.run_all(problem), policy);
    match entries.iter().find(|e| e.is_best) {
        Some(best) => tracing::info!(
            method = %best.result.method_name,
            policy = %policy,
            "best method selected"
        ),
        None => tracing::info!(policy = %policy, "no method converged"),
    }

    ComparisonReport {
        kind,
        policy,
        entries,
    }
}
