//! Compare commands implementation
//!
//! Runs the root-finding or linear-system catalogue on one problem and
//! emits the ranked comparison report.

use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use numerics_compare::{
    compare, linear_system_catalogue, root_finding_catalogue, write_comparison_csv, write_json,
    ComparisonReport, LinearProblem, RootProblem, SelectionPolicy,
};
use numerics_core::math::linalg::DenseMatrix;
use numerics_core::math::solvers::SolverConfig;

use super::{parse_numbers, write_to, OutputFormat};
use crate::config::NumericsConfig;
use crate::{CliError, Result};

/// Built-in root-finding problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RootPreset {
    /// x^2 - 2 on [1, 2]
    SqrtTwo,
    /// x^3 - x - 2 on [1, 2]
    Cubic,
    /// cos(x) - x on [0, 1]
    Cosine,
    /// (x - 1)^2 (x + 3), double root at 1
    DoubleRoot,
}

impl RootPreset {
    /// The problem with its default interval, starting point and multiplicity.
    pub fn problem(self) -> RootProblem {
        match self {
            RootPreset::SqrtTwo => RootProblem::new(|x| x * x - 2.0, 1.0, 2.0, 1.5)
                .with_derivative(|x| 2.0 * x)
                .with_second_derivative(|_| 2.0)
                .with_iteration_function(|x| (x + 2.0 / x) / 2.0),
            RootPreset::Cubic => RootProblem::new(|x| x * x * x - x - 2.0, 1.0, 2.0, 1.5)
                .with_derivative(|x| 3.0 * x * x - 1.0)
                .with_second_derivative(|x| 6.0 * x)
                .with_iteration_function(|x| (x + 2.0).cbrt()),
            RootPreset::Cosine => RootProblem::new(|x| x.cos() - x, 0.0, 1.0, 0.5)
                .with_derivative(|x| -x.sin() - 1.0)
                .with_second_derivative(|x| -x.cos())
                .with_iteration_function(f64::cos),
            RootPreset::DoubleRoot => {
                RootProblem::new(|x| (x - 1.0).powi(2) * (x + 3.0), 0.0, 3.0, 2.0)
                    .with_derivative(|x| 2.0 * (x - 1.0) * (x + 3.0) + (x - 1.0).powi(2))
                    .with_second_derivative(|x| 2.0 * (x + 3.0) + 4.0 * (x - 1.0))
                    .with_iteration_function(|x| x - (x - 1.0).powi(2) * (x + 3.0) / 8.0)
                    .with_multiplicity(2.0)
            }
        }
    }
}

/// Options shared by both comparisons.
#[derive(Debug, Clone, Args)]
pub struct ComparisonOptions {
    /// Convergence tolerance (defaults to the configured value)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Iteration cap (defaults to the configured value)
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Selection policy: iteration-count or error-then-iterations
    #[arg(long)]
    pub policy: Option<SelectionPolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ComparisonOptions {
    fn solver_config(&self, config: &NumericsConfig) -> Result<SolverConfig<f64>> {
        let tolerance = self.tolerance.unwrap_or(config.tolerance);
        let max_iterations = self.max_iterations.unwrap_or(config.max_iterations);

        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(CliError::InvalidArgument(format!(
                "tolerance {} must be positive",
                tolerance
            )));
        }
        if max_iterations == 0 {
            return Err(CliError::InvalidArgument(
                "max-iterations must be greater than 0".to_string(),
            ));
        }

        Ok(SolverConfig {
            tolerance,
            max_iterations,
            ..config.solver_config()
        })
    }
}

/// Arguments of `compare-roots`.
#[derive(Debug, Clone, Args)]
pub struct CompareRootsArgs {
    /// Problem to solve
    #[arg(short, long, value_enum)]
    pub problem: RootPreset,

    /// Left end of the bracketing interval
    #[arg(long, allow_hyphen_values = true)]
    pub a: Option<f64>,

    /// Right end of the bracketing interval
    #[arg(long, allow_hyphen_values = true)]
    pub b: Option<f64>,

    /// Starting point of the open methods
    #[arg(long, allow_hyphen_values = true)]
    pub x0: Option<f64>,

    /// Root multiplicity for Multiple Roots #1
    #[arg(short, long)]
    pub multiplicity: Option<f64>,

    #[command(flatten)]
    pub options: ComparisonOptions,
}

/// Arguments of `compare-linear`.
#[derive(Debug, Clone, Args)]
pub struct CompareLinearArgs {
    /// Matrix rows separated by ';', e.g. "4 1; 1 3"
    #[arg(long, allow_hyphen_values = true)]
    pub matrix: String,

    /// Right-hand side, e.g. "1 2"
    #[arg(long, allow_hyphen_values = true)]
    pub vector: String,

    /// Starting guess (zeros when omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub initial_guess: Option<String>,

    /// SOR relaxation factor (defaults to the configured value)
    #[arg(long)]
    pub relaxation: Option<f64>,

    #[command(flatten)]
    pub options: ComparisonOptions,
}

/// Run the root-finding comparison
pub fn run_roots<W: Write>(
    config: &NumericsConfig,
    args: &CompareRootsArgs,
    out: &mut W,
) -> Result<()> {
    info!("Comparing root-finding methods...");
    info!("  Problem: {:?}", args.problem);

    let mut problem = args
        .problem
        .problem()
        .with_config(args.options.solver_config(config)?);
    if let Some(a) = args.a {
        problem.a = a;
    }
    if let Some(b) = args.b {
        problem.b = b;
    }
    if let Some(x0) = args.x0 {
        problem.x0 = x0;
    }
    if let Some(m) = args.multiplicity {
        problem = problem.with_multiplicity(m);
    }

    let policy = args.options.policy.unwrap_or(config.root_policy);
    let report = compare(&root_finding_catalogue(), &problem, Some(policy));
    emit(&report, &args.options, out)
}

/// Run the linear-system comparison
pub fn run_linear<W: Write>(
    config: &NumericsConfig,
    args: &CompareLinearArgs,
    out: &mut W,
) -> Result<()> {
    info!("Comparing linear-system methods...");

    let a = parse_matrix(&args.matrix)?;
    let b = parse_numbers(&args.vector, "vector")?;
    let x0 = match &args.initial_guess {
        Some(raw) => parse_numbers(raw, "initial guess")?,
        None => vec![0.0; b.len()],
    };
    info!("  System: {}x{}", a.n_rows(), a.n_cols());

    let problem = LinearProblem::new(a, b, x0)
        .with_omega(args.relaxation.unwrap_or(config.relaxation_factor))
        .with_config(args.options.solver_config(config)?);

    let policy = args.options.policy.unwrap_or(config.linear_policy);
    let report = compare(&linear_system_catalogue(), &problem, Some(policy));
    emit(&report, &args.options, out)
}

/// Parse `"r1; r2; ..."` into a dense matrix.
pub(crate) fn parse_matrix(raw: &str) -> Result<DenseMatrix<f64>> {
    let rows = raw
        .split(';')
        .filter(|row| !row.trim().is_empty())
        .enumerate()
        .map(|(i, row)| parse_numbers(row, &format!("matrix row {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    Ok(DenseMatrix::from_rows(&rows)?)
}

fn emit<W: Write>(report: &ComparisonReport, options: &ComparisonOptions, out: &mut W) -> Result<()> {
    match report.best() {
        Some(best) => info!("  Best: {}", best.result.method_name),
        None => info!("  Best: none"),
    }

    write_to(options.output.as_deref(), out, |w| {
        match options.format {
            OutputFormat::Csv => write_comparison_csv(report, w)?,
            OutputFormat::Json => {
                write_json(report, &mut *w)?;
                writeln!(w)?;
            }
        }
        Ok(())
    })
}
