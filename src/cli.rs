use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use quadrix::solver::constants::{DEFAULT_LEAF_COUNT, DEFAULT_TARGET, EPSILON};
use quadrix::utils::nondecreasing_digit_strings;
use quadrix::{ExpressionSolver, SolverConfig, validate_digit_string};

const NO_SOLUTIONS: &str = "No solutions found.";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Quadrix - Find every arithmetic expression over a set of digits that hits a target
#[derive(Parser, Debug)]
#[command(name = "quadrix")]
#[command(
    about = "Combine digits with + - * / and any parentheses to reach a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Digits to combine, one leaf per character
    #[arg(
        required_unless_present_any = ["interactive", "sweep"],
        conflicts_with_all = ["interactive", "sweep"]
    )]
    pub digit_string: Option<String>,

    /// Target value to match
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Number of digits expected in each input
    #[arg(short = 'n', long, default_value_t = DEFAULT_LEAF_COUNT)]
    pub length: usize,

    /// Maximum distance from the target that still counts as a match
    #[arg(long, default_value_t = EPSILON)]
    pub tolerance: f64,

    /// Read digit strings from stdin and solve each line
    #[arg(short, long)]
    pub interactive: bool,

    /// Solve every multiset of digits and list the solvable ones
    #[arg(long, conflicts_with = "interactive")]
    pub sweep: bool,

    /// Re-parse and evaluate every printed solution
    #[arg(long)]
    pub verify: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What the application should do once configured
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Solve(String),
    Interactive,
    Sweep,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub target: f64,
    pub solver: SolverConfig,
    pub verify: bool,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a validated configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let mode = if args.sweep {
        Mode::Sweep
    } else if args.interactive {
        Mode::Interactive
    } else {
        let digits = args
            .digit_string
            .context("A digit string is required unless --interactive or --sweep is given")?;
        validate_digit_string(&digits, args.length).context("Invalid digit string")?;
        Mode::Solve(digits)
    };

    Ok(CliConfig {
        mode,
        target: args.target,
        solver: SolverConfig {
            tolerance: args.tolerance,
            leaf_count: args.length,
        },
        verify: args.verify,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Lines to print for one solve: each solution, or the no-solution message
pub fn render_solutions(solutions: &[String]) -> Vec<String> {
    if solutions.is_empty() {
        vec![NO_SOLUTIONS.to_string()]
    } else {
        solutions.to_vec()
    }
}

fn verify_all(solver: &ExpressionSolver, solutions: &[String], target: f64) -> Result<()> {
    for solution in solutions {
        solver
            .verify(solution, target)
            .with_context(|| format!("Solution '{}' failed verification", solution))?;
    }
    info!("Verified {} solutions", solutions.len());
    Ok(())
}

fn solve_and_print<W: Write>(
    solver: &ExpressionSolver,
    digits: &str,
    config: &CliConfig,
    output: &mut W,
) -> Result<()> {
    let solutions = solver
        .solve_digits(digits, config.target)
        .context("Invalid digit string")?;

    if config.verify {
        verify_all(solver, &solutions, config.target)?;
    }
    if solutions.is_empty() {
        warn!("No matching expression found for '{}'", digits);
    }

    for line in render_solutions(&solutions) {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

/// Re-solve on every input line. Invalid lines print their validation
/// message and the loop continues.
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &ExpressionSolver,
    config: &CliConfig,
    input: R,
    output: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let digits = line.trim();
        if digits.is_empty() {
            continue;
        }

        match validate_digit_string(digits, config.solver.leaf_count) {
            Ok(()) => solve_and_print(solver, digits, config, output)?,
            Err(err) => writeln!(output, "{}", err)?,
        }
        output.flush()?;
    }
    Ok(())
}

/// Print every solvable multiset with its solution count, then a total
pub fn run_sweep<W: Write>(
    solver: &ExpressionSolver,
    config: &CliConfig,
    output: &mut W,
) -> Result<()> {
    let entries = solver.sweep(config.target);
    for entry in &entries {
        writeln!(output, "{}: {}", entry.digits, entry.solutions)?;
    }

    let total = nondecreasing_digit_strings(config.solver.leaf_count).len();
    writeln!(
        output,
        "{} of {} digit multisets reach {}",
        entries.len(),
        total,
        config.target
    )?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver =
        ExpressionSolver::new(config.solver.clone()).context("Invalid solver configuration")?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &config.mode {
        Mode::Solve(digits) => {
            info!(
                "Searching for expressions using digits '{}' that equal {}",
                digits, config.target
            );
            solve_and_print(&solver, digits, &config, &mut output)
        }
        Mode::Interactive => {
            info!(
                "Reading {}-digit strings from stdin, target {}",
                config.solver.leaf_count, config.target
            );
            run_interactive(&solver, &config, io::stdin().lock(), &mut output)
        }
        Mode::Sweep => run_sweep(&solver, &config, &mut output),
    }
}
