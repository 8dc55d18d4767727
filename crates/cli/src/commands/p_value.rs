//! Exact two-tailed p-value CLI command.

use anyhow::Result;
use clap::Args;

use coinflip_core::{AppConfig, CoinExperiment, ExperimentFormatter};

use super::output::{to_json, OutputFormat};

/// Arguments for the p-value command.
#[derive(Args, Debug, Clone)]
pub struct PValueArgs {
    /// Total number of flips
    #[arg(short = 'n', long)]
    pub trials: i64,

    /// Observed number of heads
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub successes: i64,

    /// Significance level for the verdict (default: stats.alpha)
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Renders the p-value and verdict for an observed head count.
///
/// # Errors
/// Returns an error for an unknown output format.
pub fn p_value_report(args: &PValueArgs, config: &AppConfig) -> Result<String> {
    let format = OutputFormat::parse(&args.format)?;
    let alpha = args.alpha.unwrap_or(config.stats.alpha);

    if args.successes < 0 || args.successes > args.trials {
        tracing::warn!(
            trials = args.trials,
            successes = args.successes,
            "Head count outside [0, n]; no test is possible"
        );
    }

    let experiment = CoinExperiment::from_counts(args.successes, args.trials, alpha);

    match format {
        OutputFormat::Json => to_json(&experiment),
        OutputFormat::Text => Ok(ExperimentFormatter::format(&experiment)),
    }
}

/// Runs the p-value command.
///
/// # Errors
/// Returns an error for an unknown output format.
pub fn run_p_value(args: PValueArgs, config: &AppConfig) -> Result<()> {
    println!("{}", p_value_report(&args, config)?);
    Ok(())
}
