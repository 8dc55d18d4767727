//! Binomial probability mass CLI command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use coinflip_core::{binomial_pmf, combinations, AppConfig};

use super::output::{to_json, OutputFormat};

/// Arguments for the pmf command.
#[derive(Args, Debug, Clone)]
pub struct PmfArgs {
    /// Total number of trials
    #[arg(short = 'n', long)]
    pub trials: i64,

    /// Number of successes
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub successes: i64,

    /// Success probability per trial (default: stats.null_probability)
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct PmfOutput {
    trials: i64,
    successes: i64,
    probability: f64,
    combinations: f64,
    pmf: f64,
}

/// Renders P(X = k) for the given arguments.
///
/// # Errors
/// Returns an error for an unknown output format.
pub fn pmf_report(args: &PmfArgs, config: &AppConfig) -> Result<String> {
    let format = OutputFormat::parse(&args.format)?;
    let probability = args.probability.unwrap_or(config.stats.null_probability);

    let output = PmfOutput {
        trials: args.trials,
        successes: args.successes,
        probability,
        combinations: combinations(args.trials, args.successes),
        pmf: binomial_pmf(args.successes, args.trials, probability),
    };

    match format {
        OutputFormat::Json => to_json(&output),
        OutputFormat::Text => Ok(format!(
            "C({n}, {k}) = {c}\nP(X = {k} | n = {n}, p = {p}) = {pmf:.10}",
            n = output.trials,
            k = output.successes,
            c = output.combinations,
            p = output.probability,
            pmf = output.pmf
        )),
    }
}

/// Runs the pmf command.
///
/// # Errors
/// Returns an error for an unknown output format.
pub fn run_pmf(args: PmfArgs, config: &AppConfig) -> Result<()> {
    tracing::debug!(trials = args.trials, successes = args.successes, "Computing pmf");
    println!("{}", pmf_report(&args, config)?);
    Ok(())
}
