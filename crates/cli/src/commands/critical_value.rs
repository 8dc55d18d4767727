//! Critical value CLI command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use coinflip_core::{find_critical_value, AppConfig};

use super::output::{to_json, OutputFormat};

/// Arguments for the critical-value command.
#[derive(Args, Debug, Clone)]
pub struct CriticalValueArgs {
    /// Total number of trials
    #[arg(short = 'n', long)]
    pub trials: i64,

    /// Success probability under H0 (default: stats.null_probability)
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Two-tailed significance level (default: stats.alpha)
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct CriticalValueOutput {
    trials: i64,
    probability: f64,
    alpha: f64,
    critical_upper: i64,
    critical_lower: i64,
    /// The search never crossed alpha / 2 and returned n + 1
    fallback: bool,
}

/// Renders the two-tailed rejection region for the given arguments.
///
/// # Errors
/// Returns an error for an unknown output format.
pub fn critical_value_report(args: &CriticalValueArgs, config: &AppConfig) -> Result<String> {
    let format = OutputFormat::parse(&args.format)?;
    let probability = args.probability.unwrap_or(config.stats.null_probability);
    let alpha = args.alpha.unwrap_or(config.stats.alpha);

    let critical_upper = find_critical_value(args.trials, probability, alpha);
    let fallback = critical_upper == args.trials + 1;
    if fallback {
        tracing::warn!(
            trials = args.trials,
            probability,
            alpha,
            "Upper tail never exceeded alpha/2; returning n + 1"
        );
    }

    let output = CriticalValueOutput {
        trials: args.trials,
        probability,
        alpha,
        critical_upper,
        critical_lower: args.trials - critical_upper,
        fallback,
    };

    match format {
        OutputFormat::Json => to_json(&output),
        OutputFormat::Text => Ok(format!(
            "Critical value (n = {}, p = {}, alpha = {}): {}\nReject H0 when successes >= {} or successes <= {}",
            output.trials,
            output.probability,
            output.alpha,
            output.critical_upper,
            output.critical_upper,
            output.critical_lower
        )),
    }
}

/// Runs the critical-value command.
///
/// # Errors
/// Returns an error for an unknown output format.
pub fn run_critical_value(args: CriticalValueArgs, config: &AppConfig) -> Result<()> {
    println!("{}", critical_value_report(&args, config)?);
    Ok(())
}
