//! Coin-flip experiment CLI command.
//!
//! Flips a coin `n` times and tests the head count against a fair coin.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tokio::time::{sleep_until, Instant};

use coinflip_core::{AppConfig, CoinExperiment, ExperimentFormatter};
use coinflip_simulation::{
    count_heads, render_row, seeded_rng, AnimationTiming, CoinFace, CoinFlipper, DropSchedule,
    GridDrop,
};

use super::output::{to_json, OutputFormat};

/// Arguments for the experiment command.
#[derive(Args, Debug, Clone, Default)]
pub struct ExperimentArgs {
    /// Number of coins to flip (default: simulation.flips)
    #[arg(short = 'n', long)]
    pub flips: Option<i64>,

    /// Probability of heads (default: simulation.bias)
    #[arg(short, long)]
    pub bias: Option<f64>,

    /// Seed for reproducible flips (default: simulation.seed)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Two-tailed significance level (default: stats.alpha)
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Replay the coin drops in real time
    #[arg(long)]
    pub animate: bool,

    /// Also lay the coins out on a grid
    #[arg(long)]
    pub grid: bool,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Flips and their test result.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRun {
    pub flips: Vec<CoinFace>,
    pub experiment: CoinExperiment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridDrop>,
}

/// Flips the coins described by `args`, filling gaps from `config`.
///
/// # Errors
/// Returns an error if the flip count is negative or the bias is not a probability.
pub fn simulate_experiment(args: &ExperimentArgs, config: &AppConfig) -> Result<ExperimentRun> {
    let flips = args.flips.unwrap_or(config.simulation.flips);
    let bias = args.bias.unwrap_or(config.simulation.bias);
    let alpha = args.alpha.unwrap_or(config.stats.alpha);
    let seed = args.seed.or(config.simulation.seed);

    let mut flipper = CoinFlipper::new(bias, seed)?;
    let faces = flipper.flip_trials(flips)?;
    let heads = count_heads(&faces);

    let experiment = CoinExperiment::from_counts(heads, flips, alpha);
    tracing::info!(
        flips,
        heads,
        p_value = experiment.p_value,
        significant = experiment.is_significant,
        "Experiment complete"
    );

    let grid = args.grid.then(|| {
        let mut rng = seeded_rng(seed);
        GridDrop::generate(&faces, &AnimationTiming::from(&config.timing), &mut rng)
    });

    Ok(ExperimentRun {
        flips: faces,
        experiment,
        grid,
    })
}

/// Renders an experiment run.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn experiment_report(run: &ExperimentRun, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(run),
        OutputFormat::Text => {
            let faces: Vec<String> = run.flips.iter().map(ToString::to_string).collect();
            let mut report = format!(
                "Flips: {}\n{}",
                faces.join(", "),
                ExperimentFormatter::format(&run.experiment)
            );
            if let Some(grid) = &run.grid {
                report.push_str(&grid_report(grid));
            }
            Ok(report)
        }
    }
}

/// Renders a grid drop as rows of coin symbols.
#[must_use]
pub fn grid_report(grid: &GridDrop) -> String {
    let mut out = format!(
        "\nGrid ({} columns, settles after {} frames)\n",
        grid.cols,
        grid.frames_to_settle()
    );
    for row in grid.rows() {
        out.push_str(&render_row(&row));
        out.push('\n');
    }
    out
}

/// Paints a coin symbol: gold heads, silver tails.
pub fn paint(face: CoinFace) -> String {
    let symbol = face.symbol().to_string();
    match face {
        CoinFace::Heads => symbol.yellow().bold().to_string(),
        CoinFace::Tails => symbol.white().dimmed().to_string(),
    }
}

/// Prints each coin as it would land, following the drop schedule.
pub async fn animate_drops(flips: &[CoinFace], timing: &AnimationTiming) {
    let schedule = DropSchedule::new(timing.clone());
    let start = Instant::now();

    let mut landed = String::new();
    for (index, face) in flips.iter().enumerate() {
        sleep_until(start + schedule.release_time(index)).await;
        landed.push_str(&paint(*face));
        println!("[{:>4}/{}] {}", index + 1, flips.len(), landed);
    }

    tracing::debug!(
        coins = flips.len(),
        frames_to_land = schedule.frames_to_land(),
        "Drop animation finished"
    );
}

/// Runs the experiment command.
///
/// # Errors
/// Returns an error for invalid arguments or an unknown output format.
pub async fn run_experiment(args: ExperimentArgs, config: &AppConfig) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;
    let run = simulate_experiment(&args, config)?;

    if args.animate && format == OutputFormat::Text {
        animate_drops(&run.flips, &AnimationTiming::from(&config.timing)).await;
    }

    println!("{}", experiment_report(&run, format)?);
    Ok(())
}
