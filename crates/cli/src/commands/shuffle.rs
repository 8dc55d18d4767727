//! Shuffle CLI command.
//!
//! Lays out heads then tails and swaps random pairs, printing the row after
//! every swap.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tokio::time::{sleep, Instant};

use coinflip_core::AppConfig;
use coinflip_simulation::{
    render_row, seeded_rng, swap_progress, AnimationTiming, CoinFace, ShufflePlan, Swap, SwapFrame,
};

use super::experiment::paint;
use super::output::{to_json, OutputFormat};

/// Interval between traced swap frames.
const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

/// Arguments for the shuffle command.
#[derive(Args, Debug, Clone)]
pub struct ShuffleArgs {
    /// Number of heads in the row
    #[arg(long)]
    pub heads: usize,

    /// Number of tails in the row
    #[arg(long)]
    pub tails: usize,

    /// Number of swaps (default: simulation.shuffles)
    #[arg(long)]
    pub shuffles: Option<usize>,

    /// Seed for reproducible swaps (default: simulation.seed)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Replay the swaps in real time
    #[arg(long)]
    pub animate: bool,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct ShuffleOutput<'a> {
    #[serde(flatten)]
    plan: &'a ShufflePlan,
    final_row: String,
}

/// Builds the shuffle plan described by `args`.
pub fn build_plan(args: &ShuffleArgs, config: &AppConfig) -> ShufflePlan {
    let shuffles = args.shuffles.unwrap_or(config.simulation.shuffles);
    let mut rng = seeded_rng(args.seed.or(config.simulation.seed));
    ShufflePlan::generate(args.heads, args.tails, shuffles, &mut rng)
}

/// Renders a shuffle plan step by step.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn shuffle_report(plan: &ShufflePlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&ShuffleOutput {
            plan,
            final_row: render_row(&plan.final_arrangement()),
        }),
        OutputFormat::Text => {
            let mut lines = vec![format!("Start:    {}", render_row(&plan.initial))];
            lines.reserve(plan.swaps.len());
            for (step, (swap, row)) in plan.steps().enumerate() {
                lines.push(format!(
                    "Swap {:>3}: {} ({} <-> {})",
                    step + 1,
                    render_row(&row),
                    swap.left,
                    swap.right
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

async fn animate_swap(swap: &Swap, timing: &AnimationTiming) {
    let start = Instant::now();
    let distance = (swap.right - swap.left) as f64;
    loop {
        let progress = swap_progress(start.elapsed(), timing.swap_duration);
        let frame = SwapFrame::at(progress, distance, timing.arc_height);
        tracing::trace!(
            left = swap.left,
            right = swap.right,
            eased = frame.eased,
            lift = frame.right_dy,
            "Swap frame"
        );
        if frame.is_complete() {
            break;
        }
        sleep(FRAME_INTERVAL).await;
    }
}

/// Replays a shuffle plan at animation speed.
pub async fn animate_plan(plan: &ShufflePlan, timing: &AnimationTiming) {
    let paint_row = |row: &[CoinFace]| -> String { row.iter().copied().map(paint).collect() };

    println!("{}", paint_row(&plan.initial));
    sleep(timing.start_delay).await;

    for (swap, row) in plan.steps() {
        animate_swap(&swap, timing).await;
        println!("{}", paint_row(&row));
        sleep(timing.swap_pause).await;
    }
}

/// Runs the shuffle command.
///
/// # Errors
/// Returns an error for an unknown output format.
pub async fn run_shuffle(args: ShuffleArgs, config: &AppConfig) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;
    let plan = build_plan(&args, config);
    tracing::info!(
        heads = args.heads,
        tails = args.tails,
        swaps = plan.swaps.len(),
        "Shuffling coins"
    );

    if args.animate && format == OutputFormat::Text {
        animate_plan(&plan, &AnimationTiming::from(&config.timing)).await;
        return Ok(());
    }

    println!("{}", shuffle_report(&plan, format)?);
    Ok(())
}
