use anyhow::Context;
use clap::{Parser, Subcommand};

use coinflip_cli::commands::{
    self, CriticalValueArgs, ExperimentArgs, PValueArgs, PmfArgs, ShuffleArgs,
};
use coinflip_core::{ConfigLoader, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "coinflip")]
#[command(about = "Binomial p-values and coin-flip experiments", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probability of exactly k successes in n trials
    Pmf(PmfArgs),
    /// Upper critical value of a two-tailed binomial test
    CriticalValue(CriticalValueArgs),
    /// Exact two-tailed p-value of k heads in n fair flips
    PValue(PValueArgs),
    /// Flip coins and test the result against a fair coin
    Experiment(ExperimentArgs),
    /// Shuffle a row of heads and tails with random swaps
    Shuffle(ShuffleArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::load_from(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    match cli.command {
        Commands::Pmf(args) => {
            commands::run_pmf(args, &config)?;
        }
        Commands::CriticalValue(args) => {
            commands::run_critical_value(args, &config)?;
        }
        Commands::PValue(args) => {
            commands::run_p_value(args, &config)?;
        }
        Commands::Experiment(args) => {
            commands::run_experiment(args, &config).await?;
        }
        Commands::Shuffle(args) => {
            commands::run_shuffle(args, &config).await?;
        }
    }

    Ok(())
}
