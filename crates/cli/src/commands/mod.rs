//! CLI commands for the coin-flip explainer.

pub mod critical_value;
pub mod experiment;
pub mod output;
pub mod p_value;
pub mod pmf;
pub mod shuffle;

pub use critical_value::{critical_value_report, run_critical_value, CriticalValueArgs};
pub use experiment::{
    experiment_report, run_experiment, simulate_experiment, ExperimentArgs, ExperimentRun,
};
pub use output::OutputFormat;
pub use p_value::{p_value_report, run_p_value, PValueArgs};
pub use pmf::{pmf_report, run_pmf, PmfArgs};
pub use shuffle::{build_plan, run_shuffle, shuffle_report, ShuffleArgs};
