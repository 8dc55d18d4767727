pub mod binomial;
pub mod config;
pub mod config_loader;
pub mod experiment;
pub mod experiment_formatter;

pub use binomial::{binomial_pmf, calculate_p_value, combinations, find_critical_value, FAIR_COIN};
pub use config::{AppConfig, SimulationConfig, StatsConfig, TimingConfig};
pub use config_loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use experiment::{CoinExperiment, Verdict};
pub use experiment_formatter::ExperimentFormatter;
