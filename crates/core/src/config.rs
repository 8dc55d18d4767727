use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub stats: StatsConfig,
    pub simulation: SimulationConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Two-tailed significance level
    pub alpha: f64,
    /// Success probability under the null hypothesis for critical values
    pub null_probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub flips: i64,
    /// Probability of heads for simulated coins
    pub bias: f64,
    pub shuffles: usize,
    pub seed: Option<u64>,
}

/// Animation timing, in milliseconds and scene units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub drop_interval_ms: u64,
    pub swap_duration_ms: u64,
    pub swap_pause_ms: u64,
    pub start_delay_ms: u64,
    pub arc_height: f64,
    pub drop_height: f64,
    pub landing_height: f64,
    pub fall_speed: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            null_probability: 0.5,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            flips: 10,
            bias: 0.5,
            shuffles: 5,
            seed: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: 300,
            swap_duration_ms: 600,
            swap_pause_ms: 200,
            start_delay_ms: 500,
            arc_height: 40.0,
            drop_height: 15.0,
            landing_height: 0.1,
            fall_speed: 0.5,
        }
    }
}

impl AppConfig {
    /// Checks that probabilities and counts are usable.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let alpha = self.stats.alpha;
        if !(alpha > 0.0 && alpha < 1.0) {
            bail!("stats.alpha must be in (0, 1), got {alpha}");
        }
        let null = self.stats.null_probability;
        if !(0.0..=1.0).contains(&null) {
            bail!("stats.null_probability must be in [0, 1], got {null}");
        }
        let bias = self.simulation.bias;
        if !(0.0..=1.0).contains(&bias) {
            bail!("simulation.bias must be in [0, 1], got {bias}");
        }
        if self.simulation.flips < 0 {
            bail!(
                "simulation.flips must be non-negative, got {}",
                self.simulation.flips
            );
        }
        let fall_speed = self.timing.fall_speed;
        if fall_speed.is_nan() || fall_speed <= 0.0 {
            bail!("timing.fall_speed must be positive, got {fall_speed}");
        }
        Ok(())
    }
}
