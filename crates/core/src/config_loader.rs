use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/Config.toml";
const JSON_CONFIG_PATH: &str = "config/Config.json";
const ENV_PREFIX: &str = "COINFLIP_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration by merging defaults, TOML, environment variables, and JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be parsed or hold invalid values.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Loads configuration using a specific TOML file.
    ///
    /// A missing file is not an error; the defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be parsed or hold invalid values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
        }

        let config: AppConfig = Self::figment(path).extract()?;
        config.validate()?;

        tracing::debug!(
            alpha = config.stats.alpha,
            flips = config.simulation.flips,
            "Configuration loaded"
        );
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .join(Json::file(JSON_CONFIG_PATH))
    }
}
