use anyhow::Result;
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use tracing::{debug, info};

/// Optional configuration file, looked up in the working directory without extension.
pub const CONFIG_FILE: &str = "orcawatch";
/// Prefix of the environment overrides, e.g. `ORCAWATCH_API_BASE_URL`.
pub const ENV_PREFIX: &str = "ORCAWATCH";

/// Settings of the command line dashboard
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the prediction and sightings backend
    pub api_base_url: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    /// Loads `.env`, then layers defaults, `orcawatch.toml` and `ORCAWATCH_*` variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX));
        let config = Self::build(builder)?;

        info!("Using API at {}", config.api_base_url);
        Ok(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("api_base_url", common::DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", 30_i64)?)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Replaces the configured base URL when the command line names one.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            debug!("Base URL overridden from command line: {}", base_url);
            self.api_base_url = base_url;
        }
        self
    }
}
