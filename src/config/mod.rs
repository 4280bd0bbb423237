use anyhow::{Context, Error};
use confique::Config;

use self::client::ClientOverrides;
pub mod client;

pub use client::{ClientSettings, CredentialSource};

pub const CONFIG_FILE: &str = "lambda-stats.toml";

#[derive(Debug, Config)]
pub struct PluginConfig {
    /// Function to collect; empty collects across every function of the region
    #[config(env = "LAMBDA_STATS_FUNCTION_NAME", default = "")]
    pub function_name: String,

    #[config(env = "LAMBDA_STATS_METRIC_KEY_PREFIX", default = "lambda")]
    pub metric_key_prefix: String,

    #[config(env = "LAMBDA_STATS_REGION")]
    pub region: Option<String>,

    #[config(env = "LAMBDA_STATS_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    #[config(env = "LAMBDA_STATS_SECRET_ACCESS_KEY")]
    pub secret_access_key: Option<String>,
}

impl PluginConfig {
    pub fn load() -> Result<PluginConfig, Error> {
        let c = PluginConfig::builder()
            .env()
            .file(CONFIG_FILE)
            .load()
            .with_context(|| format!("Failed to load configuration from env or {}", CONFIG_FILE))?;

        Ok(c)
    }

    pub fn client_overrides(&self) -> ClientOverrides {
        ClientOverrides {
            region: self.region.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
        }
    }
}
