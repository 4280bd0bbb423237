use clap::Parser;

use crate::config::{ClientSettings, PluginConfig, client::ClientOverrides};

#[derive(Debug, Parser)]
#[command(name = "lambda-stats")]
#[command(about = "Collects AWS Lambda usage statistics from CloudWatch for a monitoring agent")]
#[command(version)]
pub struct Cli {
    /// AWS Access Key ID
    #[arg(long)]
    pub access_key_id: Option<String>,

    /// AWS Secret Access Key
    #[arg(long)]
    pub secret_access_key: Option<String>,

    /// AWS Region
    #[arg(long)]
    pub region: Option<String>,

    /// Function Name
    #[arg(long)]
    pub function_name: Option<String>,

    /// Metric key prefix
    #[arg(long)]
    pub metric_key_prefix: Option<String>,

    /// Temp file name. Accepted for agent compatibility, nothing is kept
    /// between runs.
    #[arg(long)]
    pub tempfile: Option<String>,
}

/// Command line merged over the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
    pub function_name: String,
    pub metric_key_prefix: String,
    pub explicit: ClientOverrides,
    pub configured: ClientOverrides,
}

impl PluginOptions {
    pub fn client_settings(&self, environment: &ClientOverrides) -> ClientSettings {
        ClientSettings::resolve(&self.explicit, &self.configured, environment)
    }
}

impl Cli {
    pub fn into_options(self, config: PluginConfig) -> PluginOptions {
        let configured = config.client_overrides();
        PluginOptions {
            function_name: self.function_name.unwrap_or(config.function_name),
            metric_key_prefix: self.metric_key_prefix.unwrap_or(config.metric_key_prefix),
            explicit: ClientOverrides {
                region: self.region,
                access_key_id: self.access_key_id,
                secret_access_key: self.secret_access_key,
            },
            configured,
        }
    }
}
