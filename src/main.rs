#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use lambda_stats::cli::{Cli, PluginOptions};
use lambda_stats::config::{ClientSettings, PluginConfig, client::ClientOverrides};
use lambda_stats::datamodel::LambdaDateTime;
use lambda_stats::fetcher::CloudWatchSource;
use lambda_stats::output::{graph_definitions_requested, write_graph_definitions, write_values};
use lambda_stats::pipeline::Collector;
use std::io::Write;
use std::sync::Arc;
use tracing::{Level, debug, event};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the agent protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    if let Some(tempfile) = &cli.tempfile {
        debug!(%tempfile, "Ignoring tempfile, no state is kept between runs");
    }

    let config = PluginConfig::load().context("Failed to load configuration")?;
    let options = cli.into_options(config);

    if graph_definitions_requested() {
        let mut stdout = std::io::stdout().lock();
        write_graph_definitions(&mut stdout, &options.metric_key_prefix)?;
        stdout.flush()?;
        return Ok(());
    }

    let settings = options.client_settings(&ClientOverrides::from_env());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main(options, settings))
}

async fn async_main(options: PluginOptions, settings: ClientSettings) -> Result<()> {
    let source = match CloudWatchSource::connect(&settings).await {
        Ok(source) => source,
        Err(err) => {
            event!(Level::ERROR, "CloudWatch client setup failed: {}", err);
            return Err(err).context("Failed to set up the CloudWatch client");
        }
    };

    let now = LambdaDateTime::now().context("Failed to read the system clock")?;
    let record = Collector::new(Arc::new(source), options.function_name.as_str())
        .collect(now)
        .await;

    let mut stdout = std::io::stdout().lock();
    write_values(&mut stdout, &options.metric_key_prefix, &record, now)?;
    stdout.flush()?;
    Ok(())
}
