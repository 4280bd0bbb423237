use thiserror::Error;

/// Errors raised while collecting metrics.
///
/// Only `Setup` aborts a run. `NoData` and `Upstream` concern a single
/// metric group and are recovered by skipping that group.
#[derive(Error, Debug)]
pub enum CollectError {
    /// Client construction failed (credentials, region)
    #[error("Setup error: {0}")]
    Setup(String),

    /// The store answered, but had no datapoint in the requested window
    #[error("Fetched no datapoints for {metric}")]
    NoData { metric: String },

    /// Transport, authentication or malformed response
    #[error("Failed to fetch {metric}: {source}")]
    Upstream {
        metric: String,
        #[source]
        source: anyhow::Error,
    },
}

impl CollectError {
    pub fn setup(message: impl Into<String>) -> Self {
        CollectError::Setup(message.into())
    }

    pub fn no_data(metric: &str) -> Self {
        CollectError::NoData {
            metric: metric.to_string(),
        }
    }

    pub fn upstream(metric: &str, source: anyhow::Error) -> Self {
        CollectError::Upstream {
            metric: metric.to_string(),
            source,
        }
    }

    /// Whether the error only affects one metric group.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CollectError::Setup(_))
    }
}
