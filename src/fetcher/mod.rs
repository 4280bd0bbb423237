use anyhow::{Result, anyhow};
use async_trait::async_trait;
use hifitime::Unit;
use std::fmt::Debug;
use tracing::debug;

use crate::datamodel::{Datapoint, LambdaDateTime, MetricGroup, StatisticKind};
use crate::error::CollectError;

pub mod cloudwatch;

pub use cloudwatch::CloudWatchSource;

pub const NAMESPACE: &str = "AWS/Lambda";
pub const FUNCTION_NAME_DIMENSION: &str = "FunctionName";
/// How far back from `now` the query window starts.
pub const LOOKBACK_SECONDS: i64 = 180;
pub const PERIOD_SECONDS: i32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

/// A single statistics request against the remote store.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsQuery {
    pub namespace: &'static str,
    pub metric_name: String,
    pub dimensions: Vec<Dimension>,
    pub start_time: LambdaDateTime,
    pub end_time: LambdaDateTime,
    pub period_seconds: i32,
    pub statistics: Vec<StatisticKind>,
}

impl StatisticsQuery {
    /// Query for `group` scoped to one function over `[now - 180s, now]`.
    ///
    /// An empty `resource_id` drops the dimension, which makes the store
    /// aggregate over every function of the region.
    pub fn for_group(group: &MetricGroup, resource_id: &str, now: LambdaDateTime) -> Self {
        let dimensions = if resource_id.is_empty() {
            Vec::new()
        } else {
            vec![Dimension {
                name: FUNCTION_NAME_DIMENSION.to_string(),
                value: resource_id.to_string(),
            }]
        };

        Self {
            namespace: NAMESPACE,
            metric_name: group.remote_name.to_string(),
            dimensions,
            start_time: now - LOOKBACK_SECONDS * Unit::Second,
            end_time: now,
            period_seconds: PERIOD_SECONDS,
            statistics: group.statistics(),
        }
    }
}

/// Remote time-series store answering statistics queries.
#[async_trait]
pub trait MetricStatisticsSource: Send + Sync + Debug {
    /// Performs exactly one round trip. Implementations must not retry.
    async fn get_metric_statistics(&self, query: &StatisticsQuery) -> Result<Vec<Datapoint>>;
}

/// Fetches the candidate datapoints of one metric group.
///
/// Every returned datapoint carries all the statistics the group asks for.
/// If any candidate lacks one, the whole group is reported as an upstream
/// error, even when the latest candidate is complete.
pub async fn fetch(
    source: &dyn MetricStatisticsSource,
    group: &MetricGroup,
    resource_id: &str,
    now: LambdaDateTime,
) -> Result<Vec<Datapoint>, CollectError> {
    let query = StatisticsQuery::for_group(group, resource_id, now);

    let datapoints = source
        .get_metric_statistics(&query)
        .await
        .map_err(|err| CollectError::upstream(group.remote_name, err))?;

    if datapoints.is_empty() {
        return Err(CollectError::no_data(group.remote_name));
    }

    for datapoint in &datapoints {
        if let Some(missing) = query
            .statistics
            .iter()
            .find(|kind| datapoint.statistic(**kind).is_none())
        {
            return Err(CollectError::upstream(
                group.remote_name,
                anyhow!("datapoint at {} has no {} value", datapoint.timestamp, missing),
            ));
        }
    }

    debug!(
        metric = group.remote_name,
        count = datapoints.len(),
        "Fetched datapoints"
    );
    Ok(datapoints)
}
