use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, retry::RetryConfig};
use aws_sdk_cloudwatch::{
    Client,
    config::{Credentials, Region},
    primitives::DateTime,
    types::{Datapoint as CloudWatchDatapoint, Dimension as CloudWatchDimension, Statistic},
};
use tracing::debug;

use super::{MetricStatisticsSource, StatisticsQuery};
use crate::config::{ClientSettings, CredentialSource};
use crate::datamodel::{Datapoint, LambdaDateTime, LambdaDateTimeExt, StatisticKind};
use crate::error::CollectError;

const CREDENTIALS_PROVIDER_NAME: &str = "lambda-stats";

/// Amazon CloudWatch as the statistics source.
#[derive(Debug, Clone)]
pub struct CloudWatchSource {
    client: Client,
}

impl CloudWatchSource {
    /// Builds the CloudWatch client. SDK retries are disabled so that each
    /// fetch stays a single round trip.
    pub async fn connect(settings: &ClientSettings) -> Result<Self, CollectError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let CredentialSource::Static {
            access_key_id,
            secret_access_key,
        } = &settings.credentials
        {
            loader = loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ));
        }

        let sdk_config = loader.load().await;
        let region = sdk_config.region().ok_or_else(|| {
            CollectError::setup("no AWS region configured (use --region, AWS_REGION or a profile)")
        })?;
        debug!(%region, credentials = ?settings.credentials, "CloudWatch client ready");

        Ok(Self::from_client(Client::new(&sdk_config)))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetricStatisticsSource for CloudWatchSource {
    async fn get_metric_statistics(&self, query: &StatisticsQuery) -> Result<Vec<Datapoint>> {
        let dimensions = query
            .dimensions
            .iter()
            .map(|dimension| {
                CloudWatchDimension::builder()
                    .name(&dimension.name)
                    .value(&dimension.value)
                    .build()
            })
            .collect::<Vec<_>>();

        let statistics = query
            .statistics
            .iter()
            .map(|kind| to_cloudwatch_statistic(*kind))
            .collect();

        let response = self
            .client
            .get_metric_statistics()
            .namespace(query.namespace)
            .metric_name(&query.metric_name)
            .set_dimensions(Some(dimensions))
            .start_time(to_cloudwatch_datetime(&query.start_time))
            .end_time(to_cloudwatch_datetime(&query.end_time))
            .period(query.period_seconds)
            .set_statistics(Some(statistics))
            .send()
            .await
            .context("GetMetricStatistics request failed")?;

        response
            .datapoints()
            .iter()
            .map(from_cloudwatch_datapoint)
            .collect()
    }
}

fn to_cloudwatch_statistic(kind: StatisticKind) -> Statistic {
    match kind {
        StatisticKind::Average => Statistic::Average,
        StatisticKind::Sum => Statistic::Sum,
        StatisticKind::Maximum => Statistic::Maximum,
        StatisticKind::Minimum => Statistic::Minimum,
    }
}

fn to_cloudwatch_datetime(datetime: &LambdaDateTime) -> DateTime {
    let (seconds, nanos) = datetime.to_unix_seconds_and_nanos();
    DateTime::from_secs_and_nanos(seconds, nanos)
}

fn from_cloudwatch_datapoint(datapoint: &CloudWatchDatapoint) -> Result<Datapoint> {
    let timestamp = datapoint
        .timestamp()
        .ok_or_else(|| anyhow!("Datapoint without timestamp in response"))?;

    Ok(Datapoint {
        timestamp: LambdaDateTime::from_unix_seconds_and_nanos(
            timestamp.secs(),
            timestamp.subsec_nanos(),
        ),
        average: datapoint.average(),
        sum: datapoint.sum(),
        maximum: datapoint.maximum(),
        minimum: datapoint.minimum(),
    })
}
