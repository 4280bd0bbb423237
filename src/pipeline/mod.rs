//! One collection cycle: fetch every catalog group, keep the latest
//! datapoint of each, merge them into a record and derive the success count.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::datamodel::{Datapoint, LambdaDateTime, METRIC_CATALOG, MetricGroup, OutputRecord};
use crate::error::CollectError;
use crate::fetcher::{MetricStatisticsSource, fetch};

pub mod merger;
pub mod selector;
pub mod transformer;

pub use merger::merge;
pub use selector::select_latest;
pub use transformer::transform;

#[derive(Debug, Clone)]
pub struct Collector {
    source: Arc<dyn MetricStatisticsSource>,
    resource_id: String,
    catalog: &'static [MetricGroup],
}

impl Collector {
    pub fn new(source: Arc<dyn MetricStatisticsSource>, resource_id: impl Into<String>) -> Self {
        Self {
            source,
            resource_id: resource_id.into(),
            catalog: METRIC_CATALOG,
        }
    }

    /// Latest datapoint of one group.
    pub async fn latest_datapoint(
        &self,
        group: &MetricGroup,
        now: LambdaDateTime,
    ) -> Result<Datapoint, CollectError> {
        let datapoints = fetch(self.source.as_ref(), group, &self.resource_id, now).await?;
        select_latest(&datapoints)
            .cloned()
            .ok_or_else(|| CollectError::no_data(group.remote_name))
    }

    /// Runs the groups in catalog order. A failing group is logged and left
    /// out of the record; it never stops the remaining groups.
    pub async fn collect(&self, now: LambdaDateTime) -> OutputRecord {
        let mut record = OutputRecord::new();

        for group in self.catalog {
            match self.latest_datapoint(group, now).await {
                Ok(datapoint) => merge(&mut record, &datapoint, group),
                Err(err) => warn!(metric = group.remote_name, "Skipping metric: {}", err),
            }
        }

        let record = transform(record);
        debug!(values = record.len(), "Collection finished");
        record
    }
}
