use tracing::error;

use crate::datamodel::{Datapoint, MetricGroup, OutputRecord};

/// Copies the statistics `group` asked for from `datapoint` into `record`,
/// overwriting any previous value under the same names.
pub fn merge(record: &mut OutputRecord, datapoint: &Datapoint, group: &MetricGroup) {
    for output in group.outputs {
        match datapoint.statistic(output.statistic) {
            Some(value) => {
                record.insert(output.name, value);
            }
            // The fetcher only hands out datapoints carrying every requested statistic
            None => error!(
                metric = group.remote_name,
                statistic = %output.statistic,
                "Selected datapoint lacks a requested statistic"
            ),
        }
    }
}
