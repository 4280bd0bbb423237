use super::{LambdaDateTime, StatisticKind};

/// One aggregated sample returned by the remote store.
///
/// Only the statistics that were requested are populated, so every field
/// beside the timestamp is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Datapoint {
    pub timestamp: LambdaDateTime,
    pub average: Option<f64>,
    pub sum: Option<f64>,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
}

impl Datapoint {
    pub fn new(timestamp: LambdaDateTime) -> Self {
        Self {
            timestamp,
            average: None,
            sum: None,
            maximum: None,
            minimum: None,
        }
    }

    pub fn with_statistic(mut self, kind: StatisticKind, value: f64) -> Self {
        match kind {
            StatisticKind::Average => self.average = Some(value),
            StatisticKind::Sum => self.sum = Some(value),
            StatisticKind::Maximum => self.maximum = Some(value),
            StatisticKind::Minimum => self.minimum = Some(value),
        }
        self
    }

    pub fn statistic(&self, kind: StatisticKind) -> Option<f64> {
        match kind {
            StatisticKind::Average => self.average,
            StatisticKind::Sum => self.sum,
            StatisticKind::Maximum => self.maximum,
            StatisticKind::Minimum => self.minimum,
        }
    }
}
