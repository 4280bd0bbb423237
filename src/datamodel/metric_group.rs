use super::{MetricName, StatisticKind};

/// One output value extracted from a remote response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricOutput {
    pub name: MetricName,
    pub statistic: StatisticKind,
}

/// One remote query, possibly yielding several output values
/// (e.g. average, maximum and minimum of the same quantity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricGroup {
    pub remote_name: &'static str,
    pub outputs: &'static [MetricOutput],
}

impl MetricGroup {
    /// Statistics to request, in the order the outputs list them.
    pub fn statistics(&self) -> Vec<StatisticKind> {
        self.outputs.iter().map(|output| output.statistic).collect()
    }
}
