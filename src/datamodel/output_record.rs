use super::MetricName;
use std::collections::BTreeMap;

/// Values collected during one run, keyed by metric name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRecord {
    values: BTreeMap<MetricName, f64>,
}

impl OutputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning the one it replaced.
    pub fn insert(&mut self, name: MetricName, value: f64) -> Option<f64> {
        self.values.insert(name, value)
    }

    pub fn get(&self, name: MetricName) -> Option<f64> {
        self.values.get(&name).copied()
    }

    pub fn remove(&mut self, name: MetricName) -> Option<f64> {
        self.values.remove(&name)
    }

    pub fn contains(&self, name: MetricName) -> bool {
        self.values.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(MetricName, f64)> for OutputRecord {
    fn from_iter<T: IntoIterator<Item = (MetricName, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(MetricName, f64); N]> for OutputRecord {
    fn from(values: [(MetricName, f64); N]) -> Self {
        values.into_iter().collect()
    }
}
