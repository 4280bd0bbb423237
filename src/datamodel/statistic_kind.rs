use std::fmt;

/// Aggregation requested from the remote store, and the datapoint field
/// that carries its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticKind {
    Average,
    Sum,
    Maximum,
    Minimum,
}

impl StatisticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticKind::Average => "Average",
            StatisticKind::Sum => "Sum",
            StatisticKind::Maximum => "Maximum",
            StatisticKind::Minimum => "Minimum",
        }
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
