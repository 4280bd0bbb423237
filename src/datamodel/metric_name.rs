use std::fmt;

/// Every key an output record may hold.
///
/// `InvocationsTotal` only lives between merging and transforming: it is the
/// input of the success count and never leaves the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricName {
    InvocationsTotal,
    InvocationsSuccess,
    InvocationsError,
    InvocationsThrottles,
    DurationAvg,
    DurationMax,
    DurationMin,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::InvocationsTotal => "invocations_total",
            MetricName::InvocationsSuccess => "invocations_success",
            MetricName::InvocationsError => "invocations_error",
            MetricName::InvocationsThrottles => "invocations_throttles",
            MetricName::DurationAvg => "duration_avg",
            MetricName::DurationMax => "duration_max",
            MetricName::DurationMin => "duration_min",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
