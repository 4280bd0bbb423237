use super::{MetricGroup, MetricName, MetricOutput, StatisticKind};

/// Everything collected on each run, in fetch order.
pub static METRIC_CATALOG: &[MetricGroup] = &[
    MetricGroup {
        remote_name: "Invocations",
        outputs: &[MetricOutput {
            name: MetricName::InvocationsTotal,
            statistic: StatisticKind::Sum,
        }],
    },
    MetricGroup {
        remote_name: "Errors",
        outputs: &[MetricOutput {
            name: MetricName::InvocationsError,
            statistic: StatisticKind::Sum,
        }],
    },
    MetricGroup {
        remote_name: "Throttles",
        outputs: &[MetricOutput {
            name: MetricName::InvocationsThrottles,
            statistic: StatisticKind::Sum,
        }],
    },
    MetricGroup {
        remote_name: "Duration",
        outputs: &[
            MetricOutput {
                name: MetricName::DurationAvg,
                statistic: StatisticKind::Average,
            },
            MetricOutput {
                name: MetricName::DurationMax,
                statistic: StatisticKind::Maximum,
            },
            MetricOutput {
                name: MetricName::DurationMin,
                statistic: StatisticKind::Minimum,
            },
        ],
    },
];

pub fn metric_catalog() -> &'static [MetricGroup] {
    METRIC_CATALOG
}

pub fn find_group(remote_name: &str) -> Option<&'static MetricGroup> {
    METRIC_CATALOG
        .iter()
        .find(|group| group.remote_name == remote_name)
}
