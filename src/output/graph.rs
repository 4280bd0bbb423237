use serde::Serialize;
use std::collections::BTreeMap;

use crate::datamodel::MetricName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphUnit {
    Integer,
    Float,
}

impl Serialize for GraphUnit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            GraphUnit::Integer => "integer",
            GraphUnit::Float => "float",
        })
    }
}

/// A metric as declared to the agent.
#[derive(Debug, Clone, Serialize)]
pub struct GraphMetric {
    #[serde(skip)]
    pub metric: MetricName,
    pub name: &'static str,
    pub label: &'static str,
    pub stacked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    pub label: String,
    pub unit: GraphUnit,
    pub metrics: Vec<GraphMetric>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphDefinitions {
    pub graphs: BTreeMap<String, Graph>,
}

struct GraphLayout {
    key: &'static str,
    label: &'static str,
    unit: GraphUnit,
    stacked: bool,
    metrics: &'static [(MetricName, &'static str)],
}

static GRAPHS: &[GraphLayout] = &[
    GraphLayout {
        key: "invocations",
        label: "Invocations",
        unit: GraphUnit::Integer,
        stacked: true,
        metrics: &[
            (MetricName::InvocationsSuccess, "Success"),
            (MetricName::InvocationsError, "Error"),
            (MetricName::InvocationsThrottles, "Throttles"),
        ],
    },
    GraphLayout {
        key: "duration",
        label: "Duration",
        unit: GraphUnit::Float,
        stacked: false,
        metrics: &[
            (MetricName::DurationAvg, "Average"),
            (MetricName::DurationMax, "Maximum"),
            (MetricName::DurationMin, "Minimum"),
        ],
    },
];

pub fn graph_definitions(prefix: &str) -> GraphDefinitions {
    let label_prefix = title_case(prefix);

    let graphs = GRAPHS
        .iter()
        .map(|graph| {
            let definition = Graph {
                label: format!("{} {}", label_prefix, graph.label),
                unit: graph.unit,
                metrics: graph
                    .metrics
                    .iter()
                    .map(|&(metric, label)| GraphMetric {
                        metric,
                        name: metric.as_str(),
                        label,
                        stacked: graph.stacked,
                    })
                    .collect(),
            };
            (format!("{}.{}", prefix, graph.key), definition)
        })
        .collect();

    GraphDefinitions { graphs }
}

/// Upper-cases the first letter of every word. Words are split on whitespace
/// and ASCII punctuation, so `lambda-prod` becomes `Lambda-Prod`.
fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        word_start = is_separator(c);
    }
    result
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}
