//! Plugin protocol of the monitoring agent: graph definitions on request,
//! metric values otherwise.

use anyhow::Result;
use std::io::Write;

use crate::datamodel::{LambdaDateTime, LambdaDateTimeExt, OutputRecord};

pub mod graph;

pub use graph::{GraphDefinitions, graph_definitions};

/// Set by the agent when it wants graph definitions instead of values.
pub const PLUGIN_META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";
pub const PLUGIN_META_HEADER: &str = "# mackerel-agent-plugin";

pub fn graph_definitions_requested() -> bool {
    std::env::var(PLUGIN_META_ENV).is_ok_and(|value| !value.is_empty())
}

pub fn write_graph_definitions<W: Write>(writer: &mut W, prefix: &str) -> Result<()> {
    writeln!(writer, "{}", PLUGIN_META_HEADER)?;
    serde_json::to_writer(&mut *writer, &graph_definitions(prefix))?;
    writeln!(writer)?;
    Ok(())
}

/// Writes one `{prefix}.{graph}.{metric}\t{value}\t{epoch}` line per value,
/// graph by graph in definition order. Metrics outside any graph, like the
/// internal invocation total, are not written.
pub fn write_values<W: Write>(
    writer: &mut W,
    prefix: &str,
    record: &OutputRecord,
    now: LambdaDateTime,
) -> Result<()> {
    let epoch = now.to_unix_seconds_i64();

    for (graph_key, graph) in graph_definitions(prefix).graphs {
        for metric in &graph.metrics {
            if let Some(value) = record.get(metric.metric) {
                writeln!(writer, "{}.{}\t{:.6}\t{}", graph_key, metric.name, value, epoch)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::MetricName;

    fn now() -> LambdaDateTime {
        LambdaDateTime::from_unix_seconds_and_nanos(1704067200, 0)
    }

    #[test]
    fn test_write_values() {
        let record = OutputRecord::from([
            (MetricName::InvocationsSuccess, 120.0),
            (MetricName::InvocationsError, 30.0),
            (MetricName::DurationAvg, 250.3),
        ]);

        let mut buffer = Vec::new();
        write_values(&mut buffer, "lambda", &record, now()).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "lambda.duration.duration_avg\t250.300000\t1704067200\n\
             lambda.invocations.invocations_success\t120.000000\t1704067200\n\
             lambda.invocations.invocations_error\t30.000000\t1704067200\n"
        );
    }

    #[test]
    fn test_internal_total_is_not_written() {
        let record = OutputRecord::from([(MetricName::InvocationsTotal, 150.0)]);
        let mut buffer = Vec::new();
        write_values(&mut buffer, "lambda", &record, now()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_graph_definitions_requested() {
        temp_env::with_var(PLUGIN_META_ENV, Some("1"), || {
            assert!(graph_definitions_requested());
        });
        temp_env::with_var(PLUGIN_META_ENV, Some(""), || {
            assert!(!graph_definitions_requested());
        });
        temp_env::with_var_unset(PLUGIN_META_ENV, || {
            assert!(!graph_definitions_requested());
        });
    }
}
