use anyhow::Result;
use lambda_stats::datamodel::{MetricName, OutputRecord, StatisticKind, catalog::find_group};
use lambda_stats::error::CollectError;
use lambda_stats::fetcher::{Dimension, StatisticsQuery};
use lambda_stats::pipeline::Collector;
use lambda_stats::test_utils::MockSource;
use lambda_stats::test_utils::fixtures::{duration_datapoints, fixed_now, sum_datapoints};
use std::sync::Arc;

fn healthy_source() -> MockSource {
    let now = fixed_now();
    MockSource::new()
        .with_datapoints("Invocations", sum_datapoints(now))
        .with_datapoints("Errors", sum_datapoints(now))
        .with_datapoints("Throttles", sum_datapoints(now))
        .with_datapoints("Duration", duration_datapoints(now))
}

mod latest_datapoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_single_statistic() -> Result<()> {
        // Given: three sum datapoints at t, t+60s, t-60s
        let source = Arc::new(healthy_source());
        let collector = Collector::new(source.clone(), "myFunction");

        // When: the latest Throttles datapoint is requested
        let datapoint = collector
            .latest_datapoint(find_group("Throttles").unwrap(), fixed_now())
            .await?;

        // Then: the one at t+60s is selected
        assert_eq!(datapoint.sum, Some(25.0));
        assert_eq!(datapoint.average, None);
        assert_eq!(source.request_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_multiple_statistics_at_once() -> Result<()> {
        let source = Arc::new(healthy_source());
        let collector = Collector::new(source.clone(), "myFunction");

        let datapoint = collector
            .latest_datapoint(find_group("Duration").unwrap(), fixed_now())
            .await?;

        assert_eq!(datapoint.average, Some(25.0));
        assert_eq!(datapoint.maximum, Some(45.0));
        assert_eq!(datapoint.minimum, Some(5.0));
        assert_eq!(datapoint.sum, None);

        // One request carrying all three statistics
        let queries = source.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0].statistics,
            vec![
                StatisticKind::Average,
                StatisticKind::Maximum,
                StatisticKind::Minimum
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_no_data() {
        let source = Arc::new(MockSource::new().with_datapoints("Errors", vec![]));
        let collector = Collector::new(source, "myFunction");

        let result = collector
            .latest_datapoint(find_group("Errors").unwrap(), fixed_now())
            .await;
        assert!(matches!(result, Err(CollectError::NoData { .. })));
    }
}

mod collect_tests {
    use super::*;

    #[tokio::test]
    async fn test_collect_all_groups() {
        // Given: every group answers
        let source = Arc::new(healthy_source());
        let collector = Collector::new(source.clone(), "myFunction");

        // When: a full cycle runs
        let record = collector.collect(fixed_now()).await;

        // Then: the success count is derived and the total is gone
        assert_eq!(
            record,
            OutputRecord::from([
                (MetricName::InvocationsSuccess, 0.0),
                (MetricName::InvocationsError, 25.0),
                (MetricName::InvocationsThrottles, 25.0),
                (MetricName::DurationAvg, 25.0),
                (MetricName::DurationMax, 45.0),
                (MetricName::DurationMin, 5.0),
            ])
        );
        assert!(!record.contains(MetricName::InvocationsTotal));
    }

    #[tokio::test]
    async fn test_groups_are_fetched_in_catalog_order() {
        let source = Arc::new(healthy_source());
        Collector::new(source.clone(), "myFunction")
            .collect(fixed_now())
            .await;

        let names: Vec<String> = source
            .queries()
            .into_iter()
            .map(|query| query.metric_name)
            .collect();
        assert_eq!(names, vec!["Invocations", "Errors", "Throttles", "Duration"]);
    }

    #[tokio::test]
    async fn test_every_query_is_scoped_to_the_function() {
        let source = Arc::new(healthy_source());
        Collector::new(source.clone(), "myFunction")
            .collect(fixed_now())
            .await;

        let expected_dimensions = vec![Dimension {
            name: "FunctionName".to_string(),
            value: "myFunction".to_string(),
        }];
        for StatisticsQuery {
            namespace,
            dimensions,
            period_seconds,
            ..
        } in source.queries()
        {
            assert_eq!(namespace, "AWS/Lambda");
            assert_eq!(dimensions, expected_dimensions);
            assert_eq!(period_seconds, 600);
        }
    }

    #[tokio::test]
    async fn test_no_data_group_is_skipped() {
        // Given: Errors has no datapoint in the window
        let now = fixed_now();
        let source = Arc::new(
            MockSource::new()
                .with_datapoints("Invocations", sum_datapoints(now))
                .with_datapoints("Errors", vec![])
                .with_datapoints("Throttles", sum_datapoints(now))
                .with_datapoints("Duration", duration_datapoints(now)),
        );

        // When: a full cycle runs
        let record = Collector::new(source.clone(), "myFunction")
            .collect(now)
            .await;

        // Then: no error key, success equals the total, later groups still ran
        assert!(!record.contains(MetricName::InvocationsError));
        assert_eq!(record.get(MetricName::InvocationsSuccess), Some(25.0));
        assert_eq!(record.get(MetricName::InvocationsThrottles), Some(25.0));
        assert_eq!(record.get(MetricName::DurationAvg), Some(25.0));
        assert_eq!(source.request_count(), 4);
    }

    #[tokio::test]
    async fn test_upstream_failures_are_not_fatal() {
        // Given: the first and last groups fail
        let now = fixed_now();
        let source = Arc::new(
            MockSource::new()
                .with_failure("Invocations", "AccessDenied")
                .with_datapoints("Errors", sum_datapoints(now))
                .with_datapoints("Throttles", sum_datapoints(now))
                .with_failure("Duration", "connection reset"),
        );

        // When: a full cycle runs
        let record = Collector::new(source, "myFunction").collect(now).await;

        // Then: only the answered groups appear, and nothing is derived
        assert_eq!(
            record,
            OutputRecord::from([
                (MetricName::InvocationsError, 25.0),
                (MetricName::InvocationsThrottles, 25.0),
            ])
        );
    }

    #[tokio::test]
    async fn test_everything_failing_yields_empty_record() {
        let record = Collector::new(Arc::new(MockSource::new()), "myFunction")
            .collect(fixed_now())
            .await;
        assert!(record.is_empty());
    }
}
