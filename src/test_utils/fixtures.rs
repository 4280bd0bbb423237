use hifitime::Unit;

use crate::datamodel::{Datapoint, LambdaDateTime, LambdaDateTimeExt, StatisticKind};

/// Jan 1, 2024 00:00:00 UTC
pub fn fixed_now() -> LambdaDateTime {
    LambdaDateTime::from_unix_seconds_and_nanos(1704067200, 0)
}

/// Three sum datapoints at `now`, `now + 60s` and `now - 60s`, in that order.
/// The latest one holds 25.
pub fn sum_datapoints(now: LambdaDateTime) -> Vec<Datapoint> {
    vec![
        Datapoint::new(now).with_statistic(StatisticKind::Sum, 30.0),
        Datapoint::new(now + 60 * Unit::Second).with_statistic(StatisticKind::Sum, 25.0),
        Datapoint::new(now - 60 * Unit::Second).with_statistic(StatisticKind::Sum, 35.0),
    ]
}

/// Duration datapoints laid out like [`sum_datapoints`]. The latest one
/// holds 25 / 45 / 5 (average / maximum / minimum).
pub fn duration_datapoints(now: LambdaDateTime) -> Vec<Datapoint> {
    let point = |at: LambdaDateTime, average: f64, maximum: f64, minimum: f64| {
        Datapoint::new(at)
            .with_statistic(StatisticKind::Average, average)
            .with_statistic(StatisticKind::Maximum, maximum)
            .with_statistic(StatisticKind::Minimum, minimum)
    };
    vec![
        point(now, 30.0, 50.0, 10.0),
        point(now + 60 * Unit::Second, 25.0, 45.0, 5.0),
        point(now - 60 * Unit::Second, 35.0, 55.0, 15.0),
    ]
}
