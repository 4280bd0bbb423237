pub mod catalog;
pub mod datapoint;
pub mod lambda_datetime;
pub mod metric_group;
pub mod metric_name;
pub mod output_record;
pub mod statistic_kind;

pub use catalog::{METRIC_CATALOG, metric_catalog};
pub use datapoint::Datapoint;
pub use lambda_datetime::{LambdaDateTime, LambdaDateTimeExt};
pub use metric_group::{MetricGroup, MetricOutput};
pub use metric_name::MetricName;
pub use output_record::OutputRecord;
pub use statistic_kind::StatisticKind;
