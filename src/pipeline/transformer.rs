use crate::datamodel::{MetricName, OutputRecord};

/// Derives `invocations_success` from the invocation total and the error
/// count, then drops the total.
///
/// Without a total nothing is derived. A missing error count is treated as
/// zero errors.
pub fn transform(mut record: OutputRecord) -> OutputRecord {
    if let Some(total) = record.remove(MetricName::InvocationsTotal) {
        let errors = record.get(MetricName::InvocationsError).unwrap_or(0.0);
        record.insert(MetricName::InvocationsSuccess, total - errors);
    }
    record
}
