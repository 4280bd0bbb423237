use crate::datamodel::Datapoint;

/// Returns the most recent datapoint, or `None` for an empty slice.
///
/// A candidate replaces the current best unless it is strictly earlier, so
/// on equal timestamps the one appearing last in `datapoints` wins. The
/// result depends on input order in that case and callers relying on it
/// must keep the order the store returned.
pub fn select_latest(datapoints: &[Datapoint]) -> Option<&Datapoint> {
    let mut latest: Option<&Datapoint> = None;
    for candidate in datapoints {
        match latest {
            Some(best) if candidate.timestamp < best.timestamp => {}
            _ => latest = Some(candidate),
        }
    }
    latest
}
