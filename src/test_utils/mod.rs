//! Test utilities: an in-memory statistics source and datapoint fixtures.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::datamodel::Datapoint;
use crate::fetcher::{MetricStatisticsSource, StatisticsQuery};

pub mod fixtures;

#[derive(Debug, Clone)]
enum MockResponse {
    Datapoints(Vec<Datapoint>),
    Failure(String),
}

/// Statistics source answering from canned responses keyed by metric name.
///
/// Every query is recorded. Metrics without a canned response fail like an
/// upstream error would.
#[derive(Debug, Default)]
pub struct MockSource {
    responses: HashMap<String, MockResponse>,
    queries: Mutex<Vec<StatisticsQuery>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_datapoints(mut self, metric_name: &str, datapoints: Vec<Datapoint>) -> Self {
        self.responses
            .insert(metric_name.to_string(), MockResponse::Datapoints(datapoints));
        self
    }

    pub fn with_failure(mut self, metric_name: &str, message: &str) -> Self {
        self.responses
            .insert(metric_name.to_string(), MockResponse::Failure(message.to_string()));
        self
    }

    pub fn queries(&self) -> Vec<StatisticsQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl MetricStatisticsSource for MockSource {
    async fn get_metric_statistics(&self, query: &StatisticsQuery) -> Result<Vec<Datapoint>> {
        self.queries.lock().unwrap().push(query.clone());

        match self.responses.get(&query.metric_name) {
            Some(MockResponse::Datapoints(datapoints)) => Ok(datapoints.clone()),
            Some(MockResponse::Failure(message)) => Err(anyhow!("{}", message)),
            None => Err(anyhow!("Unexpected metric {}", query.metric_name)),
        }
    }
}
