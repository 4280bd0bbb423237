#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod datamodel;
pub mod error;
pub mod fetcher;
pub mod output;
pub mod pipeline;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
