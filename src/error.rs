//! Error types for the fetch, write and read phases.

use std::path::PathBuf;

/// Failure of a single page request. Stops pagination; never retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid endpoint {endpoint}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}

/// Failure while writing the data file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write CSV row")]
    Csv(#[from] csv::Error),
    #[error("failed to flush data file")]
    Io(#[from] std::io::Error),
}

/// Failure while reading the data file back.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to parse CSV")]
    Csv(#[from] csv::Error),
    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}
