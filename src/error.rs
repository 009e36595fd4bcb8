use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure between request construction and receiving the response body.
/// None of these are retried; the pipeline stops before any file is written.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("malformed header {0:?}: expected \"Key: Value\"")]
    MalformedHeader(String),

    #[error("invalid header name or value in {0:?}")]
    InvalidHeader(String),

    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("error scraping '{url}': {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("error scraping '{url}': HTTP status {status}")]
    Status { url: String, status: StatusCode },
}

/// Failure while persisting the JSON result.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to encode results as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level error for the pipeline. Both kinds reach the same reporting
/// point in `main`: message on stderr, exit code 1.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
