// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LitmusError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid base URL: {0}. Please provide a valid URL.")]
    InvalidUrl(String),

    #[error("An error occurred while making the request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("'id' field not found in the response")]
    MissingRunId,

    #[error("Check interval {interval}s leaves no polling attempts within timeout {timeout}s")]
    NoPollingBudget { interval: u64, timeout: u64 },

    #[error("Timeout ({timeout}) reached. Test did not complete in time.")]
    Timeout { timeout: u64 },

    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LitmusError>;
