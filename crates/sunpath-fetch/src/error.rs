// File: crates/sunpath-fetch/src/error.rs
// Summary: Errors of a single position lookup and of sampler configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to position service failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("position service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed position response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid sampler configuration: {0}")]
    Config(#[from] config::ConfigError),
}
