// File: crates/sunpath-fetch/src/config.rs
// Summary: Sampler settings with defaults, optionally layered from a file and SUNPATH_* env vars.

use serde::Deserialize;

use crate::error::FetchError;
use sunpath_core::types::SAMPLE_STEP_MINUTES;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:10040/sun-pos/api/sun-position";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SamplerConfig {
    /// Full URL of the position lookup endpoint, without query string.
    pub endpoint: String,
    pub step_minutes: u32,
    /// Requests in flight at once; 1 keeps lookups strictly sequential.
    pub concurrency: usize,
    pub request_timeout_secs: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            step_minutes: SAMPLE_STEP_MINUTES,
            concurrency: 1,
            request_timeout_secs: None,
        }
    }
}

impl SamplerConfig {
    /// Defaults, overridden by the optional file `name` (any format the
    /// `config` crate detects), overridden by `SUNPATH_*` environment variables.
    pub fn load(name: &str) -> Result<Self, FetchError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("SUNPATH"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
