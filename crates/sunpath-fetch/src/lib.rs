// File: crates/sunpath-fetch/src/lib.rs
// Summary: Sampler library entry point; fetches one day of sun positions from a remote service.

pub mod config;
pub mod error;
pub mod sampler;
pub mod source;

pub use config::SamplerConfig;
pub use error::FetchError;
pub use sampler::{DayPath, Sampler};
pub use source::{HttpPositionSource, PositionReading, PositionSource};
