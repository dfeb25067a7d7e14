// File: crates/sunpath-fetch/src/sampler.rs
// Summary: Day sampler; one lookup per step boundary, failed lookups are logged and skipped.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use sunpath_core::types::{day_boundaries, time_label, SAMPLE_STEP_MINUTES};
use sunpath_core::{Location, Sample};

use crate::config::SamplerConfig;
use crate::source::PositionSource;

/// Samples of one day in ascending time order, plus whatever metadata the
/// service reported alongside them.
#[derive(Debug, Clone, Default)]
pub struct DayPath {
    pub samples: Vec<Sample>,
    pub city: Option<String>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

pub struct Sampler<S> {
    source: S,
    step_minutes: u32,
    concurrency: usize,
}

impl<S: PositionSource> Sampler<S> {
    /// Quarter-hour steps, one request at a time.
    pub fn new(source: S) -> Self {
        Self { source, step_minutes: SAMPLE_STEP_MINUTES, concurrency: 1 }
    }

    pub fn from_config(source: S, config: &SamplerConfig) -> Self {
        Self::new(source)
            .with_step_minutes(config.step_minutes)
            .with_concurrency(config.concurrency)
    }

    pub fn with_step_minutes(mut self, minutes: u32) -> Self {
        self.step_minutes = minutes.max(1);
        self
    }

    /// Allow up to `n` lookups in flight; results still come back in boundary order.
    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    /// Look up every boundary of `date` from 00:00 and collect the day.
    /// A failed lookup drops its sample; the rest keep their order.
    pub async fn sample_day(&self, location: &Location, date: NaiveDate) -> DayPath {
        let boundaries = day_boundaries(self.step_minutes);
        let requested = boundaries.len();

        let results = stream::iter(boundaries)
            .map(|time| async move { (time, self.source.position(location, date, time).await) })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        let mut day = DayPath { samples: Vec::with_capacity(requested), ..DayPath::default() };
        for (time, result) in results {
            match result {
                Ok(reading) => {
                    if day.city.is_none() { day.city = reading.city; }
                    if day.sunrise.is_none() { day.sunrise = reading.sunrise; }
                    if day.sunset.is_none() { day.sunset = reading.sunset; }
                    day.samples.push(Sample::at(time, reading.sun_altitude, reading.sun_azimuth));
                }
                Err(err) => {
                    tracing::warn!("error calculating sun position for {} at {}: {}", location, time_label(time), err);
                }
            }
        }

        tracing::info!(
            "sampled {} of {} positions for {} on {}",
            day.samples.len(),
            requested,
            location,
            date
        );
        day
    }
}
