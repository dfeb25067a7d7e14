// File: crates/sunpath-core/src/types.rs
// Summary: Shared types and constants (surface size, samples, locations, chart requests).

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Minutes between two consecutive samples of a day.
pub const SAMPLE_STEP_MINUTES: u32 = 15;
/// Samples per day at the default step (00:00 through 23:45).
pub const SAMPLES_PER_DAY: usize = (24 * 60 / SAMPLE_STEP_MINUTES) as usize;

/// One position sample of the sun at a given time of day.
/// Contract: `hour_of_day` in [0, 24); `altitude` in [-90, 90] when present.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub hour_of_day: f64,
    pub altitude: Option<f64>,
    pub azimuth: Option<f64>,
    pub time_label: String,
}

impl Sample {
    pub fn new(hour_of_day: f64, altitude: Option<f64>, azimuth: Option<f64>, time_label: impl Into<String>) -> Self {
        Self { hour_of_day, altitude, azimuth, time_label: time_label.into() }
    }

    /// Build a sample for a wall-clock boundary; the label is rendered as `HH:MM`.
    pub fn at(time: NaiveTime, altitude: Option<f64>, azimuth: Option<f64>) -> Self {
        Self::new(decimal_hour(time), altitude, azimuth, time_label(time))
    }

    /// A sample is valid when its altitude is present.
    pub fn is_valid(&self) -> bool { self.altitude.is_some() }
}

/// Where the sun is observed from.
#[derive(Clone, Debug, PartialEq)]
pub enum Location {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

impl Location {
    pub fn city(name: impl Into<String>) -> Self { Location::City(name.into()) }
    pub fn coords(lat: f64, lon: f64) -> Self { Location::Coordinates { lat, lon } }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::City(name) => write!(f, "{name}"),
            Location::Coordinates { lat, lon } => write!(f, "{lat:.4}, {lon:.4}"),
        }
    }
}

/// Transient input of one chart render.
#[derive(Clone, Debug)]
pub struct ChartRequest {
    pub location: Location,
    pub date: NaiveDate,
    pub selected_time: Option<String>,
}

impl ChartRequest {
    pub fn new(location: Location, date: NaiveDate) -> Self {
        Self { location, date, selected_time: None }
    }

    pub fn with_selected_time(mut self, time: impl Into<String>) -> Self {
        self.selected_time = Some(time.into());
        self
    }
}

/// Hours + minutes/60 of a wall-clock time.
pub fn decimal_hour(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

/// `HH:MM` label of a wall-clock time.
pub fn time_label(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Every step boundary of one day, starting at 00:00.
/// A zero step is treated as one minute; the last boundary is always before 24:00.
pub fn day_boundaries(step_minutes: u32) -> Vec<NaiveTime> {
    let step = step_minutes.max(1);
    (0..24 * 60)
        .step_by(step as usize)
        .filter_map(|m| NaiveTime::from_hms_opt(m / 60, m % 60, 0))
        .collect()
}
