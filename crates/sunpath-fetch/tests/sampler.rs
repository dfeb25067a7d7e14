// File: crates/sunpath-fetch/tests/sampler.rs
// Purpose: Day sampling against an in-memory position source (ordering, skips, fan-out).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Timelike};
use sunpath_core::Location;
use sunpath_fetch::{FetchError, PositionReading, PositionSource, Sampler, SamplerConfig};

#[derive(Default)]
struct FakeSource {
    fail_at: Vec<NaiveTime>,
    calls: Mutex<Vec<NaiveTime>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeSource {
    fn failing_at(times: &[(u32, u32)]) -> Self {
        Self {
            fail_at: times.iter().map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()).collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PositionSource for FakeSource {
    async fn position(&self, _location: &Location, _date: NaiveDate, time: NaiveTime) -> Result<PositionReading, FetchError> {
        self.calls.lock().unwrap().push(time);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(1)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_at.contains(&time) {
            return Err(FetchError::Status { status: 503, body: "unavailable".into() });
        }
        let hour = time.hour() as f64 + time.minute() as f64 / 60.0;
        // Altitude is only reported while the sun is up.
        let altitude = if (5.0..20.0).contains(&hour) { Some(70.0 * (std::f64::consts::PI * (hour - 5.0) / 15.0).sin()) } else { None };
        Ok(PositionReading {
            sun_altitude: altitude,
            sun_azimuth: Some(hour * 15.0),
            city: if hour >= 1.0 { Some("New York".into()) } else { None },
            sunrise: Some("05:25".into()),
            sunset: Some("20:31".into()),
        })
    }
}

fn date() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 6, 21).unwrap() }
fn nyc() -> Location { Location::coords(40.0, -74.0) }

#[tokio::test]
async fn full_day_issues_96_sequential_requests() {
    let source = Arc::new(FakeSource::default());
    let sampler = Sampler::new(source.clone());
    let day = sampler.sample_day(&nyc(), date()).await;

    assert_eq!(source.calls.lock().unwrap().len(), 96);
    assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    assert_eq!(day.samples.len(), 96);
    assert_eq!(day.samples[0].time_label, "00:00");
    assert_eq!(day.samples[95].time_label, "23:45");
    assert!(day.samples.windows(2).all(|w| w[0].hour_of_day < w[1].hour_of_day));
}

#[tokio::test]
async fn failed_request_is_skipped_not_fatal() {
    let source = Arc::new(FakeSource::failing_at(&[(10, 30)]));
    let day = Sampler::new(source.clone()).sample_day(&nyc(), date()).await;

    assert_eq!(source.calls.lock().unwrap().len(), 96);
    assert_eq!(day.samples.len(), 95);
    assert!(day.samples.iter().all(|s| s.hour_of_day != 10.5));
    assert!(day.samples.windows(2).all(|w| w[0].hour_of_day < w[1].hour_of_day));
    // Neighbours keep their own hours
    let idx = day.samples.iter().position(|s| s.time_label == "10:15").unwrap();
    assert_eq!(day.samples[idx + 1].time_label, "10:45");
    assert_eq!(day.samples[idx + 1].hour_of_day, 10.75);
}

#[tokio::test]
async fn null_altitude_is_kept_as_absent() {
    let day = Sampler::new(FakeSource::default()).sample_day(&Location::city("New York"), date()).await;
    let night = &day.samples[0];
    assert_eq!(night.altitude, None);
    assert_eq!(night.azimuth, Some(0.0));
    assert!(day.samples.iter().any(|s| s.altitude.is_some()));
}

#[tokio::test]
async fn metadata_comes_from_first_reading_that_has_it() {
    let day = Sampler::new(FakeSource::default()).sample_day(&nyc(), date()).await;
    assert_eq!(day.city.as_deref(), Some("New York"));
    assert_eq!(day.sunrise.as_deref(), Some("05:25"));
    assert_eq!(day.sunset.as_deref(), Some("20:31"));
}

#[tokio::test]
async fn bounded_fan_out_keeps_boundary_order() {
    let source = Arc::new(FakeSource::failing_at(&[(0, 15), (23, 45)]));
    let sequential = Sampler::new(source.clone()).sample_day(&nyc(), date()).await;

    let parallel_source = Arc::new(FakeSource::failing_at(&[(0, 15), (23, 45)]));
    let sampler = Sampler::new(parallel_source.clone()).with_concurrency(4);
    let parallel = sampler.sample_day(&nyc(), date()).await;

    let max = parallel_source.max_in_flight.load(Ordering::SeqCst);
    assert!(max > 1 && max <= 4, "max in flight was {max}");
    assert_eq!(parallel.samples.len(), 94);
    assert_eq!(parallel.samples, sequential.samples);
}

#[tokio::test]
async fn config_controls_step_and_concurrency() {
    let cfg = SamplerConfig { step_minutes: 60, concurrency: 2, ..SamplerConfig::default() };
    let source = Arc::new(FakeSource::default());
    let day = Sampler::from_config(source.clone(), &cfg).sample_day(&nyc(), date()).await;
    assert_eq!(source.calls.lock().unwrap().len(), 24);
    assert_eq!(day.samples.len(), 24);
    assert_eq!(day.samples[23].time_label, "23:00");
}
