// File: crates/sunpath-fetch/src/source.rs
// Summary: Position lookup seam (trait) and its HTTP implementation over reqwest.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use sunpath_core::types::time_label;
use sunpath_core::Location;

use crate::config::SamplerConfig;
use crate::error::FetchError;

/// One answer of the position service. Angles are null when the service
/// cannot compute them; the extra fields are optional metadata.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PositionReading {
    pub sun_altitude: Option<f64>,
    pub sun_azimuth: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
}

/// Looks up where the sun is for a place at a local date and time.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn position(&self, location: &Location, date: NaiveDate, time: NaiveTime) -> Result<PositionReading, FetchError>;
}

#[async_trait]
impl<T: PositionSource + ?Sized> PositionSource for Arc<T> {
    async fn position(&self, location: &Location, date: NaiveDate, time: NaiveTime) -> Result<PositionReading, FetchError> {
        (**self).position(location, date, time).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpPositionSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPositionSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    pub fn from_config(config: &SamplerConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self { client: builder.build()?, endpoint: config.endpoint.clone() })
    }

    /// `<endpoint>?city=..|lat=..&lon=..` followed by `&date=YYYY-MM-DD&time=HH:MM`.
    pub fn build_query_url(&self, location: &Location, date: NaiveDate, time: NaiveTime) -> String {
        let place = match location {
            Location::City(name) => format!("city={}", urlencoding::encode(name)),
            Location::Coordinates { lat, lon } => format!("lat={lat}&lon={lon}"),
        };
        format!(
            "{}?{}&date={}&time={}",
            self.endpoint,
            place,
            date.format("%Y-%m-%d"),
            time_label(time)
        )
    }
}

#[async_trait]
impl PositionSource for HttpPositionSource {
    async fn position(&self, location: &Location, date: NaiveDate, time: NaiveTime) -> Result<PositionReading, FetchError> {
        let url = self.build_query_url(location, date, time);
        tracing::debug!("requesting sun position: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 6, 21).unwrap() }
    fn t(h: u32, m: u32) -> NaiveTime { NaiveTime::from_hms_opt(h, m, 0).unwrap() }

    #[test]
    fn url_with_coordinates() {
        let src = HttpPositionSource::new("http://svc/sun-pos/api/sun-position");
        let url = src.build_query_url(&Location::coords(40.0, -74.0), d(), t(6, 45));
        assert_eq!(url, "http://svc/sun-pos/api/sun-position?lat=40&lon=-74&date=2024-06-21&time=06:45");
    }

    #[test]
    fn url_with_encoded_city() {
        let src = HttpPositionSource::new("http://svc/api");
        let url = src.build_query_url(&Location::city("São Paulo"), d(), t(0, 0));
        assert_eq!(url, "http://svc/api?city=S%C3%A3o%20Paulo&date=2024-06-21&time=00:00");
    }

    #[test]
    fn reading_accepts_nulls_and_extra_fields() {
        let r: PositionReading = serde_json::from_str(
            r#"{"sun_altitude": null, "sun_azimuth": 12.5, "timestamp": "2024-06-21T00:00:00Z", "sunrise": "05:25"}"#,
        )
        .unwrap();
        assert_eq!(r.sun_altitude, None);
        assert_eq!(r.sun_azimuth, Some(12.5));
        assert_eq!(r.sunrise.as_deref(), Some("05:25"));
        assert!(r.city.is_none());
    }

    #[test]
    fn reading_with_missing_angles_is_null() {
        let r: PositionReading = serde_json::from_str("{}").unwrap();
        assert_eq!(r, PositionReading::default());
    }
}
