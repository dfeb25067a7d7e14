// File: crates/demo/src/main.rs
// Summary: Demo samples one day of sun positions for a place and renders the sun path chart to PNG.
// Usage: sunpath-demo <city|lat,lon> [YYYY-MM-DD] [HH:MM] [out.png]

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use sunpath_core::{ChartRequest, Location, RenderOptions, SunPathChart};
use sunpath_fetch::{HttpPositionSource, Sampler, SamplerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = parse_request(&args)?;
    let out = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| out_name(&request));

    // Optional sunpath.{toml,json,yaml} next to the working directory
    let config = SamplerConfig::load("sunpath").context("loading sampler configuration")?;
    tracing::info!("using position service at {}", config.endpoint);

    let source = HttpPositionSource::from_config(&config).context("building HTTP client")?;
    let day = Sampler::from_config(source, &config)
        .sample_day(&request.location, request.date)
        .await;

    if let (Some(rise), Some(set)) = (&day.sunrise, &day.sunset) {
        println!("Sunrise {rise}, sunset {set}");
    }
    let valid = day.samples.iter().filter(|s| s.is_valid()).count();
    println!("Collected {} samples ({} with altitude)", day.samples.len(), valid);

    let mut chart = SunPathChart::new(day.samples);
    if let Some(t) = &request.selected_time {
        chart = chart.with_selected_time(t.clone());
    }
    chart
        .render_to_png(&RenderOptions::default(), &out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// `<city|lat,lon> [date] [time]`; the date defaults to today.
fn parse_request(args: &[String]) -> Result<ChartRequest> {
    let place = args.first().context("missing location: pass a city name or lat,lon")?;
    let location = parse_location(place)?;

    let date = match args.get(1) {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{d}', expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let mut request = ChartRequest::new(location, date);
    if let Some(t) = args.get(2) {
        request = request.with_selected_time(t.clone());
    }
    Ok(request)
}

fn parse_location(raw: &str) -> Result<Location> {
    if let Some((lat, lon)) = raw.split_once(',') {
        if let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
            anyhow::ensure!((-90.0..=90.0).contains(&lat), "latitude {lat} out of range");
            anyhow::ensure!((-180.0..=180.0).contains(&lon), "longitude {lon} out of range");
            return Ok(Location::coords(lat, lon));
        }
    }
    Ok(Location::city(raw.trim()))
}

/// Produce output file name like target/out/sunpath_<place>_<date>.png
fn out_name(request: &ChartRequest) -> PathBuf {
    let place: String = request
        .location
        .to_string()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    let mut out = PathBuf::from("target/out");
    out.push(format!("sunpath_{}_{}.png", place, request.date.format("%Y-%m-%d")));
    out
}
