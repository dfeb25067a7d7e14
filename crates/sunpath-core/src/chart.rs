// File: crates/sunpath-core/src/chart.rs
// Summary: Sun path chart and the single-pass drawing pipeline (background, horizon, path, sun marker, axes).

use std::f32::consts::FRAC_PI_4;
use std::path::Path;

use chrono::NaiveTime;

use crate::error::Result;
use crate::grid::{altitude_ticks, hour_ticks};
use crate::scale::ChartScale;
use crate::skia_surface::SkiaSurface;
use crate::surface::{DrawSurface, Point, Rect, Stroke};
use crate::theme::Theme;
use crate::types::{decimal_hour, Sample, HEIGHT, WIDTH};

pub const PATH_WIDTH: f32 = 3.0;
pub const HORIZON_WIDTH: f32 = 1.0;
pub const GRID_WIDTH: f32 = 1.0;
pub const SUN_RADIUS: f32 = 12.0;
pub const SUN_STROKE_WIDTH: f32 = 2.0;
pub const GLOW_RADIUS: f32 = 18.0;
pub const GLOW_WIDTH: f32 = 3.0;
pub const RAY_COUNT: usize = 8;
pub const RAY_INNER: f32 = 15.0;
pub const RAY_OUTER: f32 = 22.0;
pub const RAY_WIDTH: f32 = 2.0;
pub const LABEL_SIZE: f32 = 10.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// When false, tick labels are skipped (grid lines are still drawn).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: Theme::classic(), draw_labels: true }
    }
}

/// One day of samples plus the time to highlight.
pub struct SunPathChart {
    pub samples: Vec<Sample>,
    pub selected_time: Option<String>,
}

impl SunPathChart {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples, selected_time: None }
    }

    pub fn with_selected_time(mut self, time: impl Into<String>) -> Self {
        self.selected_time = Some(time.into());
        self
    }

    /// Paint the chart onto any surface, replacing what was there.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, opts: &RenderOptions) {
        draw_sun_path_chart(surface, &self.samples, self.selected_time.as_deref(), opts);
    }

    /// Render into a fresh raster surface sized by `opts`.
    pub fn render(&self, opts: &RenderOptions) -> Result<SkiaSurface> {
        let mut surface = SkiaSurface::new(opts.width, opts.height)?;
        self.draw(&mut surface, opts);
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render(opts)?.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        self.render(opts)?.write_png(output_png_path)
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.render(opts)?.to_rgba8()
    }
}

/// Draw the full chart in one pass:
/// background, horizon, path, sun marker, hour grid, altitude grid.
pub fn draw_sun_path_chart<S: DrawSurface + ?Sized>(
    surface: &mut S,
    samples: &[Sample],
    selected_time: Option<&str>,
    opts: &RenderOptions,
) {
    let (w, h) = surface.size();
    let (w, h) = (w as f32, h as f32);
    let scale = ChartScale::new(w as f64, h as f64);
    let theme = &opts.theme;

    surface.clear();
    surface.fill_vertical_gradient(Rect::from_wh(w, h), theme.sky, theme.horizon_glow);

    let horizon = scale.horizon_y() as f32;
    surface.stroke_line((0.0, horizon), (w, horizon), Stroke::new(theme.horizon_line, HORIZON_WIDTH));

    let valid = valid_samples(samples);
    if valid.len() > 1 {
        let points: Vec<Point> = valid.iter().filter_map(|s| sample_px(&scale, s)).collect();
        surface.stroke_polyline(&points, Stroke::new(theme.path_stroke, PATH_WIDTH));

        if let Some(center) = marker_sample(&valid, selected_time).and_then(|s| sample_px(&scale, s)) {
            draw_sun(surface, center, theme);
        }
    }

    let grid = Stroke::new(theme.grid, GRID_WIDTH);
    for tick in hour_ticks() {
        let x = scale.x(tick.value) as f32;
        if opts.draw_labels {
            surface.fill_text(&tick.label, (x - 10.0, h - 5.0), LABEL_SIZE, theme.axis_label);
        }
        surface.stroke_line((x, 0.0), (x, h), grid);
    }
    for tick in altitude_ticks() {
        let y = scale.y(tick.value) as f32;
        if opts.draw_labels {
            surface.fill_text(&tick.label, (5.0, y + 3.0), LABEL_SIZE, theme.axis_label);
        }
        surface.stroke_line((0.0, y), (w, y), grid);
    }
}

fn sample_px(scale: &ChartScale, s: &Sample) -> Option<Point> {
    s.altitude.map(|alt| scale.to_px(s.hour_of_day, alt))
}

/// Disc, glow ring and eight rays around `center`.
fn draw_sun<S: DrawSurface + ?Sized>(surface: &mut S, center: Point, theme: &Theme) {
    let (x, y) = center;
    surface.fill_circle(center, SUN_RADIUS, theme.sun_fill);
    surface.stroke_circle(center, SUN_RADIUS, Stroke::new(theme.sun_stroke, SUN_STROKE_WIDTH));
    surface.stroke_circle(center, GLOW_RADIUS, Stroke::new(theme.sun_glow, GLOW_WIDTH));

    let rays = Stroke::new(theme.sun_rays, RAY_WIDTH);
    for i in 0..RAY_COUNT {
        let angle = i as f32 * FRAC_PI_4;
        let (sin, cos) = angle.sin_cos();
        surface.stroke_line(
            (x + cos * RAY_INNER, y + sin * RAY_INNER),
            (x + cos * RAY_OUTER, y + sin * RAY_OUTER),
            rays,
        );
    }
}

/// Samples with a known altitude, in their original order.
pub fn valid_samples(samples: &[Sample]) -> Vec<&Sample> {
    samples.iter().filter(|s| s.is_valid()).collect()
}

/// Parse `HH:MM` into a decimal hour. Anything else yields `None`.
pub fn parse_selected_time(text: &str) -> Option<f64> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M").ok().map(decimal_hour)
}

/// The sample whose hour is closest to `hour`; the earliest wins an exact tie.
pub fn nearest_sample<'a>(samples: &[&'a Sample], hour: f64) -> Option<&'a Sample> {
    let (&first, rest) = samples.split_first()?;
    let mut best = first;
    let mut min_diff = (first.hour_of_day - hour).abs();
    for &s in rest {
        let diff = (s.hour_of_day - hour).abs();
        if diff < min_diff {
            min_diff = diff;
            best = s;
        }
    }
    Some(best)
}

/// Where the sun marker goes: nearest to a well-formed selected time,
/// otherwise the last sample.
pub fn marker_sample<'a>(samples: &[&'a Sample], selected_time: Option<&str>) -> Option<&'a Sample> {
    let hour = selected_time.and_then(|t| {
        let parsed = parse_selected_time(t);
        if parsed.is_none() {
            tracing::debug!("ignoring malformed selected time {:?}", t);
        }
        parsed
    });
    match hour {
        Some(h) => nearest_sample(samples, h),
        None => samples.last().copied(),
    }
}
