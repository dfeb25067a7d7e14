// File: crates/sunpath-core/src/lib.rs
// Summary: Core library entry point; exports the sample model, scales, surfaces and the sun path renderer.

pub mod chart;
pub mod error;
pub mod grid;
pub mod recording;
pub mod scale;
pub mod skia_surface;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{draw_sun_path_chart, marker_sample, nearest_sample, parse_selected_time, valid_samples, RenderOptions, SunPathChart};
pub use error::ChartError;
pub use recording::{DrawOp, RecordingSurface};
pub use scale::{map_range, ChartScale};
pub use skia_surface::SkiaSurface;
pub use surface::{DrawSurface, Point, Rect, Stroke};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{ChartRequest, Location, Sample};
