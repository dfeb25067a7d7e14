// File: crates/sunpath-core/src/surface.rs
// Summary: Renderer-agnostic immediate-mode drawing surface used by the sun path renderer.

use skia_safe as skia;

/// Screen point in pixels.
pub type Point = (f32, f32);

/// Stroke style: colour and line width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f32) -> Self { Self { color, width } }
}

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_wh(width: f32, height: f32) -> Self {
        Self { left: 0.0, top: 0.0, right: width, bottom: height }
    }
}

/// A 2D drawing context. Every call paints immediately; nothing is retained.
pub trait DrawSurface {
    /// Surface size in pixels (width, height).
    fn size(&self) -> (i32, i32);
    /// Reset every pixel to transparent.
    fn clear(&mut self);
    /// Fill `rect` with a vertical gradient from `top` to `bottom`.
    fn fill_vertical_gradient(&mut self, rect: Rect, top: skia::Color, bottom: skia::Color);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);
    /// Stroke one continuous path through `points`, in order.
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke);
    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color);
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke);
    /// Draw `text` with its baseline-left corner at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: skia::Color);
}
