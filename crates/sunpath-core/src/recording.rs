// File: crates/sunpath-core/src/recording.rs
// Summary: DrawSurface that records every call, for inspecting what a render produced.

use skia_safe as skia;

use crate::surface::{DrawSurface, Point, Rect, Stroke};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    VerticalGradient { rect: Rect, top: skia::Color, bottom: skia::Color },
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    FillCircle { center: Point, radius: f32, color: skia::Color },
    StrokeCircle { center: Point, radius: f32, stroke: Stroke },
    Text { text: String, origin: Point, size: f32, color: skia::Color },
}

/// Headless surface keeping an ordered log of draw calls.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// Polylines drawn, in order.
    pub fn polylines(&self) -> Vec<&[Point]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Text labels drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Centres of filled circles, in order.
    pub fn filled_circles(&self) -> Vec<(Point, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillCircle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn clear(&mut self) {
        // A clear wipes whatever was painted before it.
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: skia::Color, bottom: skia::Color) {
        self.ops.push(DrawOp::VerticalGradient { rect, top, bottom });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeCircle { center, radius, stroke });
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: skia::Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, size, color });
    }
}
