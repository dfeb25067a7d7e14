// File: crates/sunpath-core/src/skia_surface.rs
// Summary: DrawSurface backed by a Skia CPU raster surface, with PNG and RGBA output.

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::surface::{DrawSurface, Point, Rect, Stroke};
use crate::text::TextShaper;

pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    text: TextShaper,
}

impl SkiaSurface {
    /// Allocate a `width` x `height` N32 premultiplied raster surface.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        Ok(Self { surface, width, height, text: TextShaper::new() })
    }

    /// Snapshot the current contents as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current contents to `path` as PNG, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(stroke.color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

impl DrawSurface for SkiaSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn clear(&mut self) {
        self.surface.canvas().clear(skia::Color::TRANSPARENT);
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: skia::Color, bottom: skia::Color) {
        let colors = [top, bottom];
        let shader = skia::Shader::linear_gradient(
            ((rect.left, rect.top), (rect.left, rect.bottom)),
            skia::gradient_shader::GradientShaderColors::Colors(&colors),
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_shader(shader);
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.surface.canvas().draw_line(from, to, &stroke_paint(stroke));
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        let Some((&first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        self.surface.canvas().draw_path(&path, &stroke_paint(stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        self.surface.canvas().draw_circle(center, radius, &fill_paint(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke) {
        self.surface.canvas().draw_circle(center, radius, &stroke_paint(stroke));
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: skia::Color) {
        let canvas = self.surface.canvas();
        self.text.draw_baseline(canvas, text, origin.0, origin.1, size, color);
    }
}
