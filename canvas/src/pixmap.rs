//! Off-screen [`Surface`] backed by a tiny-skia [`Pixmap`].
//!
//! Paths are kept as flattened polylines: arcs are sampled into line segments
//! when appended, and a tiny-skia path is only built at `fill`/`stroke` time.

#[cfg(test)]
#[path = "pixmap_test.rs"]
mod pixmap_test;

use std::f64::consts::TAU;

use tiny_skia::{BlendMode, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::color::Color;
use crate::consts::{ARC_MIN_SEGMENTS, ARC_SEGMENTS_PER_TURN};
use crate::error::CanvasError;
use crate::surface::Surface;

/// Style state captured by `save` and restored by `restore`.
#[derive(Debug, Clone, Copy)]
struct DrawStyle {
    fill: Color,
    stroke: Color,
    line_width: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self { fill: Color::BLACK, stroke: Color::BLACK, line_width: 1.0 }
    }
}

#[derive(Debug, Clone, Default)]
struct Subpath {
    points: Vec<(f32, f32)>,
    closed: bool,
}

/// A software-rasterized RGBA surface.
pub struct PixmapSurface {
    pixmap: Pixmap,
    style: DrawStyle,
    saved: Vec<DrawStyle>,
    path: Vec<Subpath>,
}

impl PixmapSurface {
    /// Allocate a transparent surface.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] if either dimension is zero or
    /// the pixmap cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| CanvasError::InvalidSurface(format!("cannot allocate {width}x{height} pixmap")))?;
        Ok(Self { pixmap, style: DrawStyle::default(), saved: Vec::new(), path: Vec::new() })
    }

    /// The underlying pixmap (premultiplied RGBA).
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Number of pixels with non-zero alpha.
    #[must_use]
    pub fn covered_pixels(&self) -> usize {
        self.pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }

    fn current_subpath(&mut self) -> &mut Subpath {
        let needs_new = self.path.last().is_none_or(|sp| sp.closed);
        if needs_new {
            self.path.push(Subpath::default());
        }
        let last = self.path.len() - 1;
        &mut self.path[last]
    }

    fn build_path(&self, close_all: bool) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for sp in &self.path {
            let Some((&(x0, y0), rest)) = sp.points.split_first() else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            pb.move_to(x0, y0);
            for &(x, y) in rest {
                pb.line_to(x, y);
            }
            if close_all || sp.closed {
                pb.close();
            }
        }
        pb.finish()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_rect(x: f64, y: f64, width: f64, height: f64) -> Option<Rect> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Rect::from_xywh(x as f32, y as f32, width as f32, height as f32)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Angular extent of an arc, following the 2D canvas normalization rules.
fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    let raw = if anticlockwise { start - end } else { end - start };
    if raw >= TAU {
        TAU
    } else if raw >= 0.0 {
        raw
    } else {
        let wrapped = raw.rem_euclid(TAU);
        if wrapped <= f64::EPSILON { TAU } else { wrapped }
    }
}

impl Surface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn save(&mut self) {
        self.saved.push(self.style);
    }

    fn restore(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn set_fill_style(&mut self, color: Color) {
        self.style.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.style.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        // Canvas ignores non-positive and non-finite widths.
        if width.is_finite() && width > 0.0 {
            self.style.line_width = width;
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some(rect) = to_rect(x, y, width, height) else {
            return;
        };
        let mut paint = paint_for(Color::BLACK);
        paint.blend_mode = BlendMode::Clear;
        paint.anti_alias = false;
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Some(rect) = to_rect(x, y, width, height) {
            self.pixmap
                .fill_rect(rect, &paint_for(self.style.fill), Transform::identity(), None);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some(rect) = to_rect(x, y, width, height) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke { width: self.style.line_width as f32, ..Stroke::default() };
        self.pixmap
            .stroke_path(&path, &paint_for(self.style.stroke), &stroke, Transform::identity(), None);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn close_path(&mut self) {
        if let Some(sp) = self.path.last_mut() {
            sp.closed = true;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }
        let sweep = arc_sweep(start_angle, end_angle, anticlockwise);
        let direction = if anticlockwise { -1.0 } else { 1.0 };
        let segments = ((sweep / TAU) * ARC_SEGMENTS_PER_TURN as f64).ceil() as usize;
        let segments = segments.max(ARC_MIN_SEGMENTS);

        let subpath = self.current_subpath();
        for i in 0..=segments {
            let angle = start_angle + direction * sweep * (i as f64 / segments as f64);
            let px = cx + radius * angle.cos();
            let py = cy + radius * angle.sin();
            subpath.points.push((px as f32, py as f32));
        }
        if sweep >= TAU {
            subpath.closed = true;
        }
    }

    fn fill(&mut self) {
        if let Some(path) = self.build_path(true) {
            self.pixmap.fill_path(
                &path,
                &paint_for(self.style.fill),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke(&mut self) {
        if let Some(path) = self.build_path(false) {
            let stroke = Stroke { width: self.style.line_width as f32, ..Stroke::default() };
            self.pixmap
                .stroke_path(&path, &paint_for(self.style.stroke), &stroke, Transform::identity(), None);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn read_pixel(&self, x: f64, y: f64) -> Option<Color> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        // Pixmap::pixel indexes row-major, so an x past the edge wraps onto the next row.
        if x >= f64::from(self.pixmap.width()) || y >= f64::from(self.pixmap.height()) {
            return None;
        }
        let px = self.pixmap.pixel(x.floor() as u32, y.floor() as u32)?;
        let c = px.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }
}
