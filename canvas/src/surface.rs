//! The drawing-surface abstraction shapes paint onto.
//!
//! [`Surface`] mirrors the subset of the browser `CanvasRenderingContext2D`
//! API the canvas needs: rectangle fill/stroke/clear, a single-path builder
//! with arcs, a save/restore stack for style state, and single-pixel reads for
//! hit-testing. Two implementations ship with the crate:
//!
//! | Type | Backing |
//! |------|---------|
//! | [`crate::pixmap::PixmapSurface`] | tiny-skia `Pixmap` (off-screen, used for hit-testing and thumbnails) |
//! | [`crate::web::WebSurface`] | browser `CanvasRenderingContext2d` |

use crate::color::Color;

/// A 2D drawing target with known pixel dimensions.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Push the current style state (fill, stroke, line width).
    fn save(&mut self);

    /// Pop the most recently saved style state. No-op when nothing is saved.
    fn restore(&mut self);

    fn set_fill_style(&mut self, color: Color);

    fn set_stroke_style(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    /// Reset every pixel in the rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    fn close_path(&mut self);

    /// Append a circular arc centered on `(cx, cy)`. Angles are in radians,
    /// measured clockwise from the positive x axis (y grows downward).
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool);

    /// Fill the current path with the fill style.
    fn fill(&mut self);

    /// Stroke the current path with the stroke style and line width.
    fn stroke(&mut self);

    /// Sample one pixel. `None` when the coordinate lies outside the surface
    /// or the backend cannot read pixels back.
    fn read_pixel(&self, x: f64, y: f64) -> Option<Color>;

    /// Clear the entire surface.
    fn clear(&mut self) {
        let (w, h) = (f64::from(self.width()), f64::from(self.height()));
        self.clear_rect(0.0, 0.0, w, h);
    }
}
