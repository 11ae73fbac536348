//! [`Surface`] implementation for a browser `<canvas>` 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Fallible context calls are logged and otherwise ignored; a failed arc or
//! pixel read must not abort a repaint or a pointer handler.

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::error::CanvasError;
use crate::surface::Surface;

/// A browser canvas element's 2D context and its pixel dimensions.
pub struct WebSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl WebSurface {
    /// Look up a `<canvas>` by DOM id and take its 2D context.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] when there is no document, no
    /// element with that id, the element is not a canvas, or it has no 2D context.
    pub fn from_element_id(element_id: &str) -> Result<Self, CanvasError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CanvasError::InvalidSurface("no browser document".into()))?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| CanvasError::InvalidSurface(format!("no element with id {element_id:?}")))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CanvasError::InvalidSurface(format!("element {element_id:?} is not a canvas")))?;
        Self::from_canvas(&canvas)
    }

    /// Take the 2D context of an existing canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] if the context is unavailable or
    /// the canvas has zero area.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, CanvasError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| CanvasError::InvalidSurface(format!("getContext failed: {e:?}")))?
            .ok_or_else(|| CanvasError::InvalidSurface("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::InvalidSurface("context is not 2d".into()))?;
        let (width, height) = (canvas.width(), canvas.height());
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidSurface(format!("canvas is {width}x{height}")));
        }
        Ok(Self { ctx, width, height })
    }
}

impl Surface for WebSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool) {
        if let Err(err) = self
            .ctx
            .arc_with_anticlockwise(cx, cy, radius, start_angle, end_angle, anticlockwise)
        {
            warn!(?err, radius, "canvas arc failed");
        }
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn read_pixel(&self, x: f64, y: f64) -> Option<Color> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        if x >= f64::from(self.width) || y >= f64::from(self.height) {
            return None;
        }
        match self.ctx.get_image_data(x.floor(), y.floor(), 1.0, 1.0) {
            Ok(image) => match image.data().as_slice() {
                [r, g, b, a, ..] => Some(Color::rgba(*r, *g, *b, *a)),
                _ => None,
            },
            Err(err) => {
                warn!(?err, x, y, "canvas pixel read failed");
                None
            }
        }
    }
}
