//! Silhouette hit-testing by off-screen render and sample.
//!
//! To decide whether a point is inside a shape, the shape is painted alone
//! onto a transparent scratch surface the size of the visible surface, and
//! the pixel under the point is read back. Any coverage (alpha above zero)
//! counts as a hit. No per-shape containment math is needed, so a circle's
//! bounding-box corners correctly miss.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::color::Color;
use crate::error::CanvasError;
use crate::geom::Point;
use crate::pixmap::PixmapSurface;
use crate::scene::Scene;
use crate::shape::{Shape, ShapeId};
use crate::surface::Surface;

/// Owns the scratch surface used for hit-testing.
pub struct HitTester {
    scratch: PixmapSurface,
}

impl HitTester {
    /// Create a tester whose scratch surface matches the visible surface size.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] if the dimensions are unusable.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Ok(Self { scratch: PixmapSurface::new(width, height)? })
    }

    /// Whether `point` falls on an opaque pixel of `shape`.
    ///
    /// Sampling works at whole-pixel resolution: the point is floored to its
    /// pixel, and a partly covered edge pixel counts as a hit. Containment is
    /// exact for pixel-aligned shapes and points. Points outside the scratch
    /// surface never hit.
    pub fn is_hit(&mut self, shape: &Shape, point: Point) -> bool {
        // Stale pixels from a previous test would report false positives.
        self.scratch.clear();
        shape.paint(&mut self.scratch);
        self.scratch
            .read_pixel(point.x, point.y)
            .is_some_and(Color::is_visible)
    }

    /// The topmost shape under `point`, scanning from the end of paint order.
    pub fn topmost(&mut self, scene: &Scene, point: Point) -> Option<ShapeId> {
        for shape in scene.all().iter().rev() {
            if self.is_hit(shape, point) {
                return Some(shape.id);
            }
        }
        None
    }
}
