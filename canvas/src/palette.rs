//! Palette items: prototype shapes the user drags onto the surface.
//!
//! A palette item renders its prototype as a standalone thumbnail exactly the
//! size of the shape. When the user grabs the thumbnail, the pointer's
//! position inside it becomes the held offset, so the dropped copy lands
//! under the pointer at the same relative spot it was grabbed.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::error::CanvasError;
use crate::geom::Point;
use crate::pixmap::PixmapSurface;
use crate::shape::Shape;

/// One draggable entry in the palette.
#[derive(Debug, Clone)]
pub struct PaletteItem {
    prototype: Shape,
}

/// A prototype picked up from the palette, in flight toward the surface.
#[derive(Debug, Clone)]
pub struct HeldShape {
    pub prototype: Shape,
    /// Pointer position relative to the thumbnail's upper-left corner.
    pub offset: Point,
}

impl PaletteItem {
    #[must_use]
    pub fn new(prototype: Shape) -> Self {
        Self { prototype }
    }

    #[must_use]
    pub fn prototype(&self) -> &Shape {
        &self.prototype
    }

    /// Render the prototype alone onto a surface sized to its bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] if the shape has no area.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn thumbnail(&self) -> Result<PixmapSurface, CanvasError> {
        let (w, h) = self.prototype.size();
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(CanvasError::InvalidSurface(format!("shape has no area ({w}x{h})")));
        }
        let mut surface = PixmapSurface::new(w.ceil() as u32, h.ceil() as u32)?;
        let mut positioned = self.prototype.clone();
        positioned.set_position(0.0, 0.0);
        positioned.paint(&mut surface);
        Ok(surface)
    }

    /// Pick the prototype up with the pointer at `pointer_in_item`
    /// (relative to the thumbnail's upper-left corner).
    #[must_use]
    pub fn grab(&self, pointer_in_item: Point) -> HeldShape {
        HeldShape { prototype: self.prototype.clone(), offset: pointer_in_item }
    }
}
