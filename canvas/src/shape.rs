//! Shape model: the two drawable shape variants and their paint routines.
//!
//! A [`Shape`] is a tagged union over [`Geometry`] plus the fields every shape
//! carries (identity, origin, fill). The origin is always the upper-left
//! corner of the shape's bounding box; for a circle the center is derived as
//! `origin + radius` on each axis.
//!
//! Shapes know how to paint themselves onto any [`Surface`]. They never hold
//! a reference to a surface; the caller passes one in for each draw.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;
use crate::geom::Point;
use crate::surface::Surface;

/// Unique identifier for a shape instance.
pub type ShapeId = Uuid;

/// Variant-specific geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// Axis-aligned box anchored at the shape origin.
    Rectangle { width: f64, height: f64 },
    /// Circle inscribed in a `2r` square anchored at the shape origin.
    Circle { radius: f64 },
}

/// A shape on the surface or in the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Identity of this instance; [`Shape::duplicate`] always assigns a new one.
    #[serde(default = "Uuid::new_v4")]
    pub id: ShapeId,
    /// Left edge of the bounding box.
    pub x: f64,
    /// Top edge of the bounding box.
    pub y: f64,
    pub fill: Color,
    pub geometry: Geometry,
}

impl Shape {
    #[must_use]
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self { id: Uuid::new_v4(), x, y, fill, geometry: Geometry::Rectangle { width, height } }
    }

    #[must_use]
    pub fn circle(x: f64, y: f64, radius: f64, fill: Color) -> Self {
        Self { id: Uuid::new_v4(), x, y, fill, geometry: Geometry::Circle { radius } }
    }

    /// Bounding-box `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        match self.geometry {
            Geometry::Rectangle { width, height } => (width, height),
            Geometry::Circle { radius } => (radius * 2.0, radius * 2.0),
        }
    }

    /// Upper-left corner of the bounding box.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Independent copy with the same geometry, fill, and position, under a fresh id.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self { id: Uuid::new_v4(), x: self.x, y: self.y, fill: self.fill, geometry: self.geometry }
    }

    /// Fill the shape's silhouette at its current position.
    ///
    /// Non-positive dimensions paint nothing.
    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_fill_style(self.fill);
        match self.geometry {
            Geometry::Rectangle { width, height } => {
                if width > 0.0 && height > 0.0 {
                    surface.fill_rect(self.x, self.y, width, height);
                }
            }
            Geometry::Circle { radius } => {
                if radius > 0.0 {
                    let c = self.center();
                    surface.begin_path();
                    surface.arc(c.x, c.y, radius, 0.0, TAU, true);
                    surface.fill();
                }
            }
        }
        surface.restore();
    }

    /// Stroke the shape's boundary only, used to mark the selection.
    pub fn draw_selection_outline(&self, surface: &mut dyn Surface, color: Color, line_width: f64) {
        surface.save();
        surface.set_stroke_style(color);
        surface.set_line_width(line_width);
        match self.geometry {
            Geometry::Rectangle { width, height } => {
                if width > 0.0 && height > 0.0 {
                    surface.stroke_rect(self.x, self.y, width, height);
                }
            }
            Geometry::Circle { radius } => {
                if radius > 0.0 {
                    let c = self.center();
                    surface.begin_path();
                    surface.arc(c.x, c.y, radius, 0.0, TAU, true);
                    surface.stroke();
                }
            }
        }
        surface.restore();
    }

    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        let (w, h) = self.size();
        Point::new(self.x + w / 2.0, self.y + h / 2.0)
    }
}
