//! Scene store: the ordered list of shapes on the surface and its dirty flag.
//!
//! Order is paint order. Index 0 is painted first; the last shape is painted
//! last and therefore sits on top. The store is append-only apart from
//! [`Scene::bring_to_front`], which moves one shape to the end.
//!
//! Every mutation raises the dirty flag. Only the redraw scheduler lowers it,
//! via [`Scene::take_dirty`], right before repainting.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::shape::{Shape, ShapeId};

/// In-memory, ordered store of shapes.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    dirty: bool,
}

impl Scene {
    /// Create an empty, clean store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new(), dirty: false }
    }

    /// Append a shape on top of everything else.
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.dirty = true;
    }

    /// Move a shape to the end of paint order. Returns false if the id is unknown.
    pub fn bring_to_front(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let shape = self.shapes.remove(index);
        self.shapes.push(shape);
        self.dirty = true;
        true
    }

    /// Move a shape's origin. Returns false if the id is unknown.
    pub fn set_position(&mut self, id: ShapeId, x: f64, y: f64) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        shape.set_position(x, y);
        self.dirty = true;
        true
    }

    /// All shapes in paint order (bottom first).
    #[must_use]
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// The topmost shape, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    /// Number of shapes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Flag that something visible changed without touching the shapes
    /// themselves (for example, the selection).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Lower the dirty flag, returning whether it was raised.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
