//! Input model: pointer events and the drag state machine's states.
//!
//! `PointerEvent` is what the host delivers, in surface-relative pixels.
//! `DragState` is the gesture tracked between pointer-down and pointer-up,
//! carrying what the engine needs to move the shape on each pointer-move and
//! to put it back if the pointer leaves the surface mid-drag.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::shape::ShapeId;

/// A pointer event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// The pointer left the surface bounds.
    Leave,
}

impl PointerEvent {
    /// Surface position carried by the event, if any.
    #[must_use]
    pub fn position(self) -> Option<Point> {
        match self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => Some(Point::new(x, y)),
            Self::Leave => None,
        }
    }
}

/// State of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No shape selected; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A shape is selected and follows the pointer.
    Dragging {
        /// The shape being dragged. Always the topmost shape in the scene.
        id: ShapeId,
        /// Pointer position minus shape origin at drag start. Constant for the drag.
        offset: Point,
        /// Shape origin at drag start, restored if the drag is cancelled.
        origin: Point,
    },
}

impl DragState {
    /// The selected shape, if a drag is in progress.
    #[must_use]
    pub fn selected(&self) -> Option<ShapeId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
