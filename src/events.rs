//! Host event protocol: one JSON object per stdin line.
//!
//! ```text
//! {"event":"pointer_down","x":12,"y":30}
//! {"event":"pointer_move","x":40,"y":55}
//! {"event":"pointer_up","x":40,"y":55}
//! {"event":"pointer_leave"}
//! {"event":"drop","shape":{"x":0,"y":0,"fill":"red","geometry":{"kind":"rectangle","width":20,"height":10}},"x":100,"y":100,"offset_x":5,"offset_y":5}
//! ```

use canvas::Shape;
use canvas::input::PointerEvent;
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// An event delivered by the host environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave,
    /// A palette prototype released over the surface.
    Drop {
        shape: Shape,
        x: f64,
        y: f64,
        /// Where the pointer held the palette thumbnail, relative to its corner.
        #[serde(default)]
        offset_x: f64,
        #[serde(default)]
        offset_y: f64,
    },
}

impl HostEvent {
    /// Parse one protocol line.
    pub fn parse(line: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(line)?)
    }

    /// The pointer event this maps to, or `None` for drops.
    #[must_use]
    pub fn as_pointer(&self) -> Option<PointerEvent> {
        match *self {
            Self::PointerDown { x, y } => Some(PointerEvent::Down { x, y }),
            Self::PointerMove { x, y } => Some(PointerEvent::Move { x, y }),
            Self::PointerUp { x, y } => Some(PointerEvent::Up { x, y }),
            Self::PointerLeave => Some(PointerEvent::Leave),
            Self::Drop { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
