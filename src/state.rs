//! Shared application state.
//!
//! DESIGN
//! ======
//! One engine per visible surface, behind a single async mutex. Event
//! dispatch and the redraw task both take the lock, so every scene mutation
//! and every repaint run to completion without interleaving.

use std::sync::Arc;

use canvas::pixmap::PixmapSurface;
use canvas::{Engine, Shape, ShapeId};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::HostError;

/// The engine bound to the host's off-screen visible surface.
pub type Board = Engine<PixmapSurface>;

/// Shared application state, cloned into the redraw task.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Mutex<Board>>,
}

impl AppState {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board: Arc::new(Mutex::new(board)) }
    }

    /// Capture the current scene for output.
    pub async fn snapshot(&self) -> SceneSnapshot {
        let board = self.board.lock().await;
        let (width, height) = board.core.size();
        SceneSnapshot {
            width,
            height,
            frames: board.core.frames(),
            selection: board.selection(),
            covered_pixels: board.surface().covered_pixels(),
            shapes: board.core.scene().all().to_vec(),
        }
    }
}

/// Serializable summary of the scene and its last repaint.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub width: u32,
    pub height: u32,
    /// Repaints performed so far.
    pub frames: u64,
    pub selection: Option<ShapeId>,
    /// Non-transparent pixels on the visible surface after the last repaint.
    pub covered_pixels: usize,
    /// Shapes in paint order (bottom first).
    pub shapes: Vec<Shape>,
}

impl SceneSnapshot {
    /// Pretty JSON with a trailing newline, ready for stdout.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, HostError> {
        let mut out = serde_json::to_vec_pretty(self).map_err(HostError::Output)?;
        out.push(b'\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
