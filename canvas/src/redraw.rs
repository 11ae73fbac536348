//! Redraw scheduling: dirty-flag-gated full-scene repaints.
//!
//! The host calls [`RedrawScheduler::tick`] on a fixed period
//! ([`RedrawScheduler::interval`]). A tick repaints only when the scene's
//! dirty flag is raised, so bursts of pointer events between two ticks cost
//! one repaint, and idle ticks cost nothing.
//!
//! This module only reads shape state; the dirty flag is the one thing a tick
//! writes.

#[cfg(test)]
#[path = "redraw_test.rs"]
mod redraw_test;

use std::time::Duration;

use tracing::trace;

use crate::color::Color;
use crate::config::CanvasConfig;
use crate::scene::Scene;
use crate::shape::ShapeId;
use crate::surface::Surface;

/// Periodic repaint driver for one visible surface.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    interval: Duration,
    selection_color: Color,
    selection_line_width: f64,
    frames: u64,
}

impl RedrawScheduler {
    #[must_use]
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            interval: config.redraw_interval,
            selection_color: config.selection_color,
            selection_line_width: config.selection_line_width,
            frames: 0,
        }
    }

    /// How often the host should call [`Self::tick`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of repaints performed so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Repaint `surface` if the scene is dirty. Returns whether a repaint happened.
    pub fn tick(&mut self, surface: &mut dyn Surface, scene: &mut Scene, selection: Option<ShapeId>) -> bool {
        if !scene.take_dirty() {
            return false;
        }

        // Layer 1: clear.
        surface.clear();

        // Layer 2: shapes in paint order (bottom first).
        for shape in scene.all() {
            shape.paint(surface);
        }

        // Layer 3: selection outline.
        if let Some(selected) = selection.and_then(|id| scene.get(id)) {
            selected.draw_selection_outline(surface, self.selection_color, self.selection_line_width);
        }

        self.frames += 1;
        trace!(frame = self.frames, shapes = scene.len(), "scene repainted");
        true
    }
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}
