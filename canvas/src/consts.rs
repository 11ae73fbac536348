//! Shared numeric constants for the canvas crate.

// ── Redraw ──────────────────────────────────────────────────────

/// Default period of the redraw tick, in milliseconds.
pub const REDRAW_INTERVAL_MS: u64 = 10;

// ── Selection ───────────────────────────────────────────────────

/// Default stroke color token for the selection outline.
pub const SELECTION_COLOR: &str = "blue";

/// Default stroke width of the selection outline, in surface pixels.
pub const SELECTION_LINE_WIDTH: f64 = 3.0;

// ── Geometry ────────────────────────────────────────────────────

/// Number of line segments used to flatten a full 360° arc.
pub const ARC_SEGMENTS_PER_TURN: usize = 96;

/// Lower bound on segments for short arcs.
pub const ARC_MIN_SEGMENTS: usize = 4;
