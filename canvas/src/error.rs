//! Error type for the canvas crate.
//!
//! Only surface construction and configuration can fail. Scene mutations and
//! pointer handling are infallible: an unknown shape id is a no-op, and a
//! pointer-down that hits nothing simply clears the selection.

/// Errors produced while building surfaces, parsing colors, or loading config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// The drawing surface is unavailable or has unusable dimensions.
    #[error("invalid surface: {0}")]
    InvalidSurface(String),

    /// A color token could not be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}
