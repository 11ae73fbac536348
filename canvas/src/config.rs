//! Engine configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use crate::color::Color;
use crate::consts::{REDRAW_INTERVAL_MS, SELECTION_COLOR, SELECTION_LINE_WIDTH};
use crate::error::CanvasError;

/// Tuning knobs for redraw and selection styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Period of the redraw tick.
    pub redraw_interval: Duration,
    /// Stroke color of the selection outline.
    pub selection_color: Color,
    /// Stroke width of the selection outline, in pixels.
    pub selection_line_width: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            redraw_interval: Duration::from_millis(REDRAW_INTERVAL_MS),
            selection_color: Color::rgb(0, 0, 255),
            selection_line_width: SELECTION_LINE_WIDTH,
        }
    }
}

impl CanvasConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CANVAS_REDRAW_INTERVAL_MS`: default 10
    /// - `CANVAS_SELECTION_COLOR`: default `blue`
    /// - `CANVAS_SELECTION_LINE_WIDTH`: default 3
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ConfigParse`] if the selection color is not a valid color token.
    pub fn from_env() -> Result<Self, CanvasError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Numbers that fail to parse (or are not positive) fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ConfigParse`] if the selection color is not a valid color token.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CanvasError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let interval_ms = env_parse(lookup("CANVAS_REDRAW_INTERVAL_MS"), REDRAW_INTERVAL_MS);
        let interval_ms = if interval_ms == 0 { REDRAW_INTERVAL_MS } else { interval_ms };

        let color_token = lookup("CANVAS_SELECTION_COLOR").unwrap_or_else(|| SELECTION_COLOR.to_string());
        let selection_color = Color::parse(&color_token)
            .map_err(|e| CanvasError::ConfigParse(format!("CANVAS_SELECTION_COLOR: {e}")))?;

        let line_width = env_parse(lookup("CANVAS_SELECTION_LINE_WIDTH"), SELECTION_LINE_WIDTH);
        let selection_line_width = if line_width.is_finite() && line_width > 0.0 { line_width } else { SELECTION_LINE_WIDTH };

        Ok(Self { redraw_interval: Duration::from_millis(interval_ms), selection_color, selection_line_width })
    }
}

/// Parse a raw variable value, falling back to `default` when it is absent or malformed.
pub fn env_parse<T>(raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy,
{
    match raw.map(|v| v.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        _ => default,
    }
}
