//! Host configuration parsed from environment variables.

use canvas::CanvasConfig;
use canvas::config::env_parse;

use crate::error::HostError;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostConfig {
    /// Visible surface width in pixels.
    pub width: u32,
    /// Visible surface height in pixels.
    pub height: u32,
    pub canvas: CanvasConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `DRAGBOARD_WIDTH`: default 800
    /// - `DRAGBOARD_HEIGHT`: default 600
    /// - every `CANVAS_*` variable understood by [`CanvasConfig::from_env`]
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let width = env_parse(lookup("DRAGBOARD_WIDTH"), DEFAULT_WIDTH);
        let height = env_parse(lookup("DRAGBOARD_HEIGHT"), DEFAULT_HEIGHT);
        let canvas = CanvasConfig::from_lookup(&lookup)?;
        Ok(Self { width, height, canvas })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
