//! Host-level error type.

use canvas::CanvasError;

/// Errors that stop the host from starting or finishing.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The canvas engine could not be built (bad surface size or config).
    #[error("canvas: {0}")]
    Canvas(#[from] CanvasError),

    /// An input line was not a valid host event.
    #[error("event parse failed: {0}")]
    EventParse(#[from] serde_json::Error),

    /// The final scene could not be serialized for output.
    #[error("output serialization failed: {0}")]
    Output(#[source] serde_json::Error),

    /// Reading stdin or writing stdout failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
