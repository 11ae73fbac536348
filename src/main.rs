//! dragboard: headless host for the canvas drag-and-drop engine.
//!
//! Reads host events as JSON lines on stdin, applies them to a scene backed
//! by an off-screen pixmap, and repaints on a fixed interval. At end of
//! input the final scene is written to stdout as JSON.

mod config;
mod error;
mod events;
mod services;
mod state;

use canvas::Engine;
use canvas::pixmap::PixmapSurface;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

use crate::config::HostConfig;
use crate::error::HostError;
use crate::events::HostEvent;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    if let Err(e) = run().await {
        error!(error = %e, "dragboard failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let surface = PixmapSurface::new(config.width, config.height)?;
    let state = AppState::new(Engine::new(surface, &config.canvas)?);

    let redraw = services::redraw::spawn_redraw_task(state.clone(), config.canvas.redraw_interval);
    info!(width = config.width, height = config.height, "dragboard ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match HostEvent::parse(line) {
            Ok(event) => {
                services::input::dispatch(&state, event).await;
            }
            Err(e) => warn!(line = line_no, error = %e, "skipping malformed event"),
        }
    }

    redraw.abort();
    services::redraw::tick_once(&state).await;

    let snapshot = state.snapshot().await;
    let out = snapshot.to_json_bytes()?;
    let mut stdout = tokio::io::stdout();
    stdout.write_all(&out).await?;
    stdout.flush().await?;

    info!(frames = snapshot.frames, shapes = snapshot.shapes.len(), "dragboard finished");
    Ok(())
}
