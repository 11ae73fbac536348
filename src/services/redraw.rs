//! Redraw service: repaints the visible surface on a fixed interval.
//!
//! DESIGN
//! ======
//! The task wakes every interval, takes the board lock, and calls the
//! engine's tick. The tick is a no-op unless the scene is dirty, so idle
//! wakeups cost one lock acquisition. Missed ticks are skipped rather than
//! bursted so a stalled host never triggers back-to-back repaints.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, trace};

use crate::state::AppState;

/// Spawn the background redraw task. Returns a handle for shutdown.
pub fn spawn_redraw_task(state: AppState, interval: Duration) -> JoinHandle<()> {
    info!(interval_ms = interval.as_millis(), "redraw task started");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            tick_once(&state).await;
        }
    })
}

/// Run a single scheduler tick. Returns whether a repaint happened.
pub async fn tick_once(state: &AppState) -> bool {
    let repainted = state.board.lock().await.tick();
    if repainted {
        trace!("visible surface repainted");
    }
    repainted
}

#[cfg(test)]
#[path = "redraw_test.rs"]
mod redraw_test;
