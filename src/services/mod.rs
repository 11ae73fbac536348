//! Host-side services driving the canvas engine.
//!
//! ARCHITECTURE
//! ============
//! `input` translates protocol events into engine calls; `redraw` owns the
//! periodic repaint task. Both go through the single board lock in
//! [`crate::state::AppState`].

pub mod input;
pub mod redraw;
