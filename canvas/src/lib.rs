//! Shape canvas engine: drag shapes from a palette onto a surface and move them around.
//!
//! This crate owns the whole interaction core: the shape model, the ordered
//! scene, silhouette hit-testing, the drag state machine, and dirty-flag-gated
//! redraws. The host is responsible only for delivering pointer and drop
//! events and for calling [`engine::EngineCore::tick`] on the redraw period.
//! It compiles both natively (headless, tiny-skia surfaces) and to
//! WebAssembly (a browser `<canvas>` via [`web::WebSurface`]).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`scene`] | Ordered shape store and dirty flag |
//! | [`shape`] | Rectangle/circle shapes and their paint routines |
//! | [`hit`] | Off-screen render-and-sample hit-testing |
//! | [`input`] | Pointer events and the drag state |
//! | [`redraw`] | Periodic, dirty-gated repaint |
//! | [`palette`] | Palette items, thumbnails, and held offsets |
//! | [`surface`] | The drawing-surface trait |
//! | [`pixmap`] | tiny-skia backed off-screen surface |
//! | [`web`] | Browser canvas surface |
//! | [`color`] | Color tokens |
//! | [`geom`] | Points and offsets |
//! | [`config`] | Environment-driven configuration |
//! | [`consts`] | Shared numeric defaults |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod palette;
pub mod pixmap;
pub mod redraw;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod web;

#[cfg(test)]
mod test_support;

pub use color::Color;
pub use config::CanvasConfig;
pub use engine::{Action, Engine, EngineCore};
pub use error::CanvasError;
pub use geom::Point;
pub use shape::{Geometry, Shape, ShapeId};
