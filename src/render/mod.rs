//! Rendering: a stateless scene painter over an abstract drawing surface
//!
//! The simulation never draws; the painter never mutates simulation
//! state. Backends implement `DrawSurface`: the 2D canvas context on
//! wasm, a command recorder for tests and the native headless build.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_frame;
pub use surface::{Color, DrawCmd, DrawSurface, Glow, Paint, RecordingSurface};
