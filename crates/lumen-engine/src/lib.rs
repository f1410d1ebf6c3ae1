//! Lumen engine crate.
//!
//! Renders a static set of drawables from a first-person camera. The core is
//! the draw-order pipeline:
//! - `scene`: flat registry of drawables, partitioned opaque / transparent
//! - `scene::sort`: back-to-front ordering of the transparent subset
//! - `frame`: per-frame walk handing an ordered draw sequence to a binding
//!
//! The remaining modules are the collaborators that put pixels on screen:
//! window runtime, wgpu device and mesh renderer, camera, lights, assets.

pub mod assets;
pub mod camera;
pub mod core;
pub mod device;
pub mod frame;
pub mod input;
pub mod lighting;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
