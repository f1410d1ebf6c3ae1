//! Per-frame draw ordering.
//!
//! `FrameRenderer` turns the scene registry and this frame's viewer state into
//! an ordered `DrawCall` sequence and hands it to a `GraphicsBinding`. It never
//! touches GPU state itself.

mod binding;
mod call;
mod renderer;
mod viewer;

pub use binding::{BindError, FrameUniforms, GraphicsBinding};
pub use call::DrawCall;
pub use renderer::FrameRenderer;
pub use viewer::ViewerState;
