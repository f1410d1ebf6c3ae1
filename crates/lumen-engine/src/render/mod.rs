//! GPU rendering subsystem.
//!
//! `MeshRenderer` owns pipelines and uploaded assets across frames;
//! `MeshPass` binds it to one frame's target and implements
//! `frame::GraphicsBinding` over wgpu.
//!
//! Convention:
//! - right-handed world space, +Y up
//! - clip-space depth 0..1, cleared to 1.0, test `Less`

mod ctx;
mod mesh;
mod pipeline;
mod uniform;
mod upload;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{MeshPass, MeshRenderer};
