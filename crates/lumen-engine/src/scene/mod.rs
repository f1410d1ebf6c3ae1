//! Scene model.
//!
//! Responsibilities:
//! - describe renderable instances (`Drawable`) by handle, never by owned data
//! - keep them in one flat, ordered registry partitioned into opaque/transparent
//! - order the transparent subset back-to-front for a given eye position

mod drawable;
mod handle;
mod key;
mod registry;
mod sort;
mod transform;

pub use drawable::{Anchor, BlendMode, CullMode, Drawable, DrawableDesc, DrawableId};
pub use handle::{MaterialHandle, MeshHandle, ProgramHandle};
pub use key::DistanceKey;
pub use registry::{RegistryError, SceneRegistry};
pub use sort::{sort_back_to_front, BackToFront};
pub use transform::Transform;
