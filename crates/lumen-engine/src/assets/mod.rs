//! CPU-side asset tables.
//!
//! Meshes and materials are built or decoded once at startup. The GPU
//! renderer uploads each entry lazily the first time a draw references it.

mod error;
mod material;
mod mesh;
mod store;
mod texture;

pub use error::AssetError;
pub use material::{MaterialDesc, ShadingModel};
pub use mesh::{MeshData, MeshVertex};
pub use store::{AssetStore, ASSET_ROOT_ENV, DEFAULT_ASSET_ROOT};
pub use texture::TextureData;
