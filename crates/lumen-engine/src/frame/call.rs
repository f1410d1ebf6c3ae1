use glam::Mat4;

use crate::scene::{
    BlendMode, CullMode, Drawable, DrawableId, MaterialHandle, MeshHandle, ProgramHandle,
};

/// One entry of a frame's draw sequence: everything the binding layer needs
/// to bind and draw a drawable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCall {
    pub id: DrawableId,
    pub program: ProgramHandle,
    pub model: Mat4,
    pub material: MaterialHandle,
    pub mesh: MeshHandle,
    pub blend: BlendMode,
    pub cull: CullMode,
}

impl DrawCall {
    pub fn from_drawable(d: &Drawable) -> Self {
        Self {
            id: d.id(),
            program: d.program(),
            model: d.transform().matrix(),
            material: d.material(),
            mesh: d.mesh(),
            blend: d.blend(),
            cull: d.cull(),
        }
    }
}
