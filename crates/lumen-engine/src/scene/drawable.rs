use glam::Vec3;

use super::{MaterialHandle, MeshHandle, ProgramHandle, Transform};

/// Stable identifier of a registered drawable (its index in the registry).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DrawableId(u32);

impl DrawableId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a drawable composites with what is already in the framebuffer.
///
/// Transparent drawables are blended and do not write depth. Their correctness
/// relative to each other comes from draw order alone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    #[default]
    Opaque,
    Transparent,
}

/// Face culling for the drawable's mesh.
///
/// Closed boxes cull back faces; everything else is double-sided.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum CullMode {
    #[default]
    None,
    Back,
}

/// World-space reference point used for back-to-front sorting.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Anchor {
    /// Use the transform's translation; moves with `update_transform`.
    #[default]
    FollowTransform,
    /// Fixed point, independent of the transform.
    Fixed(Vec3),
}

/// Description of a drawable before registration.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableDesc {
    pub mesh: MeshHandle,
    pub material: MaterialHandle,
    pub program: ProgramHandle,
    pub transform: Transform,
    pub blend: BlendMode,
    pub cull: CullMode,
    pub anchor: Anchor,
}

impl DrawableDesc {
    pub fn new(mesh: MeshHandle, material: MaterialHandle, program: ProgramHandle) -> Self {
        Self {
            mesh,
            material,
            program,
            transform: Transform::IDENTITY,
            blend: BlendMode::Opaque,
            cull: CullMode::None,
            anchor: Anchor::FollowTransform,
        }
    }

    #[inline]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    pub fn transparent(mut self) -> Self {
        self.blend = BlendMode::Transparent;
        self
    }

    #[inline]
    pub fn cull_back_faces(mut self) -> Self {
        self.cull = CullMode::Back;
        self
    }

    #[inline]
    pub fn with_anchor(mut self, anchor: Vec3) -> Self {
        self.anchor = Anchor::Fixed(anchor);
        self
    }
}

/// One registered renderable instance.
///
/// Identity, handles and blend mode are fixed at registration. Only the
/// transform may change afterwards, through the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    id: DrawableId,
    mesh: MeshHandle,
    material: MaterialHandle,
    program: ProgramHandle,
    transform: Transform,
    blend: BlendMode,
    cull: CullMode,
    anchor: Anchor,
}

impl Drawable {
    pub(crate) fn from_desc(id: DrawableId, desc: DrawableDesc) -> Self {
        let DrawableDesc {
            mesh,
            material,
            program,
            transform,
            blend,
            cull,
            anchor,
        } = desc;

        Self {
            id,
            mesh,
            material,
            program,
            transform,
            blend,
            cull,
            anchor,
        }
    }

    #[inline]
    pub fn id(&self) -> DrawableId {
        self.id
    }

    #[inline]
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    #[inline]
    pub fn material(&self) -> MaterialHandle {
        self.material
    }

    #[inline]
    pub fn program(&self) -> ProgramHandle {
        self.program
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    #[inline]
    pub fn cull(&self) -> CullMode {
        self.cull
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.blend == BlendMode::Transparent
    }

    /// Resolved sort anchor in world space.
    #[inline]
    pub fn anchor_position(&self) -> Vec3 {
        match self.anchor {
            Anchor::FollowTransform => self.transform.translation,
            Anchor::Fixed(p) => p,
        }
    }

    #[inline]
    pub(crate) fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
}
