use std::fmt;

use super::{Drawable, DrawableDesc, DrawableId, Transform};

/// Registry failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RegistryError {
    /// The id was not issued by this registry.
    UnknownId(DrawableId),
    /// The id space is exhausted. Ids are `u32`, so this takes over four
    /// billion registrations; it exists so `register` never truncates.
    Full,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownId(id) => write!(f, "unknown drawable id {}", id.index()),
            RegistryError::Full => write!(f, "scene registry is full"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Authoritative, ordered list of every drawable in the scene.
///
/// Built once before the render loop. Count, identity and the
/// opaque/transparent partition are fixed after that; transforms are not.
/// Mesh and texture data behind the handles belong to their owners and are
/// never released here.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    drawables: Vec<Drawable>,
    transparent_count: usize,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a drawable and returns its id.
    pub fn register(&mut self, desc: DrawableDesc) -> Result<DrawableId, RegistryError> {
        let index = u32::try_from(self.drawables.len()).map_err(|_| RegistryError::Full)?;
        let id = DrawableId::new(index);

        let drawable = Drawable::from_desc(id, desc);
        if drawable.is_transparent() {
            self.transparent_count += 1;
        }

        log::trace!(
            "registered drawable {} ({:?}, mesh {}, program {})",
            index,
            drawable.blend(),
            drawable.mesh().index(),
            drawable.program().index(),
        );

        self.drawables.push(drawable);
        Ok(id)
    }

    /// Replaces the transform of `id`. Identity and partition are unchanged.
    pub fn update_transform(
        &mut self,
        id: DrawableId,
        transform: Transform,
    ) -> Result<(), RegistryError> {
        let drawable = self
            .drawables
            .get_mut(id.index())
            .ok_or(RegistryError::UnknownId(id))?;
        drawable.set_transform(transform);
        Ok(())
    }

    #[inline]
    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(id.index())
    }

    /// All drawables in registration order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Drawable> + Clone + '_ {
        self.drawables.iter()
    }

    /// Opaque drawables in registration order.
    #[inline]
    pub fn opaque(&self) -> impl Iterator<Item = &Drawable> + Clone + '_ {
        self.drawables.iter().filter(|d| !d.is_transparent())
    }

    /// Transparent drawables in registration order.
    #[inline]
    pub fn transparent(&self) -> impl Iterator<Item = &Drawable> + Clone + '_ {
        self.drawables.iter().filter(|d| d.is_transparent())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    #[inline]
    pub fn opaque_len(&self) -> usize {
        self.drawables.len() - self.transparent_count
    }

    #[inline]
    pub fn transparent_len(&self) -> usize {
        self.transparent_count
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{BlendMode, MaterialHandle, MeshHandle, ProgramHandle};

    fn desc(mesh: u32) -> DrawableDesc {
        DrawableDesc::new(MeshHandle(mesh), MaterialHandle(0), ProgramHandle(0))
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut reg = SceneRegistry::new();
        let a = reg.register(desc(0)).unwrap();
        let b = reg.register(desc(1).transparent()).unwrap();
        let c = reg.register(desc(2)).unwrap();

        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get(b).map(|d| d.mesh()), Some(MeshHandle(1)));
    }

    #[test]
    fn partitions_preserve_registration_order() {
        let mut reg = SceneRegistry::new();
        for i in 0..6 {
            let d = if i % 2 == 0 { desc(i) } else { desc(i).transparent() };
            reg.register(d).unwrap();
        }

        let opaque: Vec<usize> = reg.opaque().map(|d| d.id().index()).collect();
        let transparent: Vec<usize> = reg.transparent().map(|d| d.id().index()).collect();
        assert_eq!(opaque, vec![0, 2, 4]);
        assert_eq!(transparent, vec![1, 3, 5]);
        assert_eq!((reg.opaque_len(), reg.transparent_len()), (3, 3));
    }

    #[test]
    fn partition_iterators_are_restartable() {
        let mut reg = SceneRegistry::new();
        reg.register(desc(0).transparent()).unwrap();
        reg.register(desc(1).transparent()).unwrap();

        let it = reg.transparent();
        assert_eq!(it.clone().count(), 2);
        assert_eq!(it.count(), 2);
        assert_eq!(reg.transparent().count(), 2);
    }

    #[test]
    fn update_transform_keeps_identity_and_partition() {
        let mut reg = SceneRegistry::new();
        let marker = reg.register(desc(0)).unwrap();
        let glass = reg.register(desc(1).transparent()).unwrap();

        let moved = Transform::from_translation(Vec3::new(0.0, 2.5, 0.0));
        reg.update_transform(marker, moved).unwrap();
        reg.update_transform(glass, moved).unwrap();

        let m = reg.get(marker).unwrap();
        assert_eq!(m.id(), marker);
        assert_eq!(m.blend(), BlendMode::Opaque);
        assert_eq!(m.transform(), &moved);
        assert_eq!(reg.get(glass).unwrap().anchor_position(), Vec3::new(0.0, 2.5, 0.0));
        assert_eq!(reg.transparent_len(), 1);
    }

    #[test]
    fn fixed_anchor_ignores_transform_updates() {
        let mut reg = SceneRegistry::new();
        let id = reg
            .register(desc(0).transparent().with_anchor(Vec3::new(1.0, 1.0, 1.0)))
            .unwrap();
        reg.update_transform(id, Transform::from_translation(Vec3::splat(9.0)))
            .unwrap();
        assert_eq!(reg.get(id).unwrap().anchor_position(), Vec3::ONE);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut reg = SceneRegistry::new();
        let err = reg
            .update_transform(DrawableId::new(3), Transform::IDENTITY)
            .unwrap_err();
        assert_eq!(err, RegistryError::UnknownId(DrawableId::new(3)));
        assert_eq!(err.to_string(), "unknown drawable id 3");
    }

    #[test]
    fn full_registry_error_is_reportable() {
        let err: Box<dyn std::error::Error> = Box::new(RegistryError::Full);
        assert_eq!(err.to_string(), "scene registry is full");
    }
}
