//! Opaque handles into tables owned outside the scene.
//!
//! The registry stores these by value and never dereferences them; resolution
//! is the job of whichever collaborator owns the table (see `assets`).

/// Handle into the externally owned mesh table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshHandle(pub u32);

/// Handle into the externally owned material table (textures + shading params).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MaterialHandle(pub u32);

/// Handle into the externally owned shading-program table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramHandle(pub u32);

macro_rules! handle_index {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                #[inline]
                pub const fn index(self) -> usize {
                    self.0 as usize
                }
            }
        )*
    };
}

handle_index!(MeshHandle, MaterialHandle, ProgramHandle);
