use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::scene::{MaterialHandle, MeshHandle, ProgramHandle};

use super::{AssetError, MaterialDesc, MeshData, ShadingModel, TextureData};

/// Environment variable overriding the asset root directory.
pub const ASSET_ROOT_ENV: &str = "LUMEN_ASSETS";

/// Asset root used when `LUMEN_ASSETS` is unset.
pub const DEFAULT_ASSET_ROOT: &str = "resources";

/// CPU-side tables of meshes, materials and shading programs.
///
/// Handles are indices into these tables, issued in insertion order. The
/// store never removes entries, so a handle stays valid for its lifetime.
#[derive(Debug)]
pub struct AssetStore {
    root: PathBuf,
    meshes: Vec<MeshData>,
    materials: Vec<MaterialDesc>,
    programs: Vec<ShadingModel>,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            meshes: Vec::new(),
            materials: Vec::new(),
            programs: Vec::new(),
        }
    }

    /// Store rooted at `$LUMEN_ASSETS`, or `resources/` when unset.
    pub fn from_env() -> Self {
        Self::new(resolve_root(std::env::var_os(ASSET_ROOT_ENV)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `relative` under the asset root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn load_texture(&self, relative: impl AsRef<Path>) -> Result<TextureData, AssetError> {
        TextureData::load(&self.resolve(relative))
    }

    /// Loads `relative`, or logs a warning and returns `fallback()`.
    pub fn texture_or_else<F>(&self, relative: impl AsRef<Path>, fallback: F) -> TextureData
    where
        F: FnOnce() -> TextureData,
    {
        match self.load_texture(relative) {
            Ok(t) => {
                log::debug!("loaded texture {}x{}", t.width, t.height);
                t
            }
            Err(err) => {
                log::warn!("{err}; using generated fallback");
                fallback()
            }
        }
    }

    pub fn add_mesh(&mut self, mesh: MeshData) -> Result<MeshHandle, AssetError> {
        let h = next_index(&self.meshes, "mesh")?;
        self.meshes.push(mesh);
        Ok(MeshHandle(h))
    }

    pub fn add_material(&mut self, material: MaterialDesc) -> Result<MaterialHandle, AssetError> {
        let h = next_index(&self.materials, "material")?;
        self.materials.push(material);
        Ok(MaterialHandle(h))
    }

    pub fn add_program(&mut self, program: ShadingModel) -> Result<ProgramHandle, AssetError> {
        let h = next_index(&self.programs, "program")?;
        self.programs.push(program);
        Ok(ProgramHandle(h))
    }

    pub fn mesh(&self, h: MeshHandle) -> Option<&MeshData> {
        self.meshes.get(h.index())
    }

    pub fn material(&self, h: MaterialHandle) -> Option<&MaterialDesc> {
        self.materials.get(h.index())
    }

    pub fn program(&self, h: ProgramHandle) -> Option<ShadingModel> {
        self.programs.get(h.index()).copied()
    }
}

fn next_index<T>(table: &[T], kind: &'static str) -> Result<u32, AssetError> {
    u32::try_from(table.len()).map_err(|_| AssetError::Full(kind))
}

fn resolve_root(from_env: Option<OsString>) -> PathBuf {
    from_env
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_issued_in_insertion_order() {
        let mut store = AssetStore::new("assets");
        let cube = store.add_mesh(MeshData::cube(1.0)).unwrap();
        let quad = store.add_mesh(MeshData::quad()).unwrap();
        assert_eq!((cube, quad), (MeshHandle(0), MeshHandle(1)));

        let lit = store.add_program(ShadingModel::Lit).unwrap();
        let emissive = store.add_program(ShadingModel::Emissive).unwrap();
        assert_eq!(store.program(lit), Some(ShadingModel::Lit));
        assert_eq!(store.program(emissive), Some(ShadingModel::Emissive));

        assert_eq!(store.mesh(quad).map(MeshData::index_count), Some(6));
        assert!(store.mesh(MeshHandle(2)).is_none());
        assert!(store.material(MaterialHandle(0)).is_none());
    }

    #[test]
    fn missing_texture_falls_back() {
        let store = AssetStore::new("no-such-root");
        let t = store.texture_or_else("textures/missing.png", || TextureData::solid([1, 2, 3, 4]));
        assert_eq!(t, TextureData::solid([1, 2, 3, 4]));
    }

    #[test]
    fn root_comes_from_env_when_set() {
        assert_eq!(resolve_root(None), PathBuf::from("resources"));
        assert_eq!(resolve_root(Some(OsString::new())), PathBuf::from("resources"));
        assert_eq!(resolve_root(Some("/srv/assets".into())), PathBuf::from("/srv/assets"));

        let store = AssetStore::new("/srv/assets");
        assert_eq!(
            store.resolve("textures/a.png"),
            PathBuf::from("/srv/assets/textures/a.png")
        );
    }
}
