use std::fmt;
use std::path::PathBuf;

/// Failure while loading or registering an asset.
#[derive(Debug)]
pub enum AssetError {
    /// Image file missing or undecodable.
    Texture {
        path: PathBuf,
        source: image::ImageError,
    },
    /// More assets of one kind than a `u32` handle can address.
    Full(&'static str),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Texture { path, source } => {
                write!(f, "texture failed to load at {}: {source}", path.display())
            }
            AssetError::Full(kind) => write!(f, "{kind} table is full"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Texture { source, .. } => Some(source),
            AssetError::Full(_) => None,
        }
    }
}
