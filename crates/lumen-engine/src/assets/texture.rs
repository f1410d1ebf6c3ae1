use std::path::Path;

use super::AssetError;

/// Decoded RGBA8 image, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// Decodes an image file. Any channel layout is expanded to RGBA8.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let img = image::open(path)
            .map_err(|source| AssetError::Texture {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// 1x1 texture of a single colour.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }

    /// `size`x`size` checkerboard with square cells of `cell` texels.
    pub fn checker(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let c = if (x / cell + y / cell) % 2 == 0 { a } else { b };
                rgba.extend_from_slice(&c);
            }
        }

        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checker_alternates_cells() {
        let t = TextureData::checker(4, 2, [255; 4], [0, 0, 0, 255]);
        assert_eq!(t.rgba.len(), 4 * 4 * 4);
        let texel = |x: usize, y: usize| &t.rgba[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        assert_eq!(texel(0, 0), [255; 4]);
        assert_eq!(texel(1, 1), [255; 4]);
        assert_eq!(texel(2, 0), [0, 0, 0, 255]);
        assert_eq!(texel(2, 2), [255; 4]);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = TextureData::load(Path::new("does/not/exist.png")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}
