use super::TextureData;

/// Surface description for lit and emissive drawables.
#[derive(Debug, Clone)]
pub struct MaterialDesc {
    /// Base colour map, sampled as sRGB.
    pub diffuse: TextureData,
    /// Specular intensity map, sampled as linear data.
    pub specular: TextureData,
    pub shininess: f32,
    /// Multiplies the diffuse sample. Alpha is the surface opacity.
    pub tint: [f32; 4],
}

impl MaterialDesc {
    pub const DEFAULT_SHININESS: f32 = 32.0;

    pub fn new(diffuse: TextureData, specular: TextureData) -> Self {
        Self {
            diffuse,
            specular,
            shininess: Self::DEFAULT_SHININESS,
            tint: [1.0; 4],
        }
    }

    /// Flat colour with no specular response. Used for emissive markers.
    pub fn flat(rgb: [f32; 3]) -> Self {
        Self {
            diffuse: TextureData::solid([255; 4]),
            specular: TextureData::solid([0, 0, 0, 255]),
            shininess: Self::DEFAULT_SHININESS,
            tint: [rgb[0], rgb[1], rgb[2], 1.0],
        }
    }

    pub fn with_tint(mut self, tint: [f32; 4]) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

/// Shading program a drawable is rendered with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShadingModel {
    /// Phong lighting from the frame's light rig.
    Lit,
    /// Unlit: outputs the tinted diffuse colour.
    Emissive,
}
