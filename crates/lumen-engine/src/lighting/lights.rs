use glam::Vec3;

/// Ambient/diffuse/specular intensities shared by every light type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightColor {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl LightColor {
    #[inline]
    pub const fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// Grey light with the same value on every channel.
    #[inline]
    pub const fn grey(ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self::new(Vec3::splat(ambient), Vec3::splat(diffuse), Vec3::splat(specular))
    }

    /// Scales all three terms by `color`.
    #[inline]
    pub fn tinted(self, color: Vec3) -> Self {
        Self::new(self.ambient * color, self.diffuse * color, self.specular * color)
    }
}

/// Distance falloff `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Roughly 50 world units of reach.
    pub const RANGE_50: Self = Self {
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
    };

    /// Roughly 13 world units of reach.
    pub const RANGE_13: Self = Self {
        constant: 1.0,
        linear: 0.35,
        quadratic: 0.44,
    };

    #[inline]
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels (not normalized; the shader normalizes).
    pub direction: Vec3,
    pub color: LightColor,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: LightColor,
    pub attenuation: Attenuation,
}

/// Cone light. Cut-offs are stored as angles in degrees; the uniform packer
/// converts them to cosines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: LightColor,
    pub attenuation: Attenuation,
    pub inner_cutoff_deg: f32,
    pub outer_cutoff_deg: f32,
    pub enabled: bool,
}

impl SpotLight {
    /// Moves the cone to a new origin and aim, e.g. to follow the camera.
    #[inline]
    pub fn aim(&mut self, position: Vec3, direction: Vec3) {
        self.position = position;
        self.direction = direction;
    }
}

/// Every light in the scene for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub directional: DirectionalLight,
    pub points: Vec<PointLight>,
    pub spot: Option<SpotLight>,
}

impl LightRig {
    pub fn new(directional: DirectionalLight) -> Self {
        Self {
            directional,
            points: Vec::new(),
            spot: None,
        }
    }

    /// Adds a point light and returns its index.
    pub fn add_point(&mut self, light: PointLight) -> usize {
        self.points.push(light);
        self.points.len() - 1
    }

    /// Mutable access to a point light, e.g. to move it with its marker.
    #[inline]
    pub fn point_mut(&mut self, index: usize) -> Option<&mut PointLight> {
        self.points.get_mut(index)
    }
}
