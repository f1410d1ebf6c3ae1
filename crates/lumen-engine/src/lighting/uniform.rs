//! GPU layout of the light rig.
//!
//! Every field is a 16-byte `vec4` slot so the Rust and WGSL layouts agree
//! without implicit padding. Scalars ride in the `w` lanes.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::{Attenuation, DirectionalLight, LightColor, LightRig, PointLight, SpotLight};

/// Capacity of the point-light array in the shader.
pub const MAX_POINT_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct DirectionalLightRaw {
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct PointLightRaw {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// constant, linear, quadratic, unused
    pub attenuation: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct SpotLightRaw {
    pub position: [f32; 4],
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// constant, linear, quadratic, unused
    pub attenuation: [f32; 4],
    /// cos(inner), cos(outer), enabled (0/1), unused
    pub cone: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct LightsRaw {
    pub directional: DirectionalLightRaw,
    pub points: [PointLightRaw; MAX_POINT_LIGHTS],
    pub spot: SpotLightRaw,
    /// point light count, unused x3
    pub counts: [u32; 4],
}

impl LightsRaw {
    /// Packs `rig` for upload. Point lights beyond [`MAX_POINT_LIGHTS`] are dropped.
    pub fn pack(rig: &LightRig) -> Self {
        let mut points = [PointLightRaw::default(); MAX_POINT_LIGHTS];
        let count = rig.points.len().min(MAX_POINT_LIGHTS);
        for (slot, light) in points.iter_mut().zip(&rig.points) {
            *slot = pack_point(light);
        }

        if rig.points.len() > MAX_POINT_LIGHTS {
            log::debug!(
                "{} point lights requested, shader holds {MAX_POINT_LIGHTS}; extras ignored",
                rig.points.len()
            );
        }

        Self {
            directional: pack_directional(&rig.directional),
            points,
            spot: rig.spot.as_ref().map(pack_spot).unwrap_or_default(),
            counts: [count as u32, 0, 0, 0],
        }
    }
}

#[inline]
fn v4(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}

#[inline]
fn atten(a: &Attenuation) -> [f32; 4] {
    [a.constant, a.linear, a.quadratic, 0.0]
}

fn colors(c: &LightColor) -> ([f32; 4], [f32; 4], [f32; 4]) {
    (v4(c.ambient, 0.0), v4(c.diffuse, 0.0), v4(c.specular, 0.0))
}

fn pack_directional(l: &DirectionalLight) -> DirectionalLightRaw {
    let (ambient, diffuse, specular) = colors(&l.color);
    DirectionalLightRaw {
        direction: v4(l.direction, 0.0),
        ambient,
        diffuse,
        specular,
    }
}

fn pack_point(l: &PointLight) -> PointLightRaw {
    let (ambient, diffuse, specular) = colors(&l.color);
    PointLightRaw {
        position: v4(l.position, 1.0),
        ambient,
        diffuse,
        specular,
        attenuation: atten(&l.attenuation),
    }
}

fn pack_spot(l: &SpotLight) -> SpotLightRaw {
    let (ambient, diffuse, specular) = colors(&l.color);
    SpotLightRaw {
        position: v4(l.position, 1.0),
        direction: v4(l.direction, 0.0),
        ambient,
        diffuse,
        specular,
        attenuation: atten(&l.attenuation),
        cone: [
            l.inner_cutoff_deg.to_radians().cos(),
            l.outer_cutoff_deg.to_radians().cos(),
            if l.enabled { 1.0 } else { 0.0 },
            0.0,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig_with_points(n: usize) -> LightRig {
        let mut rig = LightRig::new(DirectionalLight {
            direction: Vec3::new(0.0, -4.0, -5.0),
            color: LightColor::grey(0.05, 0.4, 0.5),
        });
        for i in 0..n {
            rig.add_point(PointLight {
                position: Vec3::new(i as f32, 1.0, 0.0),
                color: LightColor::grey(0.05, 0.8, 1.0),
                attenuation: Attenuation::RANGE_13,
            });
        }
        rig
    }

    #[test]
    fn layout_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<DirectionalLightRaw>() % 16, 0);
        assert_eq!(std::mem::size_of::<PointLightRaw>() % 16, 0);
        assert_eq!(std::mem::size_of::<SpotLightRaw>() % 16, 0);
        assert_eq!(std::mem::size_of::<LightsRaw>() % 16, 0);
    }

    #[test]
    fn packs_directional_and_points() {
        let raw = LightsRaw::pack(&rig_with_points(2));
        assert_eq!(raw.directional.direction, [0.0, -4.0, -5.0, 0.0]);
        assert_eq!(raw.directional.diffuse, [0.4, 0.4, 0.4, 0.0]);
        assert_eq!(raw.counts[0], 2);
        assert_eq!(raw.points[1].position, [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(raw.points[1].attenuation, [1.0, 0.35, 0.44, 0.0]);
        assert_eq!(raw.points[2].position, [0.0; 4]);
    }

    #[test]
    fn extra_point_lights_are_dropped() {
        let raw = LightsRaw::pack(&rig_with_points(MAX_POINT_LIGHTS + 2));
        assert_eq!(raw.counts[0] as usize, MAX_POINT_LIGHTS);
    }

    #[test]
    fn spot_cone_is_cosines_and_disabled_when_absent() {
        let mut rig = rig_with_points(0);
        assert_eq!(LightsRaw::pack(&rig).spot.cone[2], 0.0);

        rig.spot = Some(SpotLight {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            color: LightColor::grey(0.0, 1.0, 1.0),
            attenuation: Attenuation::RANGE_50,
            inner_cutoff_deg: 12.5,
            outer_cutoff_deg: 15.0,
            enabled: true,
        });
        let cone = LightsRaw::pack(&rig).spot.cone;
        assert!((cone[0] - 12.5f32.to_radians().cos()).abs() < 1e-6);
        assert!(cone[0] > cone[1]);
        assert_eq!(cone[2], 1.0);
    }
}
