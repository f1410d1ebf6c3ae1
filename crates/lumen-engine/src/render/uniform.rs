//! Uniform block layouts shared with `shaders/*.wgsl`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use crate::frame::FrameUniforms;
use crate::lighting::LightsRaw;

/// Group 0: per-frame camera and lights.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct FrameRaw {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// xyz = eye, w = elapsed seconds
    pub view_pos: [f32; 4],
    pub lights: LightsRaw,
}

impl FrameRaw {
    pub(super) fn new(frame: &FrameUniforms<'_>) -> Self {
        let eye = frame.viewer.eye;
        Self {
            view: frame.viewer.view.to_cols_array_2d(),
            projection: frame.viewer.projection.to_cols_array_2d(),
            view_pos: [eye.x, eye.y, eye.z, frame.time],
            lights: LightsRaw::pack(frame.lights),
        }
    }
}

/// Group 1: per-draw transform and surface parameters, bound at a dynamic offset.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct DrawRaw {
    pub model: [[f32; 4]; 4],
    /// Inverse transpose of the model's upper 3x3, widened to a mat4.
    pub normal: [[f32; 4]; 4],
    pub tint: [f32; 4],
    /// shininess, unused x3
    pub params: [f32; 4],
}

impl DrawRaw {
    pub(super) fn new(model: Mat4, tint: [f32; 4], shininess: f32) -> Self {
        let normal = Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose());
        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            tint,
            params: [shininess, 0.0, 0.0, 0.0],
        }
    }
}

/// Rounds `size` up to the device's dynamic-offset alignment.
pub(super) fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    #[test]
    fn block_sizes_are_vec4_multiples() {
        assert_eq!(std::mem::size_of::<DrawRaw>(), 160);
        assert_eq!(std::mem::size_of::<FrameRaw>() % 16, 0);
        assert_eq!(std::mem::size_of::<FrameRaw>(), 144 + std::mem::size_of::<LightsRaw>());
    }

    #[test]
    fn stride_rounds_up_to_alignment() {
        assert_eq!(aligned_stride(160, 256), 256);
        assert_eq!(aligned_stride(256, 256), 256);
        assert_eq!(aligned_stride(257, 256), 512);
        assert_eq!(aligned_stride(160, 0), 160);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::new(5.0, 0.15, 5.2),
            Quat::IDENTITY,
            Vec3::new(-3.0, 0.5, 0.0),
        );
        let raw = DrawRaw::new(model, [1.0; 4], 32.0);
        let normal = Mat4::from_cols_array_2d(&raw.normal);
        let up = normal.transform_vector3(Vec3::Y).normalize();
        assert!((up - Vec3::Y).length() < 1e-6);
        assert_eq!(raw.params[0], 32.0);
    }
}
