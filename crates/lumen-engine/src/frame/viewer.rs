use glam::{Mat4, Vec3};

use crate::camera::PoseProvider;

/// Viewer pose for one frame.
///
/// Rebuilt every frame from the pose provider; never carried across frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewerState {
    pub eye: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
}

impl ViewerState {
    /// Samples `pose` once for this frame.
    pub fn capture<P: PoseProvider + ?Sized>(pose: &P, aspect_ratio: f32) -> Self {
        Self {
            eye: pose.eye_position(),
            view: pose.view_matrix(),
            projection: pose.projection_matrix(aspect_ratio),
        }
    }

    /// Viewer at `eye` with identity matrices. Enough for ordering decisions.
    pub fn at(eye: Vec3) -> Self {
        Self {
            eye,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}
