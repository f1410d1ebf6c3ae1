//! Camera subsystem (the pose provider).
//!
//! The renderer only sees [`PoseProvider`]; `FlyCamera` is the first-person
//! implementation driven by keyboard, pointer motion and scroll.

mod fly;
mod mouse;

use glam::{Mat4, Vec3};

pub use fly::{CameraConfig, FlyCamera, Movement};
pub use mouse::MouseLook;

/// Source of the per-frame viewer pose.
pub trait PoseProvider {
    /// World-space eye position.
    fn eye_position(&self) -> Vec3;

    /// World → view transform.
    fn view_matrix(&self) -> Mat4;

    /// View → clip transform for the given width/height ratio.
    fn projection_matrix(&self, aspect_ratio: f32) -> Mat4;
}
