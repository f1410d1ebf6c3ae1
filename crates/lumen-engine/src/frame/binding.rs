use std::fmt;

use crate::lighting::LightRig;
use crate::scene::{MaterialHandle, MeshHandle, ProgramHandle};

use super::{DrawCall, ViewerState};

/// Values shared by every draw in a frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameUniforms<'a> {
    pub viewer: &'a ViewerState,
    pub lights: &'a LightRig,
    /// Seconds since the clock started.
    pub time: f32,
}

/// Failure reported by a graphics binding while executing a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    UnknownMesh(MeshHandle),
    UnknownMaterial(MaterialHandle),
    UnknownProgram(ProgramHandle),
    /// Backend-specific failure.
    Backend(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::UnknownMesh(h) => write!(f, "unresolved mesh handle {}", h.index()),
            BindError::UnknownMaterial(h) => {
                write!(f, "unresolved material handle {}", h.index())
            }
            BindError::UnknownProgram(h) => write!(f, "unresolved program handle {}", h.index()),
            BindError::Backend(msg) => write!(f, "graphics backend error: {msg}"),
        }
    }
}

impl std::error::Error for BindError {}

/// Executes an ordered draw sequence.
///
/// Implementations must draw `calls` in the given order and must not reorder
/// them; transparency correctness depends on it.
pub trait GraphicsBinding {
    fn execute(&mut self, frame: &FrameUniforms<'_>, calls: &[DrawCall]) -> Result<(), BindError>;
}
