/// Keyboard key identifier.
///
/// Only keys the viewer binds are named; the runtime reports everything else
/// as `Key::Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    W,
    A,
    S,
    D,
    F,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` is notched wheel input; `Pixel` is high-precision touchpad input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Pixels that count as one wheel notch.
    pub const PIXELS_PER_LINE: f32 = 40.0;

    /// Vertical component in notches.
    #[inline]
    pub fn lines_y(self) -> f32 {
        match self {
            MouseWheelDelta::Line { y, .. } => y,
            MouseWheelDelta::Pixel { y, .. } => y / Self::PIXELS_PER_LINE,
        }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an auto-repeat.
        repeat: bool,
    },

    /// Raw pointer motion, unaffected by cursor capture or acceleration curves.
    PointerMotion { dx: f32, dy: f32 },

    MouseWheel(MouseWheelDelta),

    /// Window focus change.
    Focused(bool),
}
