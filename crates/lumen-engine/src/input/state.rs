use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, KeyState};
use super::Key;

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Keys currently held.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// State for a window whose initial focus is already known.
    ///
    /// Not every platform sends `Focused(true)` for a window that opens
    /// focused, so the runtime seeds it from the window itself.
    pub fn with_focus(focused: bool) -> Self {
        Self {
            focused,
            keys_down: HashSet::new(),
        }
    }

    /// Applies `ev` to the held state and records its per-frame deltas in `frame`.
    ///
    /// Pointer motion is dropped while unfocused.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                if f && !self.focused {
                    frame.focus_gained = true;
                }
                self.focused = f;
                if !f {
                    // Release events are not delivered while unfocused.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },

            InputEvent::PointerMotion { dx, dy } => {
                if !self.focused {
                    return;
                }
                frame.pointer_delta.0 += dx;
                frame.pointer_delta.1 += dy;
            }

            InputEvent::MouseWheel(delta) => {
                frame.wheel_lines += delta.lines_y();
            }
        }
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            repeat: false,
        }
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));
        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));
        assert!(state.key_down(Key::W));
        assert!(frame.key_pressed(Key::W));
        assert_eq!(frame.keys_pressed.len(), 1);

        frame.clear();
        state.apply_event(&mut frame, key(Key::W, KeyState::Released));
        assert!(!state.key_down(Key::W));
        assert!(!frame.key_pressed(Key::W));
    }

    #[test]
    fn motion_and_wheel_accumulate_until_cleared() {
        let mut state = InputState::with_focus(true);
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMotion { dx: 2.0, dy: -1.0 });
        state.apply_event(&mut frame, InputEvent::PointerMotion { dx: 3.0, dy: 4.0 });
        state.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }));
        state.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 80.0 }));

        assert_eq!(frame.pointer_delta, (5.0, 3.0));
        assert_eq!(frame.wheel_lines, 3.0);

        frame.clear();
        assert_eq!(frame.pointer_delta, (0.0, 0.0));
        assert_eq!(frame.wheel_lines, 0.0);
    }

    #[test]
    fn motion_is_ignored_while_unfocused() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMotion { dx: 5.0, dy: 5.0 });
        assert_eq!(frame.pointer_delta, (0.0, 0.0));

        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, InputEvent::PointerMotion { dx: 5.0, dy: 5.0 });
        assert_eq!(frame.pointer_delta, (5.0, 5.0));
    }

    #[test]
    fn window_focused_at_startup_accepts_motion_without_focus_event() {
        let mut state = InputState::with_focus(true);
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMotion { dx: 1.5, dy: -2.0 });
        assert_eq!(frame.pointer_delta, (1.5, -2.0));
        assert!(!frame.focus_gained);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Focused(true));
        assert!(frame.focus_gained);
        state.apply_event(&mut frame, key(Key::A, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.key_down(Key::A));
        assert!(!state.focused);
    }
}
