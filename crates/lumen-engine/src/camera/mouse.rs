/// Converts raw pointer motion into camera look offsets.
///
/// The first motion after (re)capturing the pointer is swallowed: platforms
/// often report one large jump when the cursor is grabbed, which would
/// otherwise snap the view.
#[derive(Debug, Clone)]
pub struct MouseLook {
    primed: bool,
}

impl MouseLook {
    pub fn new() -> Self {
        Self { primed: false }
    }

    /// Forget previous motion; the next delta is swallowed.
    #[inline]
    pub fn reset(&mut self) {
        self.primed = false;
    }

    /// Returns `(x_offset, y_offset)` for [`super::FlyCamera::process_mouse_movement`],
    /// or `None` when there is nothing to apply.
    ///
    /// Screen y grows downward, so the y offset is inverted.
    pub fn offsets(&mut self, dx: f32, dy: f32) -> Option<(f32, f32)> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        if !self.primed {
            self.primed = true;
            return None;
        }
        Some((dx, -dy))
    }
}

impl Default for MouseLook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_motion_is_swallowed() {
        let mut look = MouseLook::new();
        assert_eq!(look.offsets(300.0, -200.0), None);
        assert_eq!(look.offsets(4.0, 2.0), Some((4.0, -2.0)));
    }

    #[test]
    fn zero_motion_does_not_prime() {
        let mut look = MouseLook::new();
        assert_eq!(look.offsets(0.0, 0.0), None);
        assert_eq!(look.offsets(1.0, 1.0), None);
        assert_eq!(look.offsets(1.0, 1.0), Some((1.0, -1.0)));
    }

    #[test]
    fn reset_swallows_again() {
        let mut look = MouseLook::new();
        look.offsets(1.0, 0.0);
        assert!(look.offsets(1.0, 0.0).is_some());
        look.reset();
        assert_eq!(look.offsets(1.0, 0.0), None);
    }
}
