use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the clock was created (unclamped wall time).
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a stall (debugger, minimized window) does not
/// teleport the camera. `elapsed` is not clamped; animations keyed on it stay
/// in phase with wall time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline without touching `elapsed`.
    ///
    /// Call after resuming from suspension so the first frame does not see the gap.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_both_ways() {
        let mut clock = FrameClock::new();
        let base = Instant::now() + Duration::from_secs(1);

        let stall = clock.tick_at(base);
        assert!((stall.dt - 0.25).abs() < 1e-6);

        let tight = clock.tick_at(base);
        assert!((tight.dt - 0.0001).abs() < 1e-7);

        let normal = clock.tick_at(base + Duration::from_millis(16));
        assert!((normal.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn elapsed_tracks_wall_time() {
        let mut clock = FrameClock::new();
        let later = Instant::now() + Duration::from_secs(3);
        let ft = clock.tick_at(later);
        assert!(ft.elapsed >= 3.0);
        assert!(ft.dt <= 0.25);
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        let t = Instant::now();
        assert_eq!(clock.tick_at(t).frame_index, 0);
        assert_eq!(clock.tick_at(t).frame_index, 1);
        assert_eq!(clock.tick_at(t).frame_index, 2);
    }
}
