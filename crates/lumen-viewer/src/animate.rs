use std::f32::consts::TAU;

use glam::Vec3;

/// Vertical sinusoidal bob around a base position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bob {
    pub base: Vec3,
    pub amplitude: f32,
    /// Cycles per second.
    pub frequency: f32,
    /// Radians.
    pub phase: f32,
}

impl Bob {
    pub fn position(&self, elapsed: f32) -> Vec3 {
        let offset = (TAU * self.frequency * elapsed + self.phase).sin() * self.amplitude;
        self.base + Vec3::Y * offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOB: Bob = Bob {
        base: Vec3::new(1.0, 2.0, 3.0),
        amplitude: 0.25,
        frequency: 0.5,
        phase: 0.0,
    };

    #[test]
    fn starts_at_base_and_peaks_a_quarter_period_later() {
        assert_eq!(BOB.position(0.0), BOB.base);
        let peak = BOB.position(0.5);
        assert!((peak.y - 2.25).abs() < 1e-5);
        assert_eq!((peak.x, peak.z), (1.0, 3.0));
    }

    #[test]
    fn stays_within_amplitude() {
        for i in 0..200 {
            let p = BOB.position(i as f32 * 0.037);
            assert!((p.y - BOB.base.y).abs() <= BOB.amplitude + 1e-6);
        }
    }
}
