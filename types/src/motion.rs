//! Unbounded looping animations: the background idle pan and button bobs.

use std::f32::consts::PI;
use std::time::Duration;

/// Infinite back-and-forth pan/zoom applied to the background after reveal.
///
/// Each leg runs `leg` long with linear easing; odd legs play in reverse
/// (yoyo). Runs until dropped.
#[derive(Debug, Clone)]
pub struct MotionLoop {
    elapsed: Duration,
    leg: Duration,
}

impl MotionLoop {
    #[must_use]
    pub fn new(leg: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            leg,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Current position in `[0, 1]`: 0 at rest, 1 at the far end of a leg.
    #[must_use]
    pub fn position(&self) -> f32 {
        if self.leg.is_zero() {
            return 0.0;
        }
        let legs = self.elapsed.as_secs_f32() / self.leg.as_secs_f32();
        let t = legs.fract();
        if (legs as u64) % 2 == 1 { 1.0 - t } else { t }
    }
}

/// Gentle continuous vertical bob on a modal's primary control.
///
/// Sine ease in/out, one rise-and-fall per `period`, unbounded repeat.
#[derive(Debug, Clone)]
pub struct ButtonBob {
    elapsed: Duration,
    period: Duration,
}

impl ButtonBob {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            period,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Current displacement in `[0, 1]`: 0 at rest, 1 at the top of the bob.
    #[must_use]
    pub fn displacement(&self) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        let t = (self.elapsed.as_secs_f32() / self.period.as_secs_f32()).fract();
        // Sine half-wave up then back down over one period.
        (t * PI).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_starts_at_rest() {
        let motion = MotionLoop::new(Duration::from_secs(14));
        assert!(motion.position() < f32::EPSILON);
    }

    #[test]
    fn motion_reaches_far_end_after_one_leg() {
        let mut motion = MotionLoop::new(Duration::from_secs(14));
        motion.advance(Duration::from_secs(14));
        // Start of the reverse leg: still at the far end.
        assert!(motion.position() > 0.99);
    }

    #[test]
    fn motion_yoyos_back() {
        let mut motion = MotionLoop::new(Duration::from_secs(14));
        motion.advance(Duration::from_secs(21));
        let position = motion.position();
        assert!(
            (position - 0.5).abs() < 0.01,
            "halfway through the return leg, got {position}"
        );
    }

    #[test]
    fn motion_returns_to_rest_after_full_cycle() {
        let mut motion = MotionLoop::new(Duration::from_secs(14));
        motion.advance(Duration::from_secs(28));
        assert!(motion.position() < 0.01);
    }

    #[test]
    fn bob_peaks_mid_period() {
        let mut bob = ButtonBob::new(Duration::from_millis(1400));
        bob.advance(Duration::from_millis(700));
        assert!(bob.displacement() > 0.99);
    }

    #[test]
    fn bob_rests_at_period_boundaries() {
        let mut bob = ButtonBob::new(Duration::from_millis(1400));
        bob.advance(Duration::from_millis(1400));
        assert!(bob.displacement() < 0.01);
    }
}
