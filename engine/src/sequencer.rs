//! The one-shot reveal sequence and the idle-motion loop.
//!
//! Timings mirror the original gate choreography: the loader overlay fades
//! over 0.35 s while the background fades/scales in over 1.2 s, starting
//! 0.25 s before the loader fade ends. Once settled, the background pans
//! back and forth in 14 s legs until teardown.

use std::time::Duration;

use sprintgate_types::{MotionLoop, normalized_progress};

/// Minimum time the cinematic loader stays on screen, regardless of how
/// quickly the background asset loads.
pub const MIN_LOADER: Duration = Duration::from_millis(8300);

/// Loader overlay fade-out.
pub const LOADER_FADE: Duration = Duration::from_millis(350);

/// How long before the end of the loader fade the background reveal starts.
pub const REVEAL_OVERLAP: Duration = Duration::from_millis(250);

/// Background fade/scale/translate to its resting state.
pub const BACKGROUND_REVEAL: Duration = Duration::from_millis(1200);

/// Gap between the reveal settling and the guidelines modal appearing.
pub const GUIDELINES_DELAY: Duration = Duration::from_millis(600);

/// Gap between the guidelines modal hiding and the login modal appearing,
/// so the two never overlap visually.
pub const LOGIN_DELAY: Duration = Duration::from_millis(220);

/// One leg of the infinite background pan (linear, yoyo).
pub const MOTION_LEG: Duration = Duration::from_secs(14);

/// Rejection shake: ~4 oscillations with decaying amplitude.
pub const SHAKE_DURATION: Duration = Duration::from_millis(400);

/// Bob period for the guidelines "Go to Contest" control.
pub const PROCEED_BOB_PERIOD: Duration = Duration::from_millis(1400);

/// Bob period for the login submit control.
pub const SUBMIT_BOB_PERIOD: Duration = Duration::from_millis(1100);

/// The one-shot reveal timeline.
///
/// Two overlapping tracks driven by a single elapsed clock:
///
/// ```text
/// loader fade   |----0.35----|
/// background          |--------1.20--------|
///               0    0.10                 1.30
/// ```
#[derive(Debug, Clone)]
pub struct RevealTimeline {
    elapsed: Duration,
}

impl RevealTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    fn background_start() -> Duration {
        LOADER_FADE.saturating_sub(REVEAL_OVERLAP)
    }

    fn total() -> Duration {
        Self::background_start() + BACKGROUND_REVEAL
    }

    /// Loader overlay fade progress in `[0, 1]` (1 = fully transparent).
    /// Once at 1 the overlay is non-interactive.
    #[must_use]
    pub fn loader_progress(&self) -> f32 {
        normalized_progress(self.elapsed, LOADER_FADE)
    }

    /// Background reveal progress in `[0, 1]` (1 = at rest).
    #[must_use]
    pub fn background_progress(&self) -> f32 {
        let since_start = self.elapsed.saturating_sub(Self::background_start());
        normalized_progress(since_start, BACKGROUND_REVEAL)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= Self::total()
    }
}

impl Default for RevealTimeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Animation sequencer state: one-shot reveal, then unbounded idle motion.
#[derive(Debug, Clone)]
pub enum Sequencer {
    /// Waiting on the load barrier.
    Idle,
    /// Reveal in flight.
    Revealing(RevealTimeline),
    /// Reveal settled; slow pan/zoom until teardown.
    IdleMotion(MotionLoop),
}

impl Sequencer {
    /// Background reveal progress for rendering: 0 while idle, 1 once the
    /// reveal has settled.
    #[must_use]
    pub fn background_progress(&self) -> f32 {
        match self {
            Sequencer::Idle => 0.0,
            Sequencer::Revealing(timeline) => timeline.background_progress(),
            Sequencer::IdleMotion(_) => 1.0,
        }
    }

    /// Idle pan position in `[0, 1]`, 0 unless the motion loop is running.
    #[must_use]
    pub fn motion_position(&self) -> f32 {
        match self {
            Sequencer::IdleMotion(motion) => motion.position(),
            Sequencer::Idle | Sequencer::Revealing(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_tracks_overlap() {
        let mut timeline = RevealTimeline::new();
        // 0.10s in: loader still fading, background just starting.
        timeline.advance(Duration::from_millis(100));
        assert!(timeline.loader_progress() < 0.5);
        assert!(timeline.background_progress() < 0.05);

        // 0.35s in: loader fully faded, background well underway.
        timeline.advance(Duration::from_millis(250));
        assert!((timeline.loader_progress() - 1.0).abs() < f32::EPSILON);
        assert!(timeline.background_progress() > 0.1);
        assert!(!timeline.is_finished());
    }

    #[test]
    fn reveal_finishes_at_background_rest() {
        let mut timeline = RevealTimeline::new();
        timeline.advance(Duration::from_millis(1299));
        assert!(!timeline.is_finished());
        timeline.advance(Duration::from_millis(1));
        assert!(timeline.is_finished());
        assert!((timeline.background_progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn sequencer_progress_by_state() {
        assert!(Sequencer::Idle.background_progress() < f32::EPSILON);
        let settled = Sequencer::IdleMotion(MotionLoop::new(MOTION_LEG));
        assert!((settled.background_progress() - 1.0).abs() < f32::EPSILON);
        assert!(settled.motion_position() < f32::EPSILON);
    }
}
