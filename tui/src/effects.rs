//! Pure effect-to-geometry transforms for TUI animation.

use ratatui::layout::Rect;
use ratatui::style::Color;

use sprintgate_engine::{ButtonBob, ModalEffect, ModalEffectKind, Sequencer};

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        ModalEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale)
        }
        ModalEffectKind::Shake => {
            let t = effect.progress().clamp(0.0, 1.0);
            let decay = 1.0 - t;
            let oscillations = 4.0;
            let amplitude = 3.0;
            let offset = (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay)
                .round() as i32;
            let viewport_left = i32::from(viewport.x);
            let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
            let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
            let base_x = i32::from(base.x);
            let x = (base_x + offset).clamp(viewport_left, max_x) as u16;
            Rect { x, ..base }
        }
    }
}

/// Vertical displacement of a bobbing control, in cells.
#[must_use]
pub fn bob_offset(bob: &ButtonBob) -> u16 {
    if bob.displacement() > 0.5 { 1 } else { 0 }
}

/// Horizontal pan of the background art, in cells.
///
/// During the reveal the art eases in from a slight leftward offset; once
/// settled, the idle motion pans it slowly left and back.
#[must_use]
pub fn background_pan(sequencer: &Sequencer) -> i16 {
    const REVEAL_SHIFT: f32 = -4.0;
    const MOTION_SHIFT: f32 = -6.0;
    match sequencer {
        Sequencer::Idle => REVEAL_SHIFT as i16,
        Sequencer::Revealing(timeline) => {
            let t = ease_out_cubic(timeline.background_progress());
            (REVEAL_SHIFT * (1.0 - t)).round() as i16
        }
        Sequencer::IdleMotion(motion) => (MOTION_SHIFT * motion.position()).round() as i16,
    }
}

/// Opacity of the background art in `[0, 1]` for color blending.
#[must_use]
pub fn background_alpha(sequencer: &Sequencer) -> f32 {
    match sequencer {
        Sequencer::Idle => 0.0,
        Sequencer::Revealing(timeline) => ease_out_cubic(timeline.background_progress()),
        Sequencer::IdleMotion(_) => 1.0,
    }
}

/// Blend from `from` toward `to` by `t` in `[0, 1]`.
///
/// Non-RGB colors cannot be interpolated; they snap to the nearer endpoint.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let lerp = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
            };
            Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub(crate) fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use sprintgate_engine::{ModalEffect, MotionLoop, RevealTimeline};

    #[test]
    fn shake_stays_inside_viewport() {
        let viewport = Rect::new(0, 0, 40, 20);
        let base = Rect::new(1, 5, 38, 6);
        let mut effect = ModalEffect::shake(Duration::from_millis(400));
        for _ in 0..40 {
            effect.advance(Duration::from_millis(10));
            let shaken = apply_modal_effect(&effect, base, viewport);
            assert!(shaken.x + shaken.width <= viewport.width);
        }
    }

    #[test]
    fn shake_ends_at_rest() {
        let viewport = Rect::new(0, 0, 80, 24);
        let base = Rect::new(20, 5, 40, 8);
        let mut effect = ModalEffect::shake(Duration::from_millis(400));
        effect.advance(Duration::from_millis(400));
        let rect = apply_modal_effect(&effect, base, viewport);
        assert_eq!(rect, base, "decayed shake should settle at the base rect");
    }

    #[test]
    fn pop_scale_grows_to_full_size() {
        let viewport = Rect::new(0, 0, 80, 24);
        let base = Rect::new(20, 5, 40, 10);
        let mut effect = ModalEffect::pop_scale(Duration::from_millis(250));
        let small = apply_modal_effect(&effect, base, viewport);
        assert!(small.width < base.width);
        effect.advance(Duration::from_millis(250));
        assert_eq!(apply_modal_effect(&effect, base, viewport), base);
    }

    #[test]
    fn background_settles_at_origin() {
        let mut timeline = RevealTimeline::new();
        timeline.advance(Duration::from_millis(1300));
        let sequencer = Sequencer::Revealing(timeline);
        assert_eq!(background_pan(&sequencer), 0);
        assert!((background_alpha(&sequencer) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn idle_motion_pans_left() {
        let mut motion = MotionLoop::new(Duration::from_secs(14));
        motion.advance(Duration::from_secs(14));
        let sequencer = Sequencer::IdleMotion(motion);
        assert_eq!(background_pan(&sequencer), -6);
    }

    #[test]
    fn blend_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(100, 200, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
        assert_eq!(blend(from, to, 0.5), Color::Rgb(50, 100, 25));
    }
}
