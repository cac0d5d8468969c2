use glam::Vec2;

use crate::options::MotionOptions;
use crate::util::lerp::{frame_factor, lerp, lerp_vec2};

/// Smoothed preview state carried from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Latest pointer position (top-left origin, CSS pixels).
    pub target: Vec2,
    /// Smoothed position trailing `target`.
    pub offset: Vec2,
    /// Preview opacity in `[0, 1]`.
    pub alpha: f32,
}

impl MotionState {
    /// State at startup: pointer and offset at the origin.
    pub fn new(initial_alpha: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::ZERO,
            alpha: initial_alpha.clamp(0.0, 1.0),
        }
    }

    /// Advance one frame toward `target`.
    ///
    /// `dt` is the elapsed time in seconds; `None` applies the configured
    /// factors exactly once (one reference frame). Alpha heads for 1 while
    /// `hovered`, otherwise for 0.
    #[must_use]
    pub fn step(
        &self,
        target: Vec2,
        hovered: bool,
        dt: Option<f32>,
        motion: &MotionOptions,
    ) -> Self {
        let (follow, fade) = match dt {
            Some(dt) => (
                frame_factor(motion.follow_factor, dt, motion.reference_fps),
                frame_factor(motion.fade_factor, dt, motion.reference_fps),
            ),
            None => (
                motion.follow_factor.clamp(0.0, 1.0),
                motion.fade_factor.clamp(0.0, 1.0),
            ),
        };
        let alpha_target = if hovered { 1.0 } else { 0.0 };
        Self {
            target,
            offset: lerp_vec2(self.offset, target, follow),
            alpha: lerp(self.alpha, alpha_target, fade).clamp(0.0, 1.0),
        }
    }

    /// Shader offset uniform: the remaining pointer lag scaled by
    /// `strength`, with Y flipped into shader space (+Y up).
    pub fn distortion(&self, strength: f32) -> Vec2 {
        let lag = (self.target - self.offset) * strength;
        Vec2::new(lag.x, -lag.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion() -> MotionOptions {
        MotionOptions::default()
    }

    #[test]
    fn one_frame_covers_ten_percent() {
        let state = MotionState::new(0.0);
        let next = state.step(Vec2::new(100.0, 200.0), false, None, &motion());
        assert!((next.offset.x - 10.0).abs() < 1e-4);
        assert!((next.offset.y - 20.0).abs() < 1e-4);
        assert_eq!(next.target, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn reference_dt_matches_fixed_frame() {
        let state = MotionState::new(0.5);
        let target = Vec2::new(100.0, 200.0);
        let fixed = state.step(target, true, None, &motion());
        let timed = state.step(target, true, Some(1.0 / 60.0), &motion());
        assert!((fixed.offset - timed.offset).length() < 1e-4);
        assert!((fixed.alpha - timed.alpha).abs() < 1e-6);
    }

    #[test]
    fn converges_within_one_unit_in_about_forty_frames() {
        let target = Vec2::new(100.0, 200.0);
        let mut state = MotionState::new(0.0);
        let mut frames = 0;
        while (target - state.offset).length() >= 1.0 {
            state = state.step(target, false, None, &motion());
            frames += 1;
            assert!(frames < 100, "did not converge");
        }
        assert!(frames <= 55, "took {frames} frames");
        // x alone is within 1 unit by frame 44
        let mut state = MotionState::new(0.0);
        for _ in 0..44 {
            state = state.step(target, false, None, &motion());
        }
        assert!((target.x - state.offset.x).abs() < 1.0);
    }

    #[test]
    fn offset_never_overshoots() {
        let target = Vec2::new(-300.0, 75.0);
        let mut state = MotionState::new(0.0);
        for _ in 0..500 {
            state = state.step(target, false, Some(0.05), &motion());
            assert!(state.offset.x >= target.x);
            assert!(state.offset.y <= target.y);
        }
    }

    #[test]
    fn distortion_uses_post_step_lag_with_y_flipped() {
        let state = MotionState::new(0.0).step(
            Vec2::new(100.0, 200.0),
            false,
            None,
            &motion(),
        );
        let d = state.distortion(0.0009);
        assert!((d.x - 90.0 * 0.0009).abs() < 1e-6);
        assert!((d.y + 180.0 * 0.0009).abs() < 1e-6);
    }

    #[test]
    fn alpha_fades_in_and_out_within_bounds() {
        let mut state = MotionState::new(0.0);
        let mut last = state.alpha;
        for _ in 0..200 {
            state = state.step(Vec2::ZERO, true, None, &motion());
            assert!(state.alpha >= last && state.alpha <= 1.0);
            last = state.alpha;
        }
        assert!(state.alpha > 0.99);
        for _ in 0..200 {
            state = state.step(Vec2::ZERO, false, Some(0.1), &motion());
            assert!(state.alpha <= last && state.alpha >= 0.0);
            last = state.alpha;
        }
        assert!(state.alpha < 0.01);
    }

    #[test]
    fn initial_alpha_is_clamped() {
        assert_eq!(MotionState::new(3.0).alpha, 1.0);
        assert_eq!(MotionState::new(-1.0).alpha, 0.0);
    }
}
