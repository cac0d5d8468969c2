//! Exponential smoothing helpers for the per-frame animation step.
//!
//! Each frame moves a value a fixed fraction of the way toward its target:
//! `current + (target - current) * factor`. With `factor` in `(0, 1)` this
//! converges monotonically and never overshoots.

use glam::Vec2;

/// Linear interpolation: `start + (end - start) * t`.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Component-wise [`lerp`] for 2D points.
#[inline]
pub fn lerp_vec2(start: Vec2, end: Vec2, t: f32) -> Vec2 {
    start + (end - start) * t
}

/// Rescale a per-frame smoothing factor to an arbitrary elapsed time.
///
/// `factor` is tuned for frames of `1 / reference_fps` seconds. Applying the
/// returned factor once over `dt` seconds lands where `dt * reference_fps`
/// applications of `factor` would. Non-positive `dt` yields 0 (no movement).
#[inline]
pub fn frame_factor(factor: f32, dt: f32, reference_fps: f32) -> f32 {
    let factor = factor.clamp(0.0, 1.0);
    if dt <= 0.0 || reference_fps <= 0.0 {
        return 0.0;
    }
    let frames = dt * reference_fps;
    if (frames - 1.0).abs() < 1e-6 {
        return factor;
    }
    1.0 - (1.0 - factor).powf(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn repeated_lerp_converges_without_overshoot() {
        for &factor in &[0.01_f32, 0.1, 0.5, 0.9] {
            for &(start, target) in &[(0.0_f32, 100.0_f32), (50.0, -20.0)] {
                let mut current = start;
                let mut previous_gap = (target - current).abs();
                let bound = (20.0 / factor).ceil() as usize;
                let mut reached = None;
                for step in 0..bound {
                    current = lerp(current, target, factor);
                    let gap = (target - current).abs();
                    assert!(gap <= previous_gap, "gap grew at step {step}");
                    // Still on the starting side of the target
                    assert!((target - current) * (target - start) >= 0.0);
                    previous_gap = gap;
                    if reached.is_none() && gap < 1e-3 * (target - start).abs()
                    {
                        reached = Some(step);
                    }
                }
                assert!(
                    reached.is_some(),
                    "factor {factor} did not converge in {bound} steps"
                );
            }
        }
    }

    #[test]
    fn one_reference_frame_uses_factor_exactly() {
        assert_eq!(frame_factor(0.1, 1.0 / 60.0, 60.0), 0.1);
    }

    #[test]
    fn two_frames_compound() {
        let f = frame_factor(0.1, 2.0 / 60.0, 60.0);
        assert!((f - 0.19).abs() < 1e-5);
    }

    #[test]
    fn degenerate_inputs_do_not_move() {
        assert_eq!(frame_factor(0.1, 0.0, 60.0), 0.0);
        assert_eq!(frame_factor(0.1, -1.0, 60.0), 0.0);
        assert_eq!(frame_factor(0.1, 0.016, 0.0), 0.0);
    }

    #[test]
    fn long_stalls_stay_within_unit_range() {
        let f = frame_factor(0.1, 10.0, 60.0);
        assert!(f > 0.99 && f <= 1.0);
    }

    #[test]
    fn lerp_vec2_is_componentwise() {
        let v = lerp_vec2(Vec2::ZERO, Vec2::new(100.0, 200.0), 0.1);
        assert_eq!(v, Vec2::new(10.0, 20.0));
    }
}
