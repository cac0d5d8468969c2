//! Frame clock for the animation loop.

use web_time::{Duration, Instant};

/// Longest frame delta handed to the animation step. A tab that was hidden
/// for minutes resumes with one capped step instead of a jump.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Frame clock: per-frame delta time plus a smoothed FPS readout.
pub struct FrameTiming {
    /// Last frame timestamp (`None` before the first tick)
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames ticked so far
    frame_count: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a frame clock that has not ticked yet.
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            frame_count: 0,
        }
    }

    /// Advance the clock to `now` and return the elapsed seconds since the
    /// previous tick. The first tick returns `None`: the caller should run a
    /// single reference frame.
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        let previous = self.last_frame.replace(now);
        self.frame_count += 1;
        let elapsed = now.saturating_duration_since(previous?);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        Some(elapsed.min(MAX_FRAME_DELTA).as_secs_f32())
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_has_no_delta() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.tick_at(Instant::now()), None);
        assert_eq!(timing.frame_count(), 1);
    }

    #[test]
    fn delta_is_measured_between_ticks() {
        let mut timing = FrameTiming::new();
        let start = Instant::now();
        let _ = timing.tick_at(start);
        let dt = timing.tick_at(start + Duration::from_millis(20)).unwrap();
        assert!((dt - 0.02).abs() < 1e-4);
    }

    #[test]
    fn long_gaps_are_capped() {
        let mut timing = FrameTiming::new();
        let start = Instant::now();
        let _ = timing.tick_at(start);
        let dt = timing.tick_at(start + Duration::from_secs(30)).unwrap();
        assert!((dt - MAX_FRAME_DELTA.as_secs_f32()).abs() < 1e-6);
    }

    #[test]
    fn fps_moves_toward_measured_rate() {
        let mut timing = FrameTiming::new();
        let mut now = Instant::now();
        let _ = timing.tick_at(now);
        for _ in 0..200 {
            now += Duration::from_millis(33);
            let _ = timing.tick_at(now);
        }
        assert!((timing.fps() - 30.3).abs() < 1.0);
    }
}
