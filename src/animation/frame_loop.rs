use web_time::Instant;

use crate::util::frame_timing::FrameTiming;

/// Lifecycle of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Created, no frame produced yet.
    Idle,
    /// Producing frames.
    Running,
    /// Cancelled; never produces frames again.
    Stopped,
}

/// One scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Seconds since the previous frame, `None` for the first frame.
    pub dt: Option<f32>,
    /// 1-based frame number.
    pub number: u64,
}

/// Cancellable frame loop.
///
/// The host (`requestAnimationFrame` or a winit redraw) calls
/// [`advance`](Self::advance) on every callback and reschedules only while
/// [`is_running`](Self::is_running) holds.
pub struct FrameLoop {
    state: LoopState,
    timing: FrameTiming,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// A loop in the `Idle` state.
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            timing: FrameTiming::new(),
        }
    }

    /// Idle → Running. Returns `false` if the loop was already running or
    /// has been stopped.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            true
        } else {
            false
        }
    }

    /// Cancel the loop. Stopping is permanent.
    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            log::debug!(
                "frame loop stopped after {} frames",
                self.timing.frame_count()
            );
        }
        self.state = LoopState::Stopped;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether another frame should be scheduled.
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Produce the frame for time `now`, or `None` unless running.
    pub fn advance_at(&mut self, now: Instant) -> Option<Frame> {
        if !self.is_running() {
            return None;
        }
        let dt = self.timing.tick_at(now);
        Some(Frame {
            dt,
            number: self.timing.frame_count(),
        })
    }

    /// [`advance_at`](Self::advance_at) with the current time.
    pub fn advance(&mut self) -> Option<Frame> {
        self.advance_at(Instant::now())
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}
