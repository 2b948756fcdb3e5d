//! Frame pacing for the render-loop driver.

use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame limiting.
///
/// The driver asks [`should_render`](Self::should_render) before ticking
/// the stage and calls [`end_frame`](Self::end_frame) afterwards, so tick
/// timestamps are monotonically increasing by construction.
#[derive(Debug)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames completed since construction
    frame_count: u64,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Frame timer whose first frame is measured from `start`.
    #[must_use]
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: start,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frame_count: 0,
        }
    }

    /// True once enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render_at(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        now.saturating_duration_since(self.last_frame)
            >= self.min_frame_duration
    }

    /// [`should_render_at`](Self::should_render_at) against the wall clock.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.should_render_at(Instant::now())
    }

    /// Time left until the next frame is due (zero when already due).
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.min_frame_duration
            .saturating_sub(now.saturating_duration_since(self.last_frame))
    }

    /// Record a finished frame at `now`.
    pub fn end_frame_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        self.end_frame_at(Instant::now());
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Minimum spacing between frames.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.min_frame_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_always_renders() {
        let start = Instant::now();
        let timing = FrameTiming::starting_at(0, start);
        assert!(timing.should_render_at(start));
        assert_eq!(timing.remaining_at(start), Duration::ZERO);
    }

    #[test]
    fn test_limited_waits_for_frame_budget() {
        let start = Instant::now();
        let timing = FrameTiming::starting_at(50, start);
        assert_eq!(timing.frame_duration(), Duration::from_millis(20));
        assert!(!timing.should_render_at(start + Duration::from_millis(5)));
        assert_eq!(
            timing.remaining_at(start + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert!(timing.should_render_at(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_smoothed_fps_moves_toward_measured_rate() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(0, start);
        let mut now = start;
        for _ in 0..200 {
            now += Duration::from_millis(10);
            timing.end_frame_at(now);
        }
        assert_eq!(timing.frame_count(), 200);
        assert!((timing.fps() - 100.0).abs() < 1.0, "fps {}", timing.fps());
    }
}
