//! Frame pacing for the headless demo loop.

use std::time::{Duration, Instant};

/// Frame timing with a target FPS and a smoothed FPS readout.
#[derive(Debug)]
pub struct FrameTiming {
    /// Minimum frame duration derived from the target FPS (zero when the
    /// target is unlimited).
    min_frame_duration: Duration,
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    smoothing: f32,
}

impl FrameTiming {
    /// Frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Sleep out the remainder of the frame budget, then return the elapsed
    /// time since the previous call as the next frame's delta.
    pub fn next_frame(&mut self) -> Duration {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.min_frame_duration {
            std::thread::sleep(self.min_frame_duration - elapsed);
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;

        let secs = frame_time.as_secs_f32();
        if secs > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + (1.0 / secs) * self.smoothing;
        }
        frame_time
    }

    /// Current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
