use std::time::{Duration, Instant};

/// Frame timing information produced once per frame by [`Clock::tick`].
///
/// The delta is what frame-rate-independent movement should scale by.
#[derive(Debug, Clone)]
pub struct FrameTime {
    /// Time elapsed since the last frame.
    pub delta: Duration,
    /// Total time elapsed since the clock was created.
    pub elapsed: Duration,
    /// Total number of frames ticked so far.
    pub frame_count: u64,
}

impl FrameTime {
    /// Delta time in seconds.
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Elapsed time in seconds.
    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// Per-frame clock with a once-per-second FPS estimate.
///
/// Call [`Clock::tick`] exactly once per frame:
///
/// ```
/// use vantage_core::Clock;
///
/// let mut clock = Clock::new();
/// let time = clock.tick();
/// let _dt = time.delta_seconds();
/// ```
pub struct Clock {
    last_frame: Instant,
    elapsed: Duration,
    frame_count: u64,
    fps: f32,
    fps_window_start: Duration,
    fps_window_frames: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed: Duration::ZERO,
            frame_count: 0,
            fps: 0.0,
            fps_window_start: Duration::ZERO,
            fps_window_frames: 0,
        }
    }

    /// Advance the clock by the wall-clock time since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(delta)
    }

    /// Frames per second, averaged over the last completed one-second window.
    ///
    /// Reads 0.0 until the first full second has elapsed.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    fn advance(&mut self, delta: Duration) -> FrameTime {
        self.elapsed += delta;
        self.frame_count += 1;
        self.fps_window_frames += 1;

        let window = self.elapsed.saturating_sub(self.fps_window_start);
        if window >= Duration::from_secs(1) {
            self.fps = self.fps_window_frames as f32 / window.as_secs_f32();
            self.fps_window_frames = 0;
            self.fps_window_start = self.elapsed;
        }

        FrameTime {
            delta,
            elapsed: self.elapsed,
            frame_count: self.frame_count,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
