/// Seconds between FPS refreshes
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame-rate counter, refreshed once per interval like a stats overlay
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
    total_frames: u64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_interval(FPS_UPDATE_INTERVAL)
    }

    pub fn with_interval(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
            total_frames: 0,
        }
    }

    /// Record one frame, returns true when the displayed value refreshed
    pub fn record(&mut self, delta: f32) -> bool {
        self.frames += 1;
        self.total_frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Frame time in milliseconds for the current FPS value
    pub fn frame_time_ms(&self) -> f32 {
        if self.fps > 0.0 {
            1000.0 / self.fps
        } else {
            0.0
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
