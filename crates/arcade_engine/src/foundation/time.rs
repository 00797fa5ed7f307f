//! Time management utilities

use std::time::{Duration, Instant};

/// Wall-clock frame timer
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Converts variable frame deltas into whole simulation ticks.
///
/// The simulation only ever advances in fixed steps; leftover time carries
/// over to the next frame.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_ticks_per_frame: u32,
}

impl FixedTimestep {
    /// Create a timestep running at `ticks_per_second`
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
            max_ticks_per_frame: 8,
        }
    }

    /// Cap on ticks handed out for a single frame so a long stall does not
    /// turn into a burst of catch-up ticks.
    pub fn with_max_ticks_per_frame(mut self, max: u32) -> Self {
        self.max_ticks_per_frame = max.max(1);
        self
    }

    /// Length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f32(self.step)
    }

    /// Add a frame delta (seconds) and return how many ticks are due.
    pub fn accumulate(&mut self, delta_time: f32) -> u32 {
        self.accumulator += delta_time.max(0.0);
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_ticks_per_frame {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}
