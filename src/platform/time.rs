//! Frame timing
//!
//! `Clock::tick` blocks until the next frame is due and returns how long the
//! previous frame actually took. That value is the simulation delta.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Wait out the rest of the frame budget, return elapsed milliseconds
    fn tick(&mut self, target_fps: u32) -> f32;
}

/// Wall-clock limiter that sleeps the thread to cap the frame rate
#[derive(Debug)]
pub struct FrameLimiter {
    last: Instant,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Clock for FrameLimiter {
    fn tick(&mut self, target_fps: u32) -> f32 {
        if target_fps > 0 {
            let budget = Duration::from_secs_f64(1.0 / target_fps as f64);
            let spent = self.last.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32() * 1000.0
    }
}

/// Never sleeps; every frame takes exactly the target frame time.
/// Used by the headless binary and tests for reproducible runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    pub frames: u64,
}

impl Clock for FixedClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        self.frames += 1;
        1000.0 / target_fps.max(1) as f32
    }
}
