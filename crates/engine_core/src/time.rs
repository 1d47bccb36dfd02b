//! Frame timing for the game loop.

use std::time::{Duration, Instant};

/// Manages frame timing and fixed-step accumulation.
#[derive(Debug)]
pub struct Time {
    /// Time when the loop started.
    start_time: Instant,
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Frame count since start.
    frame_count: u64,
    /// Fixed timestep for simulation (default 60 Hz).
    fixed_timestep: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total elapsed wall time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        (self.last_frame - self.start_time).as_secs_f32()
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Set the fixed timestep rate in Hz. Non-finite or non-positive rates
    /// leave the timestep unchanged.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        if hz.is_finite() && hz > 0.0 {
            self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fixed_rate_keeps_the_previous_timestep() {
        let mut time = Time::new();
        time.set_fixed_rate(30.0);
        let before = time.fixed_timestep_seconds();

        time.set_fixed_rate(0.0);
        time.set_fixed_rate(-10.0);
        time.set_fixed_rate(f64::NAN);
        time.set_fixed_rate(f64::INFINITY);
        assert_eq!(time.fixed_timestep_seconds(), before);
    }
}
