// Frame timing
//
// Tracks the wall-clock delta between frames and a rolling FPS average.
// The delta is clamped so a stall (debugger pause, window drag) cannot
// turn into one giant simulation step.

use std::time::{Duration, Instant};

/// Longest delta a single frame may report, in seconds
const MAX_FRAME_DELTA: f32 = 0.25;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

pub struct FrameClock {
    last_frame_time: Instant,
    start_time: Instant,
    frame_times: Vec<Duration>,
    frame_count: u64,
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame_time: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame; returns the clamped delta in seconds
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        frame_time.as_secs_f32().min(MAX_FRAME_DELTA)
    }

    /// Current FPS, averaged over the window
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Wall-clock time since the clock was created
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg = total / self.frame_times.len() as u32;
        self.current_fps = if avg.as_secs_f32() > 0.0 {
            1.0 / avg.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_frames_are_counted() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            clock.begin_frame();
        }
        assert_eq!(clock.frame_count(), 5);
    }

    #[test]
    fn test_delta_is_positive_and_clamped() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(300));
        let dt = clock.begin_frame();

        assert!(dt > 0.0);
        assert!(dt <= MAX_FRAME_DELTA);
    }

    #[test]
    fn test_short_frames_report_their_real_delta() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(20));
        let dt = clock.begin_frame();

        assert!(dt >= 0.015);
        assert!(dt <= MAX_FRAME_DELTA);
    }

    #[test]
    fn test_elapsed_moves_forward() {
        let clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        assert!(clock.elapsed() >= Duration::from_millis(10));
    }
}
