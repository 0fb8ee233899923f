use std::thread;
use std::time::{Duration, Instant};

/// Weight of the newest frame in the smoothed frame interval.
const SMOOTHING: f64 = 0.1;

/// Holds a loop to a fixed frame rate by sleeping off whatever is left of each
/// frame. A frame that runs long is not made up for later.
///
/// Also keeps track of the rate the loop actually manages, as a smoothed
/// average of the time between calls to [FramePacer::wait].
pub struct FramePacer {
    frame: Duration,
    deadline: Instant,
    last_tick: Instant,
    // Seconds, starts out at the target
    average_frame: f64,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        let now = Instant::now();
        FramePacer {
            frame,
            deadline: now + frame,
            last_tick: now,
            average_frame: frame.as_secs_f64(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Frames per second actually achieved lately.
    pub fn measured_fps(&self) -> f64 {
        1.0 / self.average_frame
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            thread::sleep(self.deadline - now);
            self.deadline += self.frame;
        } else {
            self.deadline = now + self.frame;
        }

        let tick = Instant::now();
        let interval = tick.duration_since(self.last_tick).as_secs_f64();
        self.average_frame += SMOOTHING * (interval - self.average_frame);
        self.last_tick = tick;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(FramePacer::new(50).frame_duration(), Duration::from_millis(20));
        assert_eq!(FramePacer::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_pacer_holds_rate() {
        let mut pacer = FramePacer::new(200);
        let start = Instant::now();
        for _ in 0..10 {
            pacer.wait();
        }
        // Ten 5 ms frames can't finish early
        assert!(start.elapsed() >= Duration::from_millis(45));
    }

    #[test]
    fn test_measured_fps() {
        let mut pacer = FramePacer::new(200);
        approx::assert_relative_eq!(pacer.measured_fps(), 200.0, max_relative = 1e-9);

        for _ in 0..20 {
            pacer.wait();
        }
        let fps = pacer.measured_fps();
        assert!(fps.is_finite() && fps > 0.0);
        // Sleeping can only slow a frame down
        assert!(fps < 400.0, "measured {} fps", fps);
    }

    #[test]
    fn test_measured_fps_notices_slow_frames() {
        let mut pacer = FramePacer::new(1000);
        for _ in 0..30 {
            thread::sleep(Duration::from_millis(10));
            pacer.wait();
        }
        // Each frame takes at least 10 ms, far from the 1 ms target
        assert!(pacer.measured_fps() < 200.0);
    }
}
