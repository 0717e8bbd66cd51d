/// Tick timing and control for real-time hosts
///
/// Implements a fixed timestep accumulator: the simulation advances at a
/// constant 60 ticks per second regardless of how fast the host renders.
use std::time::{Duration, Instant};

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Fixed-timestep tick loop state
pub struct TickLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the loop started
    start_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Total ticks executed
    tick_count: u64,
}

impl TickLoop {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            paused: false,
            tick_count: 0,
        }
    }

    /// Begin a new host frame, returns the number of simulation ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;

        // If paused, don't accumulate time
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Get the fixed timestep (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for TickLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_tick_loop_creation() {
        let tick_loop = TickLoop::new();
        assert_eq!(tick_loop.tick_count(), 0);
        assert!(!tick_loop.is_paused());
    }

    #[test]
    fn test_fixed_timestep() {
        let tick_loop = TickLoop::new();
        assert!((tick_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_pause_resume() {
        let mut tick_loop = TickLoop::new();
        tick_loop.pause();
        assert!(tick_loop.is_paused());
        tick_loop.resume();
        assert!(!tick_loop.is_paused());
    }

    #[test]
    fn test_toggle_pause() {
        let mut tick_loop = TickLoop::new();
        tick_loop.toggle_pause();
        assert!(tick_loop.is_paused());
        tick_loop.toggle_pause();
        assert!(!tick_loop.is_paused());
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut tick_loop = TickLoop::new();
        tick_loop.pause();

        thread::sleep(Duration::from_millis(50));

        assert_eq!(tick_loop.begin_frame(), 0);
    }

    #[test]
    fn test_tick_accumulation() {
        let mut tick_loop = TickLoop::new();

        thread::sleep(FIXED_TIMESTEP_DURATION);

        let ticks = tick_loop.begin_frame();
        assert!(ticks <= MAX_TICKS_PER_FRAME);
    }

    #[test]
    fn test_max_ticks_limit() {
        let mut tick_loop = TickLoop::new();

        // A very long frame (300ms) would allow 18 ticks uncapped
        thread::sleep(Duration::from_millis(300));

        let ticks = tick_loop.begin_frame();
        assert!(ticks <= MAX_TICKS_PER_FRAME);
    }

    #[test]
    fn test_elapsed_time() {
        let tick_loop = TickLoop::new();
        thread::sleep(Duration::from_millis(10));
        assert!(tick_loop.elapsed() >= Duration::from_millis(10));
    }
}
