use std::time::Instant;

/// Frame deltas above this are logged; they usually mean the driver stalled.
pub const STALL_WARNING_SECONDS: f32 = 0.25;

/// Wall-clock delta between frames for real-time drivers
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick; advances the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if delta > STALL_WARNING_SECONDS {
            log::warn!("frame delta {:.3}s exceeds {:.3}s", delta, STALL_WARNING_SECONDS);
        }
        delta
    }

    /// Restart from the current instant, e.g. after the window regains focus
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
