//! Fixed-rate frame clock.
//!
//! `draw_web()` runs at the display's frame rate; the clock turns wall-clock
//! timestamps into whole ticks so float animations fade at a steady pace.

/// Gaps longer than this (e.g. a backgrounded tab) count as this long.
pub const MAX_FRAME_GAP_MS: f64 = 500.0;

pub struct FrameClock {
    tick_ms: f64,
    /// Milliseconds not yet turned into ticks.
    carry: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            tick_ms: 1000.0 / ticks_per_sec.max(1) as f64,
            carry: 0.0,
            last_ms: None,
        }
    }

    /// Feed the current timestamp; returns how many ticks elapsed since the
    /// previous call. The first call only records the timestamp.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_ms {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_GAP_MS),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        self.carry += delta;
        let ticks = (self.carry / self.tick_ms) as u32;
        self.carry -= ticks as f64 * self.tick_ms;
        ticks
    }
}
