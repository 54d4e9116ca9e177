//! Tick clock configuration.

use serde::Deserialize;

use super::units::Hertz;

/// Default sampling rate of the tick clock.
pub const DEFAULT_TICK_RATE: Hertz = Hertz(200);

/// Configuration of the periodic tick source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Tick rate in Hz.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: Hertz,
}

fn default_tick_hz() -> Hertz {
    DEFAULT_TICK_RATE
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_RATE,
        }
    }
}

impl ClockConfig {
    /// Tick period in nanoseconds.
    #[inline]
    pub fn period_ns(&self) -> u32 {
        self.tick_hz.period_ns()
    }

    /// Wall time a debounce of `threshold` ticks takes before arming, in
    /// nanoseconds.
    pub fn debounce_window_ns(&self, threshold: u8) -> u64 {
        (u64::from(threshold) + 1) * u64::from(self.period_ns())
    }
}
