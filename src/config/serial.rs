//! Serial link configuration for position reports.
//!
//! Computes the UART divider for a 16x oversampling UART and checks the
//! resulting rate error the same way AVR toolchains do at build time.

use serde::Deserialize;

use super::units::{BaudRate, Hertz};

/// Default CPU clock (16 MHz).
pub const DEFAULT_CPU_CLOCK: Hertz = Hertz(16_000_000);

/// Lowest acceptable actual/requested ratio, per mille.
pub const MIN_BAUD_PERMILLE: u32 = 990;

/// Highest acceptable actual/requested ratio, per mille.
pub const MAX_BAUD_PERMILLE: u32 = 1010;

/// Serial link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SerialConfig {
    /// Requested line rate.
    pub baud: BaudRate,

    /// CPU clock feeding the UART.
    #[serde(default = "default_cpu_hz")]
    pub cpu_hz: Hertz,
}

fn default_cpu_hz() -> Hertz {
    DEFAULT_CPU_CLOCK
}

impl SerialConfig {
    /// Create a serial configuration for the default 16 MHz clock.
    pub fn new(baud: BaudRate) -> Self {
        Self {
            baud,
            cpu_hz: DEFAULT_CPU_CLOCK,
        }
    }

    /// Rounded divider plus one, `(f + 8b) / 16b`.
    ///
    /// `None` if the baud rate is zero or too high for the clock.
    fn divisor(&self) -> Option<u64> {
        let baud = u64::from(self.baud.0);
        if baud == 0 {
            return None;
        }
        let divisor = (u64::from(self.cpu_hz.0) + baud * 8) / (baud * 16);
        if divisor == 0 {
            None
        } else {
            Some(divisor)
        }
    }

    /// Baud rate register value (UBRR).
    pub fn ubrr(&self) -> Option<u32> {
        self.divisor().map(|d| (d - 1) as u32)
    }

    /// Baud rate actually produced by [`ubrr`](Self::ubrr).
    pub fn actual_baud(&self) -> Option<u32> {
        self.divisor()
            .map(|d| (u64::from(self.cpu_hz.0) / (16 * d)) as u32)
    }

    /// Ratio actual/requested in per mille (1000 = no error).
    pub fn error_permille(&self) -> Option<u32> {
        let actual = u64::from(self.actual_baud()?);
        Some((actual * 1000 / u64::from(self.baud.0)) as u32)
    }

    /// Whether the achievable rate is within ±1% of the requested one.
    pub fn is_within_tolerance(&self) -> bool {
        self.error_permille()
            .map(|e| (MIN_BAUD_PERMILLE..=MAX_BAUD_PERMILLE).contains(&e))
            .unwrap_or(false)
    }
}
