//! Unit types for timing quantities.
//!
//! Keeps tick rates and baud rates from being confused with plain counters.

use serde::Deserialize;

/// Nanoseconds per second.
const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Frequency in hertz.
///
/// Used for the tick rate and the CPU clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Hertz(pub u32);

impl Hertz {
    /// Create a new Hertz value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Period of one cycle in nanoseconds.
    ///
    /// Returns 0 for a zero frequency; validation rejects that case before
    /// a clock is ever built from it.
    #[inline]
    pub const fn period_ns(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            NANOS_PER_SEC / self.0
        }
    }
}

/// Serial line rate in symbols per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct BaudRate(pub u32);

impl BaudRate {
    /// Create a new BaudRate value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}
