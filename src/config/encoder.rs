//! Encoder configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// Per-encoder configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EncoderConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Ticks a single-contact pattern must hold before the decoder arms.
    #[serde(default = "default_debounce_threshold")]
    pub debounce_threshold: u8,

    /// Contacts pull the line low when engaged (pull-up wiring).
    #[serde(default = "default_active_low")]
    pub active_low: bool,

    /// Position loaded into the counter when the decoder is built.
    #[serde(default)]
    pub initial_position: u16,
}

fn default_debounce_threshold() -> u8 {
    1
}

fn default_active_low() -> bool {
    true
}

impl EncoderConfig {
    /// Create a configuration with default debounce, polarity and position.
    pub fn new(name: String<32>) -> Self {
        Self {
            name,
            debounce_threshold: default_debounce_threshold(),
            active_low: default_active_low(),
            initial_position: 0,
        }
    }

    /// Number of ticks from the first edge until the decoder can arm.
    ///
    /// The entry tick counts as the first debounce tick, so arming happens
    /// on tick `debounce_threshold + 1`.
    pub fn ticks_to_arm(&self) -> u16 {
        u16::from(self.debounce_threshold) + 1
    }
}
