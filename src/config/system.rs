//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::clock::ClockConfig;
use super::encoder::EncoderConfig;
use super::serial::SerialConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named encoder configurations.
    #[serde(default)]
    pub encoders: FnvIndexMap<String<32>, EncoderConfig, 8>,

    /// Tick clock settings.
    #[serde(default)]
    pub clock: ClockConfig,

    /// Serial report link, if any.
    #[serde(default)]
    pub serial: Option<SerialConfig>,
}

impl SystemConfig {
    /// Get an encoder configuration by name.
    pub fn encoder(&self, name: &str) -> Option<&EncoderConfig> {
        self.encoders
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all encoder names.
    pub fn encoder_names(&self) -> impl Iterator<Item = &str> {
        self.encoders.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            encoders: FnvIndexMap::new(),
            clock: ClockConfig::default(),
            serial: None,
        }
    }
}
