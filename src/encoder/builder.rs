//! Builder pattern for QuadratureDecoder.

use crate::config::{EncoderConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::context::DEFAULT_DEBOUNCE_THRESHOLD;
use super::decoder::QuadratureDecoder;
use super::position::Position;

/// Builder for creating QuadratureDecoder instances.
pub struct QuadratureDecoderBuilder<'a> {
    name: Option<heapless::String<32>>,
    debounce_threshold: u8,
    initial_position: Option<u16>,
    position: Option<&'a Position>,
}

impl Default for QuadratureDecoderBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> QuadratureDecoderBuilder<'a> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            debounce_threshold: DEFAULT_DEBOUNCE_THRESHOLD,
            initial_position: None,
            position: None,
        }
    }

    /// Set the encoder name.
    ///
    /// Names longer than 32 bytes are cut at the last character that fits.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(truncated_name(name));
        self
    }

    /// Set the number of debounce ticks.
    pub fn debounce_threshold(mut self, ticks: u8) -> Self {
        self.debounce_threshold = ticks;
        self
    }

    /// Load this value into the position when building.
    ///
    /// Without it the shared position keeps whatever value it holds.
    pub fn initial_position(mut self, value: u16) -> Self {
        self.initial_position = Some(value);
        self
    }

    /// Set the shared position counter.
    pub fn position(mut self, position: &'a Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Configure from an EncoderConfig.
    pub fn from_encoder_config(mut self, config: &EncoderConfig) -> Self {
        self.name = Some(config.name.clone());
        self.debounce_threshold = config.debounce_threshold;
        self.initial_position = Some(config.initial_position);
        self
    }

    /// Configure from SystemConfig by encoder name.
    pub fn from_config(self, config: &SystemConfig, encoder_name: &str) -> Result<Self> {
        let encoder_config = config.encoder(encoder_name).ok_or_else(|| {
            Error::Config(ConfigError::EncoderNotFound(
                heapless::String::try_from(encoder_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_encoder_config(encoder_config))
    }

    /// Build the QuadratureDecoder.
    ///
    /// # Errors
    ///
    /// Returns an error if no position was supplied.
    pub fn build(self) -> Result<QuadratureDecoder<'a>> {
        let position = self
            .position
            .ok_or(Error::Config(ConfigError::MissingField("position")))?;

        if let Some(initial) = self.initial_position {
            position.set(initial);
        }

        let name = match self.name {
            Some(name) => name,
            None => heapless::String::try_from("encoder").unwrap_or_default(),
        };

        Ok(QuadratureDecoder::new(name, self.debounce_threshold, position))
    }
}

fn truncated_name(name: &str) -> heapless::String<32> {
    let mut out = heapless::String::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
