//! Contact sampling over embedded-hal input pins.

use embedded_hal::digital::InputPin;

use crate::config::EncoderConfig;
use crate::error::{PinError, PinId, Result};

/// Reads both encoder contacts and normalizes their polarity.
///
/// Encoders are usually wired to ground with pull-ups enabled, so an engaged
/// contact reads low. With `active_low` set (the default) levels are
/// inverted so that `true` always means "contact engaged".
pub struct PinSampler<A, B>
where
    A: InputPin,
    B: InputPin,
{
    pin_a: A,
    pin_b: B,
    active_low: bool,
}

impl<A, B> PinSampler<A, B>
where
    A: InputPin,
    B: InputPin,
{
    /// Create a sampler for active-low contacts.
    pub fn new(pin_a: A, pin_b: B) -> Self {
        Self::with_polarity(pin_a, pin_b, true)
    }

    /// Create a sampler with explicit polarity.
    pub fn with_polarity(pin_a: A, pin_b: B, active_low: bool) -> Self {
        Self {
            pin_a,
            pin_b,
            active_low,
        }
    }

    /// Create a sampler using the polarity from an EncoderConfig.
    pub fn from_encoder_config(pin_a: A, pin_b: B, config: &EncoderConfig) -> Self {
        Self::with_polarity(pin_a, pin_b, config.active_low)
    }

    /// Whether an engaged contact reads low.
    #[inline]
    pub fn active_low(&self) -> bool {
        self.active_low
    }

    /// Read both contacts as `(pin_a_active, pin_b_active)`.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::ReadFailed`] naming the pin that could not be read.
    pub fn sample(&mut self) -> Result<(bool, bool)> {
        let a = self
            .pin_a
            .is_high()
            .map_err(|_| PinError::ReadFailed(PinId::A))?;
        let b = self
            .pin_b
            .is_high()
            .map_err(|_| PinError::ReadFailed(PinId::B))?;

        Ok((a != self.active_low, b != self.active_low))
    }

    /// Give back the pins.
    pub fn release(self) -> (A, B) {
        (self.pin_a, self.pin_b)
    }
}
