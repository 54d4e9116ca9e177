//! Periodic tick driver.
//!
//! Couples a [`PinSampler`] to a [`QuadratureDecoder`] and runs one decoder
//! update per tick. On hardware, call [`PeriodicClock::tick`] from the timer
//! interrupt. Elsewhere, [`PeriodicClock::run_for`] paces ticks with an
//! embedded-hal delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{ClockConfig, Hertz};
use crate::encoder::{Direction, PinSampler, QuadratureDecoder};
use crate::error::Result;

/// Fixed-rate tick source for one encoder.
///
/// Taking `&mut self` in [`tick`](Self::tick) keeps updates from ever
/// overlapping.
pub struct PeriodicClock<'a, A, B>
where
    A: InputPin,
    B: InputPin,
{
    sampler: PinSampler<A, B>,
    decoder: QuadratureDecoder<'a>,
    tick_rate: Hertz,
    ticks: u64,
}

impl<'a, A, B> PeriodicClock<'a, A, B>
where
    A: InputPin,
    B: InputPin,
{
    /// Create a clock ticking at `tick_rate`.
    pub fn new(sampler: PinSampler<A, B>, decoder: QuadratureDecoder<'a>, tick_rate: Hertz) -> Self {
        debug!(
            "clock for {}: {} Hz ({} ns period)",
            decoder.name(),
            tick_rate.value(),
            tick_rate.period_ns()
        );
        Self {
            sampler,
            decoder,
            tick_rate,
            ticks: 0,
        }
    }

    /// Create a clock from a ClockConfig.
    pub fn from_config(
        sampler: PinSampler<A, B>,
        decoder: QuadratureDecoder<'a>,
        config: &ClockConfig,
    ) -> Self {
        Self::new(sampler, decoder, config.tick_hz)
    }

    /// Sample both contacts and advance the decoder once.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be read; the decoder is left untouched.
    pub fn tick(&mut self) -> Result<Option<Direction>> {
        let (pin_a, pin_b) = self.sampler.sample()?;
        self.ticks = self.ticks.wrapping_add(1);
        Ok(self.decoder.update(pin_a, pin_b))
    }

    /// Run `ticks` ticks, waiting one period after each.
    ///
    /// Returns the net number of steps taken (clockwise positive).
    ///
    /// # Errors
    ///
    /// Stops at the first pin read failure.
    pub fn run_for<D: DelayNs>(&mut self, delay: &mut D, ticks: u32) -> Result<i32> {
        let period_ns = self.tick_rate.period_ns();
        let mut net = 0i32;
        for _ in 0..ticks {
            if let Some(direction) = self.tick()? {
                net += i32::from(direction.sign());
            }
            delay.delay_ns(period_ns);
        }
        Ok(net)
    }

    /// Configured tick rate.
    #[inline]
    pub fn tick_rate(&self) -> Hertz {
        self.tick_rate
    }

    /// Tick period in nanoseconds.
    #[inline]
    pub fn period_ns(&self) -> u32 {
        self.tick_rate.period_ns()
    }

    /// Ticks completed so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The decoder being driven.
    #[inline]
    pub fn decoder(&self) -> &QuadratureDecoder<'a> {
        &self.decoder
    }

    /// Mutable access to the decoder.
    #[inline]
    pub fn decoder_mut(&mut self) -> &mut QuadratureDecoder<'a> {
        &mut self.decoder
    }

    /// Tear down the clock, returning its parts.
    pub fn release(self) -> (PinSampler<A, B>, QuadratureDecoder<'a>) {
        (self.sampler, self.decoder)
    }
}
