//! Quadrature decoder bound to a shared position.

use super::builder::QuadratureDecoderBuilder;
use super::context::DecoderContext;
use super::position::Position;
use super::state::{Direction, EncoderState};

/// Debounced quadrature decoder for one rotary encoder.
///
/// The decoder is owned by the tick side (a timer interrupt or a
/// [`PeriodicClock`](crate::clock::PeriodicClock)) and advanced with
/// [`update`](Self::update). The counter lives in a [`Position`] borrowed
/// from the caller, so the main flow can read it through the same
/// reference while the decoder is busy elsewhere.
///
/// # Example
///
/// ```rust
/// use quadrature_debounce::{EncoderState, Position, QuadratureDecoder};
///
/// static POSITION: Position = Position::new(0);
///
/// let mut decoder = QuadratureDecoder::builder()
///     .name("volume")
///     .position(&POSITION)
///     .build()
///     .unwrap();
///
/// decoder.update(true, false);
/// decoder.update(true, false);
/// decoder.update(true, true);
/// assert_eq!(decoder.state(), EncoderState::RotatedCW);
/// assert_eq!(POSITION.get(), 1);
/// ```
pub struct QuadratureDecoder<'a> {
    /// Encoder name for logging/debugging.
    name: heapless::String<32>,

    /// State machine, touched only by the tick side.
    context: DecoderContext,

    /// Shared counter.
    position: &'a Position,
}

impl<'a> QuadratureDecoder<'a> {
    /// Start building a decoder.
    pub fn builder() -> QuadratureDecoderBuilder<'a> {
        QuadratureDecoderBuilder::new()
    }

    pub(crate) fn new(
        name: heapless::String<32>,
        debounce_threshold: u8,
        position: &'a Position,
    ) -> Self {
        debug!(
            "encoder {}: debounce threshold {}, position {}",
            name.as_str(),
            debounce_threshold,
            position.get()
        );
        Self {
            name,
            context: DecoderContext::new(debounce_threshold),
            position,
        }
    }

    /// Advance the state machine by one tick.
    ///
    /// `pin_a_active` and `pin_b_active` must already be normalized so that
    /// `true` means the contact is engaged. A completed step is applied to
    /// the shared position and returned.
    pub fn update(&mut self, pin_a_active: bool, pin_b_active: bool) -> Option<Direction> {
        let step = self.context.update(pin_a_active, pin_b_active);
        if let Some(direction) = step {
            let position = self.position.step(direction);
            trace!(
                "encoder {}: {:?} step, position {}",
                self.name.as_str(),
                direction,
                position
            );
        }
        step
    }

    /// Get the encoder name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position.get()
    }

    /// Overwrite the position, e.g. for calibration.
    #[inline]
    pub fn set_position(&self, value: u16) {
        self.position.set(value);
    }

    /// Add one to the position, saturating at `u16::MAX`.
    #[inline]
    pub fn increment_position(&self) -> u16 {
        self.position.increment()
    }

    /// Subtract one from the position, saturating at 0.
    #[inline]
    pub fn decrement_position(&self) -> u16 {
        self.position.decrement()
    }

    /// The shared position, for handing to a consumer.
    #[inline]
    pub fn position_handle(&self) -> &'a Position {
        self.position
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> EncoderState {
        self.context.state()
    }

    /// Ticks counted in the current debounce state.
    #[inline]
    pub fn debounce_count(&self) -> u8 {
        self.context.debounce_count()
    }

    /// Configured debounce threshold.
    #[inline]
    pub fn debounce_threshold(&self) -> u8 {
        self.context.debounce_threshold()
    }
}
