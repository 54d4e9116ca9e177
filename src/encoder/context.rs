//! Debounced quadrature state machine.
//!
//! Debounce applies only to the first contact leaving the rest position.
//! Once that contact has settled, the second contact joining completes the
//! step immediately.
//!
//! Rules run in a fixed order on every tick, and each rule sees the state
//! left by the rules before it:
//!
//! 1. Both contacts released: reset to [`EncoderState::Idle`].
//! 2. From `Idle`, a single engaged contact starts debouncing toward it.
//! 3. While debouncing, count ticks up to the threshold, then arm for the
//!    opposite contact if the pattern still holds, or fall back to `Idle`.
//! 4. From an armed state, both contacts engaged counts one step.

use super::state::{Direction, EncoderState, PinPattern};

/// Default number of debounce ticks.
pub const DEFAULT_DEBOUNCE_THRESHOLD: u8 = 1;

/// Tick-context state of one encoder.
///
/// Owned exclusively by whatever drives [`update`](Self::update), so it
/// needs no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderContext {
    state: EncoderState,
    debounce_count: u8,
    debounce_threshold: u8,
}

impl DecoderContext {
    /// Create a context in [`EncoderState::Idle`].
    pub const fn new(debounce_threshold: u8) -> Self {
        Self {
            state: EncoderState::Idle,
            debounce_count: 0,
            debounce_threshold,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// Ticks counted in the current debounce state.
    #[inline]
    pub fn debounce_count(&self) -> u8 {
        self.debounce_count
    }

    /// Ticks a single-contact pattern must hold before arming.
    #[inline]
    pub fn debounce_threshold(&self) -> u8 {
        self.debounce_threshold
    }

    /// Advance by one tick.
    ///
    /// Returns the step completed on this tick, if any. A debounce is
    /// abandoned on the first tick whose pattern differs from the one being
    /// debounced, even before the threshold is reached.
    pub fn update(&mut self, pin_a_active: bool, pin_b_active: bool) -> Option<Direction> {
        let pins = PinPattern::from_levels(pin_a_active, pin_b_active);

        if pins == PinPattern::Released {
            self.enter(EncoderState::Idle);
        }

        // Both engaged at rest is noise and leaves the machine idle.
        if self.state == EncoderState::Idle {
            match pins {
                PinPattern::AOnly => self.enter(EncoderState::DebounceTowardA),
                PinPattern::BOnly => self.enter(EncoderState::DebounceTowardB),
                PinPattern::Released | PinPattern::Both => {}
            }
        }

        match self.state {
            EncoderState::DebounceTowardA => {
                self.settle(pins, PinPattern::AOnly, EncoderState::ArmedB)
            }
            EncoderState::DebounceTowardB => {
                self.settle(pins, PinPattern::BOnly, EncoderState::ArmedA)
            }
            _ => {}
        }

        match (self.state, pins) {
            (EncoderState::ArmedA, PinPattern::Both) => {
                self.enter(EncoderState::RotatedCCW);
                Some(Direction::CounterClockwise)
            }
            (EncoderState::ArmedB, PinPattern::Both) => {
                self.enter(EncoderState::RotatedCW);
                Some(Direction::Clockwise)
            }
            _ => None,
        }
    }

    /// Force the machine back to rest.
    pub fn reset(&mut self) {
        self.enter(EncoderState::Idle);
    }

    /// Count one debounce tick, or resolve the debounce once the threshold
    /// is reached. A broken pattern aborts immediately.
    fn settle(&mut self, pins: PinPattern, expected: PinPattern, armed: EncoderState) {
        if pins != expected {
            trace!("debounce toward {:?} broken by {:?}", expected, pins);
            self.enter(EncoderState::Idle);
        } else if self.debounce_count < self.debounce_threshold {
            self.debounce_count += 1;
        } else {
            self.enter(armed);
        }
    }

    /// Every transition clears the debounce counter.
    #[inline]
    fn enter(&mut self, state: EncoderState) {
        self.state = state;
        self.debounce_count = 0;
    }
}

impl Default for DecoderContext {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_THRESHOLD)
    }
}
