//! Decoder states and per-tick input patterns.

use core::fmt;

/// State of the quadrature decoder.
///
/// Exactly one state is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderState {
    /// Both contacts released, waiting for movement.
    #[default]
    Idle,
    /// Contact A engaged alone; waiting for it to settle.
    DebounceTowardA,
    /// Contact B engaged alone; waiting for it to settle.
    DebounceTowardB,
    /// B settled first; contact A joining completes a counter-clockwise step.
    ArmedA,
    /// A settled first; contact B joining completes a clockwise step.
    ArmedB,
    /// A clockwise step was counted; held until both contacts release.
    RotatedCW,
    /// A counter-clockwise step was counted; held until both contacts release.
    RotatedCCW,
}

impl EncoderState {
    /// All states, in declaration order.
    pub const ALL: [EncoderState; 7] = [
        EncoderState::Idle,
        EncoderState::DebounceTowardA,
        EncoderState::DebounceTowardB,
        EncoderState::ArmedA,
        EncoderState::ArmedB,
        EncoderState::RotatedCW,
        EncoderState::RotatedCCW,
    ];

    /// Get the state name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            EncoderState::Idle => "Idle",
            EncoderState::DebounceTowardA => "DebounceTowardA",
            EncoderState::DebounceTowardB => "DebounceTowardB",
            EncoderState::ArmedA => "ArmedA",
            EncoderState::ArmedB => "ArmedB",
            EncoderState::RotatedCW => "RotatedCW",
            EncoderState::RotatedCCW => "RotatedCCW",
        }
    }

    /// Waiting for a single contact to settle.
    #[inline]
    pub fn is_debouncing(self) -> bool {
        matches!(
            self,
            EncoderState::DebounceTowardA | EncoderState::DebounceTowardB
        )
    }

    /// Waiting for the completing edge.
    #[inline]
    pub fn is_armed(self) -> bool {
        matches!(self, EncoderState::ArmedA | EncoderState::ArmedB)
    }

    /// A step was counted and the contacts have not yet released.
    #[inline]
    pub fn is_rotated(self) -> bool {
        matches!(self, EncoderState::RotatedCW | EncoderState::RotatedCCW)
    }
}

impl fmt::Display for EncoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a completed encoder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (position counts up).
    Clockwise,
    /// Counter-clockwise (position counts down).
    CounterClockwise,
}

impl Direction {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Combined level of both contacts on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPattern {
    /// Neither contact engaged (detent rest position).
    Released,
    /// Only contact A engaged.
    AOnly,
    /// Only contact B engaged.
    BOnly,
    /// Both contacts engaged.
    Both,
}

impl PinPattern {
    /// Classify normalized contact levels.
    #[inline]
    pub fn from_levels(pin_a_active: bool, pin_b_active: bool) -> Self {
        match (pin_a_active, pin_b_active) {
            (false, false) => PinPattern::Released,
            (true, false) => PinPattern::AOnly,
            (false, true) => PinPattern::BOnly,
            (true, true) => PinPattern::Both,
        }
    }
}
