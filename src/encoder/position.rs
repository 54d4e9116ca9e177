//! Shared position counter.
//!
//! The tick handler writes the position while the main flow reads it, and a
//! `u16` is wider than some targets can load or store in one instruction.
//! Every access therefore runs inside a critical section.

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;

use super::state::Direction;

/// Saturating encoder position in `0..=u16::MAX`.
///
/// `Position::new` is `const`, so a position can live in a `static` and be
/// shared between an interrupt handler and the main loop.
pub struct Position {
    value: Mutex<Cell<u16>>,
}

impl Position {
    /// Largest representable position.
    pub const MAX: u16 = u16::MAX;

    /// Create a position counter starting at `initial`.
    pub const fn new(initial: u16) -> Self {
        Self {
            value: Mutex::new(Cell::new(initial)),
        }
    }

    /// Read a consistent snapshot of the position.
    #[inline]
    pub fn get(&self) -> u16 {
        critical_section::with(|cs| self.value.borrow(cs).get())
    }

    /// Overwrite the position.
    #[inline]
    pub fn set(&self, value: u16) {
        critical_section::with(|cs| self.value.borrow(cs).set(value));
    }

    /// Add one, stopping at [`Position::MAX`]. Returns the new value.
    #[inline]
    pub fn increment(&self) -> u16 {
        self.update(|p| p.saturating_add(1))
    }

    /// Subtract one, stopping at 0. Returns the new value.
    #[inline]
    pub fn decrement(&self) -> u16 {
        self.update(|p| p.saturating_sub(1))
    }

    /// Apply one step in `direction`. Returns the new value.
    #[inline]
    pub fn step(&self, direction: Direction) -> u16 {
        match direction {
            Direction::Clockwise => self.increment(),
            Direction::CounterClockwise => self.decrement(),
        }
    }

    fn update(&self, f: impl FnOnce(u16) -> u16) -> u16 {
        critical_section::with(|cs| {
            let cell = self.value.borrow(cs);
            let next = f(cell.get());
            cell.set(next);
            next
        })
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.get()).finish()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturates_at_bounds() {
        let pos = Position::new(Position::MAX - 1);
        assert_eq!(pos.increment(), Position::MAX);
        assert_eq!(pos.increment(), Position::MAX);

        pos.set(1);
        assert_eq!(pos.decrement(), 0);
        assert_eq!(pos.decrement(), 0);
    }

    #[test]
    fn test_step_direction() {
        let pos = Position::new(10);
        assert_eq!(pos.step(Direction::Clockwise), 11);
        assert_eq!(pos.step(Direction::CounterClockwise), 10);
        assert_eq!(pos.get(), 10);
    }

    #[test]
    fn test_static_position() {
        static SHARED: Position = Position::new(7);
        SHARED.increment();
        assert_eq!(SHARED.get(), 8);
    }
}
