//! Change-only position reporting.
//!
//! The reporter runs in the main flow, polls the shared [`Position`] after
//! every wake-up and writes one decimal line per change.

use core::fmt::{self, Write};

use heapless::String;

use crate::encoder::Position;

/// Longest report line: five digits plus newline.
pub const LINE_CAPACITY: usize = 8;

/// Polls a position and reports changes.
#[derive(Debug)]
pub struct PositionReporter<'a> {
    position: &'a Position,
    last: u16,
}

impl<'a> PositionReporter<'a> {
    /// Create a reporter. The last observed value starts at 0, so a
    /// position that never leaves 0 is never reported.
    pub fn new(position: &'a Position) -> Self {
        Self { position, last: 0 }
    }

    /// Return the position if it changed since the previous call.
    pub fn poll(&mut self) -> Option<u16> {
        let current = self.position.get();
        if current == self.last {
            return None;
        }
        self.last = current;
        Some(current)
    }

    /// Last value returned by [`poll`](Self::poll).
    #[inline]
    pub fn last_reported(&self) -> u16 {
        self.last
    }

    /// Write a line to `out` if the position changed.
    ///
    /// Returns whether a line was written.
    pub fn report<W: Write>(&mut self, out: &mut W) -> Result<bool, fmt::Error> {
        match self.poll() {
            Some(position) => {
                out.write_str(&format_line(position))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Format a position as a decimal line ending in `\n`.
pub fn format_line(position: u16) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    // "65535\n" is the longest possible line and fits.
    let _ = writeln!(line, "{}", position);
    line
}
