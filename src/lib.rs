//! # quadrature-debounce
//!
//! Debounced quadrature decoding for mechanical rotary encoders, with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Explicit state machine**: seven named states, every input combination
//!   has a defined transition, no error paths
//! - **Software debounce**: the first contact to leave rest must hold for a
//!   configurable number of ticks
//! - **Saturating position**: a `u16` counter that clamps instead of wrapping
//! - **Interrupt-safe sharing**: the position sits behind a critical section
//!   and can be read from the main flow while the tick handler updates it
//! - **Configuration-driven**: encoders, tick rate and serial link from TOML
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quadrature_debounce::{PeriodicClock, PinSampler, Position, PositionReporter, QuadratureDecoder};
//!
//! static POSITION: Position = Position::new(0);
//!
//! let config = quadrature_debounce::load_config("encoders.toml")?;
//! let encoder = config.encoder("volume").unwrap();
//!
//! let decoder = QuadratureDecoder::builder()
//!     .from_encoder_config(encoder)
//!     .position(&POSITION)
//!     .build()?;
//! let sampler = PinSampler::from_encoder_config(pin_a, pin_b, encoder);
//! let mut clock = PeriodicClock::from_config(sampler, decoder, &config.clock);
//!
//! // In the timer interrupt:
//! clock.tick()?;
//!
//! // In the main loop:
//! let mut reporter = PositionReporter::new(&POSITION);
//! reporter.report(&mut serial)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables `log` facade logging for hosted targets
//!
//! ## Critical section
//!
//! The library never selects a critical-section implementation. The final
//! binary must provide one, either through its HAL or runtime crate or by
//! enabling `critical-section/std` on hosted targets.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

// Core modules
pub mod clock;
pub mod config;
pub mod encoder;
pub mod error;
pub mod report;

// Re-exports for ergonomic API
pub use clock::PeriodicClock;
pub use config::{validate_config, ClockConfig, EncoderConfig, SerialConfig, SystemConfig};
pub use encoder::{
    DecoderContext, Direction, EncoderState, PinSampler, Position, QuadratureDecoder,
    QuadratureDecoderBuilder,
};
pub use error::{Error, Result};
pub use report::{format_line, PositionReporter};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{BaudRate, Hertz};
