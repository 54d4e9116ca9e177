//! Configuration module for quadrature-debounce.
//!
//! Provides types for loading and validating encoder, clock and serial
//! settings from TOML files (with `std` feature) or pre-built values.

mod clock;
mod encoder;
mod serial;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use clock::{ClockConfig, DEFAULT_TICK_RATE};
pub use encoder::EncoderConfig;
pub use serial::{SerialConfig, DEFAULT_CPU_CLOCK, MAX_BAUD_PERMILLE, MIN_BAUD_PERMILLE};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{BaudRate, Hertz};
