//! Error types for quadrature-debounce.
//!
//! The decoding state machine itself never fails; these errors cover
//! configuration and pin sampling around it.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all quadrature-debounce operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin sampling error
    Pin(PinError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Encoder name not found in configuration
    EncoderNotFound(heapless::String<32>),
    /// Encoder has an empty display name
    EmptyEncoderName(heapless::String<32>),
    /// Tick rate must be non-zero
    InvalidTickRate(u32),
    /// Baud rate is zero or too high for the CPU clock
    InvalidBaudRate {
        /// Requested baud rate
        baud: u32,
        /// CPU clock in Hz
        cpu_hz: u32,
    },
    /// Achievable baud rate deviates more than 1% from the requested one
    BaudRateOutOfTolerance {
        /// Requested baud rate
        requested: u32,
        /// Baud rate the divider actually produces
        actual: u32,
        /// Ratio actual/requested in per mille (1000 = exact)
        error_permille: u32,
    },
    /// Required builder field was not supplied
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Which encoder contact a pin error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinId {
    /// Contact A
    A,
    /// Contact B
    B,
}

/// Pin sampling errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PinError {
    /// Reading the input level failed
    ReadFailed(PinId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Pin(e) => write!(f, "Pin error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::EncoderNotFound(name) => write!(f, "Encoder '{}' not found", name),
            ConfigError::EmptyEncoderName(key) => {
                write!(f, "Encoder '{}' has an empty name", key)
            }
            ConfigError::InvalidTickRate(hz) => {
                write!(f, "Invalid tick rate: {} Hz. Must be > 0", hz)
            }
            ConfigError::InvalidBaudRate { baud, cpu_hz } => {
                write!(f, "Invalid baud rate {} for a {} Hz CPU clock", baud, cpu_hz)
            }
            ConfigError::BaudRateOutOfTolerance {
                requested,
                actual,
                error_permille,
            } => write!(
                f,
                "Baud rate {} yields {} ({} per mille), outside 990-1010",
                requested, actual, error_permille
            ),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinId::A => write!(f, "A"),
            PinId::B => write!(f, "B"),
        }
    }
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::ReadFailed(pin) => write!(f, "Failed to read encoder pin {}", pin),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Error::Pin(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PinError {}
