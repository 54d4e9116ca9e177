//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{ClockConfig, EncoderConfig, SerialConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Tick rate is non-zero
/// - Every encoder has a non-empty name
/// - The serial divider is reachable and within ±1% of the requested rate
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_clock(&config.clock)?;

    for (key, encoder) in config.encoders.iter() {
        validate_encoder(key.as_str(), encoder, &config.clock)?;
    }

    if let Some(ref serial) = config.serial {
        validate_serial(serial)?;
    }

    Ok(())
}

fn validate_clock(clock: &ClockConfig) -> Result<()> {
    if clock.tick_hz.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidTickRate(0)));
    }
    Ok(())
}

fn validate_encoder(key: &str, encoder: &EncoderConfig, clock: &ClockConfig) -> Result<()> {
    if encoder.name.is_empty() {
        return Err(Error::Config(ConfigError::EmptyEncoderName(
            heapless::String::try_from(key).unwrap_or_default(),
        )));
    }

    debug!(
        "encoder {}: threshold {} ticks, arms after {} ns",
        key,
        encoder.debounce_threshold,
        clock.debounce_window_ns(encoder.debounce_threshold)
    );

    Ok(())
}

fn validate_serial(serial: &SerialConfig) -> Result<()> {
    let (actual, error_permille) = match (serial.actual_baud(), serial.error_permille()) {
        (Some(actual), Some(error)) => (actual, error),
        _ => {
            return Err(Error::Config(ConfigError::InvalidBaudRate {
                baud: serial.baud.value(),
                cpu_hz: serial.cpu_hz.value(),
            }))
        }
    };

    if !serial.is_within_tolerance() {
        warn!(
            "baud {} unreachable: divider yields {} ({} per mille)",
            serial.baud.value(),
            actual,
            error_permille
        );
        return Err(Error::Config(ConfigError::BaudRateOutOfTolerance {
            requested: serial.baud.value(),
            actual,
            error_permille,
        }));
    }

    Ok(())
}
