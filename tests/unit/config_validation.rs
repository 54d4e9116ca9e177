//! Unit tests for configuration validation.

use quadrature_debounce::config::{validate_config, SystemConfig};
use quadrature_debounce::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[clock]
tick_hz = 200

[serial]
baud = 250000

[encoders.knob]
name = "main_knob"
debounce_threshold = 1
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero tick rate.
#[test]
fn test_zero_tick_rate() {
    let toml_str = r#"
[clock]
tick_hz = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTickRate(0)))
    ));
}

/// Test validation fails for an encoder without a display name.
#[test]
fn test_empty_encoder_name() {
    let toml_str = r#"
[encoders.knob]
name = ""
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::EmptyEncoderName(_)))
    ));
}

/// Test validation fails when the UART divider misses the requested rate.
#[test]
fn test_baud_rate_out_of_tolerance() {
    let toml_str = r#"
[serial]
baud = 115200
cpu_hz = 16000000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::BaudRateOutOfTolerance {
            requested: 115200,
            ..
        }))
    ));
}

/// Test validation fails when the baud rate is faster than the clock allows.
#[test]
fn test_unreachable_baud_rate() {
    let toml_str = r#"
[serial]
baud = 2000000
cpu_hz = 8000000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidBaudRate { .. }))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
