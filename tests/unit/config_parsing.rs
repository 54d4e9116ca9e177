//! Unit tests for TOML configuration parsing.

use quadrature_debounce::config::{load_config, SystemConfig};

/// Test parsing a fully specified encoder configuration from TOML.
#[test]
fn test_parse_encoder_config() {
    let toml_str = r#"
[encoders.knob]
name = "main_knob"
debounce_threshold = 2
active_low = false
initial_position = 32768
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let encoder = config.encoder("knob").expect("Encoder not found");

    assert_eq!(encoder.name.as_str(), "main_knob");
    assert_eq!(encoder.debounce_threshold, 2);
    assert!(!encoder.active_low);
    assert_eq!(encoder.initial_position, 32768);
}

/// Test that omitted fields fall back to their defaults.
#[test]
fn test_parse_defaults() {
    let toml_str = r#"
[encoders.knob]
name = "main_knob"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let encoder = config.encoder("knob").expect("Encoder not found");

    assert_eq!(encoder.debounce_threshold, 1);
    assert!(encoder.active_low);
    assert_eq!(encoder.initial_position, 0);
    assert_eq!(config.clock.tick_hz.value(), 200);
    assert!(config.serial.is_none());
}

/// Test parsing clock and serial sections.
#[test]
fn test_parse_clock_and_serial() {
    let toml_str = r#"
[clock]
tick_hz = 1000

[serial]
baud = 9600
cpu_hz = 8000000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.clock.period_ns(), 1_000_000);

    let serial = config.serial.expect("Serial not found");
    assert_eq!(serial.baud.value(), 9600);
    assert_eq!(serial.cpu_hz.value(), 8_000_000);
    assert_eq!(serial.ubrr(), Some(51));
}

/// Test that an out-of-range position is rejected by the parser.
#[test]
fn test_position_out_of_range() {
    let toml_str = r#"
[encoders.knob]
name = "main_knob"
initial_position = 70000
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test listing encoder names.
#[test]
fn test_encoder_names() {
    let toml_str = r#"
[encoders.left]
name = "Left"

[encoders.right]
name = "Right"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let names: Vec<&str> = config.encoder_names().collect();
    assert_eq!(names, ["left", "right"]);
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("quadrature_debounce_load_test.toml");
    std::fs::write(
        &path,
        "[encoders.knob]\nname = \"Knob\"\ndebounce_threshold = 4\n",
    )
    .expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    assert_eq!(config.encoder("knob").unwrap().debounce_threshold, 4);

    let _ = std::fs::remove_file(&path);
}
