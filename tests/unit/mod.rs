//! Unit test harness for quadrature-debounce.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod decoder_properties;
mod manifest;
