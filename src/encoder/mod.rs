//! Encoder module for quadrature-debounce.
//!
//! Provides the debounced quadrature state machine, the shared position
//! counter and contact sampling.

mod builder;
mod context;
mod decoder;
mod pins;
mod position;
pub mod state;

pub use builder::QuadratureDecoderBuilder;
pub use context::{DecoderContext, DEFAULT_DEBOUNCE_THRESHOLD};
pub use decoder::QuadratureDecoder;
pub use pins::PinSampler;
pub use position::Position;
pub use state::{Direction, EncoderState, PinPattern};
