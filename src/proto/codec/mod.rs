//! RESP protocol encoder and decoder.
//!
//! # Modules
//!
//! - [`encoder`] - Request encoding to wire bytes
//! - [`decoder`] - Streaming reply decoder from bytes

pub mod decoder;
pub mod encoder;

pub use decoder::Decoder;
pub use encoder::{encode_request, Encoder};
