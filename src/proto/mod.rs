//! RESP (Redis Serialization Protocol) wire layer.
//!
//! Provides encoding of command requests, decoding of replies, and the
//! error taxonomy shared by everything above it.
//!
//! ## Modules
//!
//! - [`codec`] - Encoder and decoder for the wire format
//! - [`error`] - Error types
//! - [`frame`] - The tagged reply value

pub mod codec;
/// Error types.
pub mod error;
pub mod frame;
