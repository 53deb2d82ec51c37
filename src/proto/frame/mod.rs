//! RESP reply values.
//!
//! This module defines the tagged reply value decoded off the wire,
//! covering statuses, server errors, integers, bulk strings, arrays and
//! the nil sentinel.

/// Reply type definitions.
pub mod types;

pub use types::Reply;
