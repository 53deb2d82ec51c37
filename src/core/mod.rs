//! Client layer: the connection wrapper and its typed command surface.
//!
//! ## Modules
//!
//! - [`connection`] - The codec over a caller-supplied stream
//! - [`command`] - Command request builders
//! - [`convert`] - Reply projections
//! - [`commands`] - Typed per-command helpers

#![warn(missing_docs)]

pub use crate::proto::error::{Error, Result};

/// Command construction helpers.
pub mod command;
/// Typed command helpers bound to their reply projections.
pub mod commands;
/// Stream wrapper issuing requests and decoding replies.
pub mod connection;
/// Reply-to-result projections.
pub mod convert;

pub use command::Cmd;
pub use connection::Connection;
