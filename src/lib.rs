//! # Redwire
//!
//! Client-side RESP codec for Redis-compatible servers, operating over a
//! caller-supplied bidirectional byte stream. The crate covers request
//! encoding, reply decoding, and the projection of untyped replies onto
//! the shapes individual commands promise; connection establishment,
//! pooling, TLS and timeouts stay entirely with the caller.
//!
//! ## Example
//!
//! ```no_run
//! use redwire::{command, Connection};
//! use tokio::net::TcpStream;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let stream = TcpStream::connect("127.0.0.1:6379").await?;
//!     let mut conn = Connection::new(stream);
//!     conn.set("key", "value").await?;
//!     let n = conn.incr("counter").await?;
//!     println!("counter = {n}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod proto;

pub use crate::core::command;
pub use crate::core::{Cmd, Connection, Error, Result};
pub use crate::proto::frame::Reply;
