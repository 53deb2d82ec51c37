use bytes::Bytes;

/// Placeholder used for a server error line that carries no description
/// after its class token.
pub const NOT_AVAILABLE: &str = "N/A";

/// A decoded RESP reply value.
///
/// One of the six shapes a server can answer with:
/// - `Nil`: the protocol's explicit "no value" sentinel, produced by a
///   `-1` length on a bulk string or array. Distinct from an empty string
///   or empty array.
/// - `Status`: a short acknowledgement line such as `OK`.
/// - `Error`: an error the server chose to return; the round trip itself
///   succeeded.
/// - `Integer`: a signed 64-bit value.
/// - `Bulk`: a length-prefixed byte string; may contain any byte value,
///   including CR and LF.
/// - `Array`: zero or more nested replies, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The "no value" sentinel.
    Nil,
    /// A status line, e.g. `OK`.
    Status(String),
    /// A server-reported error, split into class token and description.
    Error {
        /// Error class token, e.g. `ERR`.
        kind: String,
        /// Free-form description; [`NOT_AVAILABLE`] when the server sent
        /// only a class token.
        message: String,
    },
    /// A signed 64-bit integer.
    Integer(i64),
    /// A binary-safe bulk string.
    Bulk(Bytes),
    /// An ordered sequence of nested replies.
    Array(Vec<Reply>),
}

impl Reply {
    /// Builds an error reply from a raw error line, splitting at the first
    /// space into class token and description.
    pub(crate) fn parse_error_line(line: &str) -> Reply {
        match line.split_once(' ') {
            Some((kind, message)) => Reply::Error {
                kind: kind.to_string(),
                message: message.to_string(),
            },
            None => Reply::Error {
                kind: line.to_string(),
                message: NOT_AVAILABLE.to_string(),
            },
        }
    }

    /// Returns true if this reply is the nil sentinel.
    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }

    /// Returns the integer value if this is an `Integer` reply.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Reply::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the payload if this is a `Bulk` reply.
    pub fn as_bulk(&self) -> Option<&Bytes> {
        match self {
            Reply::Bulk(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array` reply.
    pub fn as_array(&self) -> Option<&[Reply]> {
        match self {
            Reply::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Name of the reply shape, used in conversion error messages.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Reply::Nil => "nil",
            Reply::Status(_) => "status",
            Reply::Error { .. } => "error",
            Reply::Integer(_) => "integer",
            Reply::Bulk(_) => "bulk string",
            Reply::Array(_) => "array",
        }
    }
}
