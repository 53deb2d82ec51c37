use std::io;

use thiserror::Error;

/// Result type alias for redwire operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking RESP to a server.
///
/// The variants are disjoint by recovery strategy:
///
/// - [`Connection`](Error::Connection): the stream could not supply bytes
///   that were structurally required. Discard the stream.
/// - [`Server`](Error::Server): the server explicitly replied with an error
///   value; transport and framing succeeded. Handle at the application
///   level, branching on `kind` if needed.
/// - [`Conversion`](Error::Conversion): the reply arrived intact but did not
///   match the shape the caller asked for. Usually a defect to report, not a
///   transient condition.
/// - [`Protocol`](Error::Protocol): the byte alignment of the stream is no
///   longer trustworthy. The connection refuses further calls once this is
///   returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The stream failed while more bytes were structurally required.
    #[error("connection error: {source}")]
    Connection {
        /// The underlying IO error.
        #[from]
        source: io::Error,
    },

    /// The server replied with an error value.
    #[error("server error [{kind}]: {message}")]
    Server {
        /// Error class token, e.g. `ERR` or `WRONGTYPE`.
        kind: String,
        /// Free-form description from the server.
        message: String,
    },

    /// A well-framed reply did not match the requested result shape.
    #[error("conversion error: {message}")]
    Conversion {
        /// Description of the mismatch.
        message: String,
    },

    /// Framing desynchronization or a protocol-conformance violation.
    #[error("protocol error: {message}")]
    Protocol {
        /// Description of the violation.
        message: String,
    },

    /// Caller contract violation, e.g. an empty command.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },
}

impl Error {
    pub(crate) fn conversion(message: impl Into<String>) -> Self {
        Error::Conversion {
            message: message.into(),
        }
    }

    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Error::Protocol {
            message: message.into(),
        }
    }

    /// Returns true if the stream this error came from should be discarded.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Connection { .. } | Error::Protocol { .. })
    }
}
