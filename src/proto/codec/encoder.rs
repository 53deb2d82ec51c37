use bytes::{BufMut, Bytes, BytesMut};

use crate::proto::error::{Error, Result};

/// A RESP request encoder.
///
/// Serializes a command's ordered argument list into the wire format: an
/// array header `*<n>\r\n` followed by one bulk string `$<len>\r\n<bytes>\r\n`
/// per argument. Lengths are byte lengths, so arbitrary binary payloads are
/// supported without any escaping.
///
/// The encoder accumulates into an internal buffer and can be reused across
/// requests via [`take`](Encoder::take).
///
/// # Example
///
/// ```
/// use redwire::proto::codec::Encoder;
/// use bytes::Bytes;
///
/// let mut encoder = Encoder::new();
/// encoder
///     .encode_command(&[Bytes::from_static(b"GET"), Bytes::from_static(b"key")])
///     .unwrap();
/// assert_eq!(&encoder.take()[..], b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    /// Creates a new encoder with an empty buffer.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    /// Encodes one command request into the internal buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty argument list. A
    /// request must carry at least the command name; this is a caller
    /// contract violation, not a runtime condition.
    pub fn encode_command(&mut self, args: &[Bytes]) -> Result<()> {
        if args.is_empty() {
            return Err(Error::InvalidArgument {
                message: "cannot encode an empty command".to_string(),
            });
        }
        self.buf.put_u8(b'*');
        self.buf.extend_from_slice(args.len().to_string().as_bytes());
        self.buf.extend_from_slice(b"\r\n");
        for arg in args {
            self.buf.put_u8(b'$');
            self.buf.extend_from_slice(arg.len().to_string().as_bytes());
            self.buf.extend_from_slice(b"\r\n");
            self.buf.extend_from_slice(arg);
            self.buf.extend_from_slice(b"\r\n");
        }
        Ok(())
    }

    /// Takes the encoded data from the buffer, leaving it empty so the
    /// encoder can be reused.
    pub fn take(&mut self) -> BytesMut {
        self.buf.split()
    }
}

/// Encodes a single command request and returns the wire bytes.
///
/// Convenience wrapper over [`Encoder`] for one-shot encoding.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an empty argument list.
pub fn encode_request(args: &[Bytes]) -> Result<Bytes> {
    let mut encoder = Encoder::new();
    encoder.encode_command(args)?;
    Ok(encoder.take().freeze())
}
