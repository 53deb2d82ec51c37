use std::fmt;
use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use crate::core::command::Cmd;
use crate::core::convert;
use crate::proto::codec::{Decoder, Encoder};
use crate::proto::error::{Error, Result};
use crate::proto::frame::Reply;

/// A RESP client codec over a caller-supplied stream.
///
/// Wraps an already-connected bidirectional stream (TCP, TLS, a duplex pipe
/// in tests) and handles request encoding and reply decoding. The stream's
/// lifetime is entirely the caller's: the connection never dials, closes,
/// retries or times out. Deadlines, if needed, must be imposed on the
/// underlying stream.
///
/// Each call performs at most one write followed by exactly one decode
/// cycle; control returns only once a full reply (or failure) is available.
/// The connection is not safe for concurrent calls: callers must serialize
/// access to it themselves. The internal decode buffer persists across
/// calls, so replies to requests written ahead are not lost.
///
/// After a framing failure the connection is poisoned and refuses all
/// further calls, since the byte alignment of subsequent reads is no longer
/// knowable.
///
/// # Example
///
/// ```ignore
/// use redwire::core::{command, Connection};
/// use tokio::net::TcpStream;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let stream = TcpStream::connect("127.0.0.1:6379").await?;
///     let mut conn = Connection::new(stream);
///     let pong = conn.call(command::ping()).await?;
///     println!("{:?}", pong);
///     Ok(())
/// }
/// ```
pub struct Connection<S> {
    stream: S,
    decoder: Decoder,
    encoder: Encoder,
    poisoned: bool,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Creates a new connection over the given stream.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            decoder: Decoder::new(),
            encoder: Encoder::new(),
            poisoned: false,
        }
    }

    /// Returns true if an earlier framing failure made this stream
    /// unusable.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Consumes the connection, returning the underlying stream.
    ///
    /// Bytes already buffered by the decoder are discarded, so this is only
    /// safe under strict one-write-then-one-read usage.
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Sends a command and reads exactly one reply.
    ///
    /// The untyped send-and-receive primitive: one encode and write, then
    /// one blocking decode cycle. A server error reply is returned as
    /// [`Error::Server`]; the nil sentinel is an ordinary
    /// [`Reply::Nil`] value, not an error.
    pub async fn call(&mut self, cmd: Cmd) -> Result<Reply> {
        self.write_command(cmd).await?;
        self.recv().await
    }

    /// Reads one reply without sending anything.
    ///
    /// Supports consuming replies that arrive outside the strict
    /// one-request-one-reply pattern, e.g. after several
    /// [`send`](Connection::send) calls. No subscription semantics are
    /// implied; push-message framing belongs to a higher layer.
    pub async fn recv(&mut self) -> Result<Reply> {
        self.check_usable()?;
        let reply = self.read_reply().await?;
        debug!(?reply, "received reply");
        match reply {
            Reply::Error { kind, message } => Err(Error::Server { kind, message }),
            reply => Ok(reply),
        }
    }

    /// Sends a command without reading a reply (fire-and-forget).
    ///
    /// Any reply the server produces stays buffered on the stream; consume
    /// it later with [`recv`](Connection::recv) or discard the stream.
    pub async fn send(&mut self, cmd: Cmd) -> Result<()> {
        self.write_command(cmd).await
    }

    /// Sends a command and projects the reply onto an integer.
    pub async fn call_integer(&mut self, cmd: Cmd) -> Result<i64> {
        convert::to_integer(self.call(cmd).await?)
    }

    /// Sends a command and projects the reply onto a boolean.
    pub async fn call_bool(&mut self, cmd: Cmd) -> Result<bool> {
        convert::to_bool(self.call(cmd).await?)
    }

    /// Sends a command and projects the reply onto a string.
    pub async fn call_string(&mut self, cmd: Cmd) -> Result<String> {
        convert::to_string(self.call(cmd).await?)
    }

    /// Sends a command and projects the reply onto a sequence of untyped
    /// replies.
    pub async fn call_array(&mut self, cmd: Cmd) -> Result<Vec<Reply>> {
        convert::to_array(self.call(cmd).await?)
    }

    /// Sends a command and projects the reply onto a sequence of integers.
    pub async fn call_integers(&mut self, cmd: Cmd) -> Result<Vec<i64>> {
        convert::to_integers(self.call(cmd).await?)
    }

    /// Sends a command and projects the reply onto a sequence of booleans.
    pub async fn call_bools(&mut self, cmd: Cmd) -> Result<Vec<bool>> {
        convert::to_bools(self.call(cmd).await?)
    }

    /// Sends a command and projects the reply onto a sequence of strings.
    pub async fn call_strings(&mut self, cmd: Cmd) -> Result<Vec<String>> {
        convert::to_strings(self.call(cmd).await?)
    }

    fn check_usable(&self) -> Result<()> {
        if self.poisoned {
            return Err(Error::protocol(
                "stream poisoned by an earlier framing failure",
            ));
        }
        Ok(())
    }

    async fn write_command(&mut self, cmd: Cmd) -> Result<()> {
        self.check_usable()?;
        let args = cmd.into_args();
        debug!(
            command = %String::from_utf8_lossy(args.first().map(|a| a.as_ref()).unwrap_or_default()),
            argc = args.len(),
            "sending command"
        );
        self.encoder.encode_command(&args)?;
        let wire = self.encoder.take();
        self.stream.write_all(&wire).await?;
        self.stream.flush().await?;
        Ok(())
    }

    async fn read_reply(&mut self) -> Result<Reply> {
        loop {
            match self.decoder.decode() {
                Ok(Some(reply)) => return Ok(reply),
                Ok(None) => {
                    let mut buf = [0u8; 4096];
                    let n = self.stream.read(&mut buf).await?;
                    if n == 0 {
                        // More bytes were structurally required.
                        return Err(Error::Connection {
                            source: io::Error::new(
                                io::ErrorKind::UnexpectedEof,
                                "stream closed before a complete reply arrived",
                            ),
                        });
                    }
                    self.decoder.append(&buf[..n]);
                }
                Err(e) => {
                    if matches!(e, Error::Protocol { .. }) {
                        self.poisoned = true;
                    }
                    error!(error = %e, "failed to decode reply");
                    return Err(e);
                }
            }
        }
    }
}

impl<S> fmt::Debug for Connection<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("stream", &self.stream)
            .field("poisoned", &self.poisoned)
            .finish()
    }
}
