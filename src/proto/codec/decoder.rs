use bytes::{Buf, Bytes, BytesMut};

use crate::proto::error::{Error, Result};
use crate::proto::frame::Reply;

const DEFAULT_MAX_REPLY_SIZE: usize = 512 * 1024 * 1024; // 512 MB default

/// A RESP reply decoder.
///
/// The decoder handles streaming input and decodes replies incrementally.
/// Call [`append`](Decoder::append) as data arrives, then
/// [`decode`](Decoder::decode) to parse; `Ok(None)` means more data is
/// needed.
///
/// A partial reply consumes nothing: the buffer is only advanced once a
/// complete reply has been parsed, so bytes belonging to a subsequent reply
/// are never lost. The buffer persists across calls, which makes it safe to
/// keep one decoder per stream even when multiple requests have been
/// written ahead.
///
/// # Example
///
/// ```
/// use redwire::proto::codec::Decoder;
/// use redwire::proto::frame::Reply;
///
/// let mut decoder = Decoder::new();
/// decoder.append(b"+OK\r\n");
/// let reply = decoder.decode().unwrap().unwrap();
/// assert_eq!(reply, Reply::Status("OK".to_string()));
/// ```
#[derive(Debug)]
pub struct Decoder {
    buf: BytesMut,
    max_reply_size: usize,
}

impl Decoder {
    /// Creates a new decoder with an empty buffer.
    pub fn new() -> Self {
        Self::with_max_reply_size(DEFAULT_MAX_REPLY_SIZE)
    }

    /// Creates a new decoder with a custom maximum reply size.
    ///
    /// Declared lengths on the wire are untrusted; any bulk string, array
    /// or buffered reply larger than this bound fails with
    /// [`Error::Protocol`] instead of allocating.
    pub fn with_max_reply_size(max_reply_size: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            max_reply_size,
        }
    }

    /// Appends raw bytes to the internal buffer.
    pub fn append(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Returns true if undecoded bytes are buffered.
    ///
    /// When this is true at end of stream, a reply was cut short: the
    /// caller should classify that as a transport failure, never return a
    /// silently truncated value.
    pub fn has_partial(&self) -> bool {
        !self.buf.is_empty()
    }

    /// Attempts to decode one complete reply from the buffer.
    ///
    /// Returns `Ok(Some(reply))` and consumes exactly the reply's bytes,
    /// `Ok(None)` if more data is needed, or an error if the buffered data
    /// is malformed.
    ///
    /// # Errors
    ///
    /// [`Error::Protocol`] for an unknown tag byte, a negative length other
    /// than the `-1` nil sentinel, or a bulk payload not terminated by CR
    /// LF. After a protocol error the stream's byte alignment is no longer
    /// trustworthy and the whole stream should be discarded.
    /// [`Error::Conversion`] for malformed content inside a well-framed
    /// reply, e.g. non-numeric integer digits.
    pub fn decode(&mut self) -> Result<Option<Reply>> {
        if self.buf.len() > self.max_reply_size {
            return Err(Error::protocol("buffered data exceeds maximum reply size"));
        }
        let mut pos = 0;
        match parse_reply(&self.buf, &mut pos, self.max_reply_size)? {
            Some(reply) => {
                self.buf.advance(pos);
                Ok(Some(reply))
            }
            None => Ok(None),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_reply(buf: &[u8], pos: &mut usize, max: usize) -> Result<Option<Reply>> {
    let tag = match buf.get(*pos) {
        Some(tag) => *tag,
        None => return Ok(None),
    };
    *pos += 1;

    match tag {
        b'+' => match take_line(buf, pos) {
            Some(line) => Ok(Some(Reply::Status(line_text(line)?.to_string()))),
            None => Ok(None),
        },
        b'-' => match take_line(buf, pos) {
            Some(line) => Ok(Some(Reply::parse_error_line(line_text(line)?))),
            None => Ok(None),
        },
        b':' => match take_line(buf, pos) {
            Some(line) => Ok(Some(Reply::Integer(parse_int(line)?))),
            None => Ok(None),
        },
        b'$' => parse_bulk(buf, pos, max),
        b'*' => parse_array(buf, pos, max),
        other => Err(Error::protocol(format!(
            "unknown reply tag: {:?}",
            other as char
        ))),
    }
}

fn parse_bulk(buf: &[u8], pos: &mut usize, max: usize) -> Result<Option<Reply>> {
    let len = match take_line(buf, pos) {
        Some(line) => parse_int(line)?,
        None => return Ok(None),
    };
    let len = match nil_or_length(len)? {
        Some(len) => len,
        None => return Ok(Some(Reply::Nil)),
    };
    if len > max {
        return Err(Error::protocol(
            "declared bulk string length exceeds maximum reply size",
        ));
    }

    if buf.len() < *pos + len + 2 {
        return Ok(None);
    }
    let payload = Bytes::copy_from_slice(&buf[*pos..*pos + len]);
    let terminator = &buf[*pos + len..*pos + len + 2];
    if terminator != b"\r\n" {
        return Err(Error::protocol(
            "bulk string payload not terminated by CRLF",
        ));
    }
    *pos += len + 2;
    Ok(Some(Reply::Bulk(payload)))
}

fn parse_array(buf: &[u8], pos: &mut usize, max: usize) -> Result<Option<Reply>> {
    let len = match take_line(buf, pos) {
        Some(line) => parse_int(line)?,
        None => return Ok(None),
    };
    let len = match nil_or_length(len)? {
        Some(len) => len,
        None => return Ok(Some(Reply::Nil)),
    };
    if len > max / 16 {
        return Err(Error::protocol(
            "declared array length exceeds maximum reply size",
        ));
    }

    // The declared count is untrusted; reserve no more than the buffered
    // bytes could possibly hold (the smallest element is 3 bytes).
    let mut items = Vec::with_capacity(len.min(buf.len().saturating_sub(*pos) / 3));
    for _ in 0..len {
        match parse_reply(buf, pos, max)? {
            Some(reply) => items.push(reply),
            None => return Ok(None),
        }
    }
    Ok(Some(Reply::Array(items)))
}

/// Takes one CRLF-terminated line starting at `pos`, without the
/// terminator. Returns `None` if the terminator has not arrived yet.
fn take_line<'a>(buf: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    let start = *pos;
    let mut i = start;
    while i + 1 < buf.len() {
        if buf[i] == b'\r' && buf[i + 1] == b'\n' {
            *pos = i + 2;
            return Some(&buf[start..i]);
        }
        i += 1;
    }
    None
}

fn line_text(line: &[u8]) -> Result<&str> {
    std::str::from_utf8(line)
        .map_err(|_| Error::conversion("reply line is not valid UTF-8"))
}

fn parse_int(line: &[u8]) -> Result<i64> {
    line_text(line)?.parse::<i64>().map_err(|_| {
        Error::conversion(format!(
            "expected integer digits, got {:?}",
            String::from_utf8_lossy(line)
        ))
    })
}

/// A declared length is either a non-negative size or exactly the `-1` nil
/// sentinel; any other negative value means the framing cannot be trusted.
fn nil_or_length(len: i64) -> Result<Option<usize>> {
    match len {
        -1 => Ok(None),
        n if n >= 0 => Ok(Some(n as usize)),
        n => Err(Error::protocol(format!("invalid declared length: {}", n))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_one(input: &[u8]) -> Result<Option<Reply>> {
        let mut decoder = Decoder::new();
        decoder.append(input);
        decoder.decode()
    }

    #[test]
    fn test_decode_status() {
        let reply = decode_one(b"+OK\r\n").unwrap().unwrap();
        assert_eq!(reply, Reply::Status("OK".to_string()));
    }

    #[test]
    fn test_decode_empty_status() {
        let reply = decode_one(b"+\r\n").unwrap().unwrap();
        assert_eq!(reply, Reply::Status(String::new()));
    }

    #[test]
    fn test_decode_error_with_message() {
        let reply = decode_one(b"-ERR unknown command\r\n").unwrap().unwrap();
        assert_eq!(
            reply,
            Reply::Error {
                kind: "ERR".to_string(),
                message: "unknown command".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_error_without_message() {
        let reply = decode_one(b"-ERR\r\n").unwrap().unwrap();
        assert_eq!(
            reply,
            Reply::Error {
                kind: "ERR".to_string(),
                message: "N/A".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_integer() {
        assert_eq!(
            decode_one(b":123\r\n").unwrap().unwrap(),
            Reply::Integer(123)
        );
        assert_eq!(decode_one(b":-5\r\n").unwrap().unwrap(), Reply::Integer(-5));
    }

    #[test]
    fn test_decode_integer_non_numeric_is_conversion_failure() {
        let err = decode_one(b":abc\r\n").unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
    }

    #[test]
    fn test_decode_bulk_string() {
        let reply = decode_one(b"$5\r\nhello\r\n").unwrap().unwrap();
        assert_eq!(reply, Reply::Bulk(Bytes::from_static(b"hello")));
    }

    #[test]
    fn test_decode_bulk_string_binary_payload() {
        let reply = decode_one(b"$7\r\na\r\nb\x00c\r\n").unwrap().unwrap();
        assert_eq!(reply, Reply::Bulk(Bytes::from_static(b"a\r\nb\x00c")));
    }

    #[test]
    fn test_decode_bulk_nil() {
        assert_eq!(decode_one(b"$-1\r\n").unwrap().unwrap(), Reply::Nil);
    }

    #[test]
    fn test_decode_zero_length_bulk_is_empty_not_nil() {
        let reply = decode_one(b"$0\r\n\r\n").unwrap().unwrap();
        assert_eq!(reply, Reply::Bulk(Bytes::new()));
    }

    #[test]
    fn test_decode_bulk_bad_terminator_is_protocol_failure() {
        let err = decode_one(b"$2\r\nhiXX").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_bulk_bad_length_is_conversion_failure() {
        let err = decode_one(b"$a\r\n").unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
    }

    #[test]
    fn test_decode_negative_length_other_than_nil_is_protocol_failure() {
        let err = decode_one(b"$-2\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_array_nil() {
        assert_eq!(decode_one(b"*-1\r\n").unwrap().unwrap(), Reply::Nil);
    }

    #[test]
    fn test_decode_zero_length_array_is_empty_not_nil() {
        let reply = decode_one(b"*0\r\n").unwrap().unwrap();
        assert_eq!(reply, Reply::Array(Vec::new()));
    }

    #[test]
    fn test_decode_array_of_bulk_strings() {
        let reply = decode_one(b"*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(
            reply,
            Reply::Array(vec![
                Reply::Bulk(Bytes::from_static(b"foo")),
                Reply::Bulk(Bytes::from_static(b"bar")),
            ])
        );
    }

    #[test]
    fn test_decode_nested_arrays() {
        let reply = decode_one(b"*2\r\n*2\r\n$1\r\na\r\n:1\r\n*1\r\n*1\r\n$1\r\nb\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(
            reply,
            Reply::Array(vec![
                Reply::Array(vec![
                    Reply::Bulk(Bytes::from_static(b"a")),
                    Reply::Integer(1),
                ]),
                Reply::Array(vec![Reply::Array(vec![Reply::Bulk(
                    Bytes::from_static(b"b")
                )])]),
            ])
        );
    }

    #[test]
    fn test_decode_array_with_nil_element() {
        let reply = decode_one(b"*2\r\n$-1\r\n:1\r\n").unwrap().unwrap();
        assert_eq!(reply, Reply::Array(vec![Reply::Nil, Reply::Integer(1)]));
    }

    #[test]
    fn test_decode_array_inner_failure_propagates() {
        let err = decode_one(b"*2\r\n:1\r\n:abc\r\n").unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
    }

    #[test]
    fn test_decode_unknown_tag_is_protocol_failure() {
        let err = decode_one(b"?5\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_partial_consumes_nothing() {
        let mut decoder = Decoder::new();
        decoder.append(b"*2\r\n:1\r");
        assert!(decoder.decode().unwrap().is_none());
        // The array header must not have been eaten by the failed attempt.
        decoder.append(b"\n:2\r\n");
        let reply = decoder.decode().unwrap().unwrap();
        assert_eq!(
            reply,
            Reply::Array(vec![Reply::Integer(1), Reply::Integer(2)])
        );
    }

    #[test]
    fn test_decode_partial_bulk_reports_incomplete() {
        let mut decoder = Decoder::new();
        decoder.append(b"$5\r\nhe");
        assert!(decoder.decode().unwrap().is_none());
        assert!(decoder.has_partial());
    }

    #[test]
    fn test_decode_leaves_next_reply_untouched() {
        let mut decoder = Decoder::new();
        decoder.append(b"+OK\r\n:7\r\n");
        assert_eq!(
            decoder.decode().unwrap().unwrap(),
            Reply::Status("OK".to_string())
        );
        assert_eq!(decoder.decode().unwrap().unwrap(), Reply::Integer(7));
        assert!(!decoder.has_partial());
    }

    #[test]
    fn test_decode_empty_buffer() {
        let mut decoder = Decoder::new();
        assert!(decoder.decode().unwrap().is_none());
    }

    #[test]
    fn test_decode_huge_declared_array_length_is_protocol_failure() {
        // A single corrupt length line must fail cleanly, not allocate.
        let err = decode_one(b"*9223372036854775807\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_huge_declared_bulk_length_is_protocol_failure() {
        let err = decode_one(b"$9223372036854775807\r\n").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_bulk_length_over_custom_max() {
        let mut decoder = Decoder::with_max_reply_size(10);
        decoder.append(b"$100\r\n");
        let err = decoder.decode().unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_array_length_over_custom_max() {
        let mut decoder = Decoder::with_max_reply_size(1024);
        decoder.append(b"*100\r\n");
        let err = decoder.decode().unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_buffered_data_over_custom_max() {
        let mut decoder = Decoder::with_max_reply_size(10);
        decoder.append(b"+aaaaaaaaaaaaaaaaaaaa\r\n");
        let err = decoder.decode().unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_within_custom_max_still_succeeds() {
        let mut decoder = Decoder::with_max_reply_size(1024);
        decoder.append(b"*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n");
        assert!(decoder.decode().unwrap().is_some());
    }
}
