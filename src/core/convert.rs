//! Reply projections.
//!
//! Each function projects one decoded [`Reply`] onto the result shape a
//! command is documented to return. Projections are total over the reply
//! enum: every variant either converts or fails with a typed error, and a
//! server error reply always surfaces as [`Error::Server`] regardless of
//! the requested shape.

use crate::proto::error::{Error, Result};
use crate::proto::frame::Reply;

fn server_error(kind: String, message: String) -> Error {
    Error::Server { kind, message }
}

/// Projects a reply onto a signed 64-bit integer.
///
/// Accepts an `Integer` reply directly, or a `Bulk`/`Status` reply whose
/// text parses as base-10. Several commands (score queries among them)
/// return numeric replies as bulk strings; the dual path is a protocol
/// quirk, not a bug.
#[inline]
pub fn to_integer(reply: Reply) -> Result<i64> {
    match reply {
        Reply::Integer(n) => Ok(n),
        Reply::Bulk(b) => std::str::from_utf8(&b)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| Error::conversion("bulk string does not hold an integer")),
        Reply::Status(s) => s
            .parse::<i64>()
            .map_err(|_| Error::conversion("status line does not hold an integer")),
        Reply::Error { kind, message } => Err(server_error(kind, message)),
        other => Err(Error::conversion(format!(
            "expected integer reply, got {}",
            other.shape()
        ))),
    }
}

/// Projects a reply onto a boolean.
///
/// `true` for `Status("OK")`, `Integer(1)` and the string literal `"1"`;
/// `false` for `Integer(0)`, the string literal `"0"` and `Nil`. This
/// unifies commands that acknowledge via status text with commands that
/// answer a 1/0 integer, so callers need no per-command special-casing.
#[inline]
pub fn to_bool(reply: Reply) -> Result<bool> {
    match reply {
        Reply::Status(s) if s == "OK" || s == "1" => Ok(true),
        Reply::Status(s) if s == "0" => Ok(false),
        Reply::Integer(1) => Ok(true),
        Reply::Integer(0) => Ok(false),
        Reply::Bulk(b) if b.as_ref() == b"1" => Ok(true),
        Reply::Bulk(b) if b.as_ref() == b"0" => Ok(false),
        Reply::Nil => Ok(false),
        Reply::Error { kind, message } => Err(server_error(kind, message)),
        other => Err(Error::conversion(format!(
            "reply does not encode a boolean: {}",
            other.shape()
        ))),
    }
}

/// Projects a reply onto a string.
///
/// Accepts only `Status` and `Bulk` replies; a bulk payload must be valid
/// UTF-8. Callers expecting integers, arrays or nil use a different
/// projection, or the untyped call for raw bytes.
#[inline]
pub fn to_string(reply: Reply) -> Result<String> {
    match reply {
        Reply::Status(s) => Ok(s),
        Reply::Bulk(b) => String::from_utf8(b.to_vec())
            .map_err(|_| Error::conversion("bulk string is not valid UTF-8")),
        Reply::Error { kind, message } => Err(server_error(kind, message)),
        other => Err(Error::conversion(format!(
            "expected string reply, got {}",
            other.shape()
        ))),
    }
}

/// Projects a reply onto an ordered sequence of still-untyped replies.
///
/// Accepts only `Array`. `Nil` is a conversion failure here: callers
/// expecting array-or-nil must check [`Reply::is_nil`] before projecting.
#[inline]
pub fn to_array(reply: Reply) -> Result<Vec<Reply>> {
    match reply {
        Reply::Array(items) => Ok(items),
        Reply::Error { kind, message } => Err(server_error(kind, message)),
        other => Err(Error::conversion(format!(
            "expected array reply, got {}",
            other.shape()
        ))),
    }
}

/// Projects an array reply onto integers, elementwise and fail-fast.
#[inline]
pub fn to_integers(reply: Reply) -> Result<Vec<i64>> {
    to_array(reply)?.into_iter().map(to_integer).collect()
}

/// Projects an array reply onto booleans, elementwise and fail-fast.
#[inline]
pub fn to_bools(reply: Reply) -> Result<Vec<bool>> {
    to_array(reply)?.into_iter().map(to_bool).collect()
}

/// Projects an array reply onto strings, elementwise and fail-fast.
#[inline]
pub fn to_strings(reply: Reply) -> Result<Vec<String>> {
    to_array(reply)?.into_iter().map(to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn bulk(s: &'static str) -> Reply {
        Reply::Bulk(Bytes::from_static(s.as_bytes()))
    }

    #[test]
    fn test_to_integer_direct() {
        assert_eq!(to_integer(Reply::Integer(42)).unwrap(), 42);
    }

    #[test]
    fn test_to_integer_from_bulk_text() {
        assert_eq!(to_integer(bulk("123")).unwrap(), 123);
        assert_eq!(to_integer(bulk("-7")).unwrap(), -7);
    }

    #[test]
    fn test_to_integer_from_status_text() {
        assert_eq!(to_integer(Reply::Status("10".into())).unwrap(), 10);
    }

    #[test]
    fn test_to_integer_rejects_non_numeric() {
        assert!(matches!(
            to_integer(bulk("abc")).unwrap_err(),
            Error::Conversion { .. }
        ));
        assert!(matches!(
            to_integer(Reply::Nil).unwrap_err(),
            Error::Conversion { .. }
        ));
        assert!(matches!(
            to_integer(Reply::Array(vec![])).unwrap_err(),
            Error::Conversion { .. }
        ));
    }

    #[test]
    fn test_to_bool_truth_table() {
        assert!(to_bool(Reply::Status("OK".into())).unwrap());
        assert!(to_bool(Reply::Integer(1)).unwrap());
        assert!(to_bool(bulk("1")).unwrap());
        assert!(!to_bool(Reply::Integer(0)).unwrap());
        assert!(!to_bool(bulk("0")).unwrap());
        assert!(!to_bool(Reply::Nil).unwrap());
    }

    #[test]
    fn test_to_bool_rejects_other_values() {
        assert!(matches!(
            to_bool(bulk("hi")).unwrap_err(),
            Error::Conversion { .. }
        ));
        assert!(matches!(
            to_bool(Reply::Integer(2)).unwrap_err(),
            Error::Conversion { .. }
        ));
        assert!(matches!(
            to_bool(Reply::Status("PONG".into())).unwrap_err(),
            Error::Conversion { .. }
        ));
    }

    #[test]
    fn test_to_string_accepts_status_and_bulk_only() {
        assert_eq!(to_string(Reply::Status("PONG".into())).unwrap(), "PONG");
        assert_eq!(to_string(bulk("value")).unwrap(), "value");
        assert!(matches!(
            to_string(Reply::Integer(1)).unwrap_err(),
            Error::Conversion { .. }
        ));
        assert!(matches!(
            to_string(Reply::Nil).unwrap_err(),
            Error::Conversion { .. }
        ));
        assert!(matches!(
            to_string(Reply::Array(vec![])).unwrap_err(),
            Error::Conversion { .. }
        ));
    }

    #[test]
    fn test_to_string_rejects_invalid_utf8() {
        let reply = Reply::Bulk(Bytes::from_static(b"\xff\xfe"));
        assert!(matches!(
            to_string(reply).unwrap_err(),
            Error::Conversion { .. }
        ));
    }

    #[test]
    fn test_to_array_rejects_nil() {
        assert!(matches!(
            to_array(Reply::Nil).unwrap_err(),
            Error::Conversion { .. }
        ));
        assert_eq!(to_array(Reply::Array(vec![])).unwrap(), Vec::<Reply>::new());
    }

    #[test]
    fn test_to_integers_ordered() {
        let reply = Reply::Array(vec![Reply::Integer(1), Reply::Integer(2)]);
        assert_eq!(to_integers(reply).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_to_integers_fail_fast_no_partial_result() {
        let reply = Reply::Array(vec![Reply::Integer(1), bulk("hi")]);
        assert!(matches!(
            to_integers(reply).unwrap_err(),
            Error::Conversion { .. }
        ));
    }

    #[test]
    fn test_to_strings_mixed_status_and_bulk() {
        let reply = Reply::Array(vec![Reply::Status("OK".into()), bulk("v")]);
        assert_eq!(to_strings(reply).unwrap(), vec!["OK", "v"]);
    }

    #[test]
    fn test_server_error_wins_over_shape_mismatch() {
        let reply = Reply::Error {
            kind: "WRONGTYPE".into(),
            message: "bad key".into(),
        };
        assert!(matches!(
            to_integer(reply).unwrap_err(),
            Error::Server { .. }
        ));
    }
}
