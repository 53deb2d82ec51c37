//! Command surface tests against a scripted in-process stream.
//!
//! The server side of a duplex pipe is pre-loaded with wire bytes, so each
//! test exercises the full encode, write, read, decode and project path
//! without a live server.

use bytes::Bytes;
use redwire::{Connection, Error, Reply};
use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt, DuplexStream};

async fn scripted(reply: &[u8]) -> (Connection<DuplexStream>, DuplexStream) {
    let (client, mut server) = duplex(4096);
    server.write_all(reply).await.unwrap();
    (Connection::new(client), server)
}

#[tokio::test]
async fn set_acknowledges_with_ok_status() {
    let (mut conn, mut server) = scripted(b"+OK\r\n").await;
    assert!(conn.set("key", "value").await.unwrap());

    let mut buf = vec![0u8; 128];
    let n = server.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n");
}

#[tokio::test]
async fn get_missing_key_is_nil_not_error() {
    let (mut conn, _server) = scripted(b"$-1\r\n").await;
    let reply = conn.get("absent").await.unwrap();
    assert!(reply.is_nil());
}

#[tokio::test]
async fn get_present_key_is_bulk() {
    let (mut conn, _server) = scripted(b"$5\r\nhello\r\n").await;
    let reply = conn.get("key").await.unwrap();
    assert_eq!(reply, Reply::Bulk(Bytes::from_static(b"hello")));
}

#[tokio::test]
async fn incr_answers_an_integer() {
    let (mut conn, _server) = scripted(b":11\r\n").await;
    assert_eq!(conn.incr("counter").await.unwrap(), 11);
}

#[tokio::test]
async fn setnx_maps_one_and_zero_to_bool() {
    let (mut conn, _server) = scripted(b":1\r\n:0\r\n").await;
    assert!(conn.setnx("k", "v").await.unwrap());
    assert!(!conn.setnx("k", "v").await.unwrap());
}

#[tokio::test]
async fn zscore_accepts_numeric_bulk_text() {
    // Score queries answer numeric text as a bulk string.
    let (mut conn, _server) = scripted(b"$4\r\n3.14\r\n").await;
    assert_eq!(conn.zscore("board", "player").await.unwrap(), "3.14");
}

#[tokio::test]
async fn ttl_accepts_negative_markers() {
    let (mut conn, _server) = scripted(b":-2\r\n").await;
    assert_eq!(conn.ttl("gone").await.unwrap(), -2);
}

#[tokio::test]
async fn mget_keeps_nil_elements_untyped() {
    let (mut conn, _server) =
        scripted(b"*3\r\n$2\r\nv1\r\n$-1\r\n$2\r\nv3\r\n").await;
    let values = conn.mget(["a", "b", "c"]).await.unwrap();
    assert_eq!(
        values,
        vec![
            Reply::Bulk(Bytes::from_static(b"v1")),
            Reply::Nil,
            Reply::Bulk(Bytes::from_static(b"v3")),
        ]
    );
}

#[tokio::test]
async fn lrange_projects_elements_to_strings() {
    let (mut conn, _server) = scripted(b"*2\r\n$1\r\na\r\n$1\r\nb\r\n").await;
    assert_eq!(conn.lrange("list", 0, -1).await.unwrap(), vec!["a", "b"]);
}

#[tokio::test]
async fn wrong_type_error_carries_kind_and_message() {
    let (mut conn, _server) = scripted(
        b"-WRONGTYPE Operation against a key holding the wrong kind of value\r\n",
    )
    .await;
    let err = conn.incr("a-list").await.unwrap_err();
    match err {
        Error::Server { kind, message } => {
            assert_eq!(kind, "WRONGTYPE");
            assert!(message.starts_with("Operation against"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn bare_error_token_gets_placeholder_message() {
    let (mut conn, _server) = scripted(b"-ERR\r\n").await;
    let err = conn.ping().await.unwrap_err();
    match err {
        Error::Server { kind, message } => {
            assert_eq!(kind, "ERR");
            assert_eq!(message, "N/A");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn transaction_helpers_use_trivial_coercions() {
    let (mut conn, _server) =
        scripted(b"+OK\r\n+QUEUED\r\n*1\r\n:1\r\n+OK\r\n").await;
    assert!(conn.multi().await.unwrap());
    // Queued command acknowledgements come back as plain status lines.
    assert_eq!(conn.call_string(redwire::command::incr("n")).await.unwrap(), "QUEUED");
    let results = conn.exec().await.unwrap();
    assert_eq!(results, vec![Reply::Integer(1)]);
    assert!(conn.unwatch().await.unwrap());
}

#[tokio::test]
async fn hgetall_pairs_stay_ordered() {
    let (mut conn, _server) =
        scripted(b"*4\r\n$1\r\nf\r\n$1\r\n1\r\n$1\r\ng\r\n$1\r\n2\r\n").await;
    let pairs = conn.hgetall("h").await.unwrap();
    assert_eq!(pairs.len(), 4);
    assert_eq!(pairs[0], Reply::Bulk(Bytes::from_static(b"f")));
    assert_eq!(pairs[3], Reply::Bulk(Bytes::from_static(b"2")));
}

#[tokio::test]
async fn lpushx_answers_zero_for_missing_list() {
    let (mut conn, _server) = scripted(b":0\r\n").await;
    assert_eq!(conn.lpushx("absent", "v").await.unwrap(), 0);
}

#[tokio::test]
async fn rpoplpush_hands_back_the_rotated_element() {
    let (mut conn, mut server) = scripted(b"$3\r\nend\r\n").await;
    assert_eq!(conn.rpoplpush("src", "dst").await.unwrap(), "end");

    let mut buf = vec![0u8; 128];
    let n = server.read(&mut buf).await.unwrap();
    assert_eq!(&buf[..n], b"*3\r\n$9\r\nRPOPLPUSH\r\n$3\r\nsrc\r\n$3\r\ndst\r\n");
}

#[tokio::test]
async fn blpop_answers_key_element_pair() {
    let (mut conn, _server) =
        scripted(b"*2\r\n$5\r\nqueue\r\n$3\r\njob\r\n").await;
    let pair = conn.blpop(["queue"], 1).await.unwrap();
    assert_eq!(
        pair,
        vec![
            Reply::Bulk(Bytes::from_static(b"queue")),
            Reply::Bulk(Bytes::from_static(b"job")),
        ]
    );
}

#[tokio::test]
async fn hmset_acknowledges_with_ok_status() {
    let (mut conn, _server) = scripted(b"+OK\r\n").await;
    assert!(conn.hmset("h", [("f", "1")]).await.unwrap());
}

#[tokio::test]
async fn scan_keeps_cursor_and_keys_untyped() {
    let (mut conn, _server) =
        scripted(b"*2\r\n$2\r\n17\r\n*2\r\n$1\r\na\r\n$1\r\nb\r\n").await;
    let page = conn.scan(0).await.unwrap();
    assert_eq!(page[0], Reply::Bulk(Bytes::from_static(b"17")));
    match &page[1] {
        Reply::Array(keys) => assert_eq!(keys.len(), 2),
        other => panic!("expected key page, got {other:?}"),
    }
}

#[tokio::test]
async fn script_exists_maps_flags_in_order() {
    let (mut conn, _server) = scripted(b"*2\r\n:1\r\n:0\r\n").await;
    let flags = conn.script_exists(["sha1", "sha2"]).await.unwrap();
    assert_eq!(flags, vec![true, false]);
}

#[tokio::test]
async fn expireat_maps_one_to_true() {
    let (mut conn, _server) = scripted(b":1\r\n").await;
    assert!(conn.expireat("k", 2_000_000_000).await.unwrap());
}

#[tokio::test]
async fn zinterstore_answers_stored_cardinality() {
    let (mut conn, mut server) = scripted(b":2\r\n").await;
    assert_eq!(conn.zinterstore("dst", ["a", "b"]).await.unwrap(), 2);

    let mut buf = vec![0u8; 128];
    let n = server.read(&mut buf).await.unwrap();
    assert_eq!(
        &buf[..n],
        b"*5\r\n$11\r\nZINTERSTORE\r\n$3\r\ndst\r\n$1\r\n2\r\n$1\r\na\r\n$1\r\nb\r\n"
    );
}

#[tokio::test]
async fn reply_split_across_writes_is_reassembled() {
    let (client, mut server) = duplex(4096);
    let mut conn = Connection::new(client);

    let writer = tokio::spawn(async move {
        let mut buf = vec![0u8; 64];
        server.read(&mut buf).await.unwrap();
        server.write_all(b"$5\r\nhe").await.unwrap();
        tokio::task::yield_now().await;
        server.write_all(b"llo\r\n").await.unwrap();
        server
    });

    assert_eq!(conn.lpop("list").await.unwrap(), "hello");
    writer.await.unwrap();
}
