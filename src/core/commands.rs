//! Typed command helpers.
//!
//! Each helper binds one command name to the projection its documented
//! reply shape requires and adds no behavior of its own. Commands whose
//! servers answer numeric text as bulk strings (the sorted-set score
//! family) go through the string projection, matching the protocol rather
//! than papering over it.

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::core::command;
use crate::core::connection::Connection;
use crate::proto::error::Result;
use crate::proto::frame::Reply;

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    // Connection handling

    /// PING; answers with a status line.
    pub async fn ping(&mut self) -> Result<String> {
        self.call_string(command::ping()).await
    }

    /// ECHO a message back from the server.
    pub async fn echo(&mut self, msg: impl Into<Bytes>) -> Result<String> {
        self.call_string(command::echo(msg)).await
    }

    /// SELECT a logical database.
    pub async fn select(&mut self, db: u8) -> Result<bool> {
        self.call_bool(command::select(db)).await
    }

    /// AUTH with a password.
    pub async fn auth(&mut self, password: impl Into<Bytes>) -> Result<bool> {
        self.call_bool(command::auth(password)).await
    }

    // Strings

    /// GET the value of a key; `Reply::Nil` when the key is absent.
    pub async fn get(&mut self, key: impl Into<Bytes>) -> Result<Reply> {
        self.call(command::get(key)).await
    }

    /// SET a key to a value.
    pub async fn set(
        &mut self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::set(key, value)).await
    }

    /// SETNX; true if the key was set.
    pub async fn setnx(
        &mut self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::setnx(key, value)).await
    }

    /// APPEND to a string value; answers the new length.
    pub async fn append(
        &mut self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::append(key, value)).await
    }

    /// STRLEN of a string value.
    pub async fn strlen(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::strlen(key)).await
    }

    /// INCR a counter.
    pub async fn incr(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::incr(key)).await
    }

    /// INCRBY a counter.
    pub async fn incr_by(&mut self, key: impl Into<Bytes>, amount: i64) -> Result<i64> {
        self.call_integer(command::incr_by(key, amount)).await
    }

    /// INCRBYFLOAT; the new value arrives as numeric text.
    pub async fn incr_by_float(
        &mut self,
        key: impl Into<Bytes>,
        amount: f64,
    ) -> Result<String> {
        self.call_string(command::incr_by_float(key, amount)).await
    }

    /// DECR a counter.
    pub async fn decr(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::decr(key)).await
    }

    /// DECRBY a counter.
    pub async fn decr_by(&mut self, key: impl Into<Bytes>, amount: i64) -> Result<i64> {
        self.call_integer(command::decr_by(key, amount)).await
    }

    /// MGET several keys; elements stay untyped because absent keys answer
    /// nil.
    pub async fn mget<I, T>(&mut self, keys: I) -> Result<Vec<Reply>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_array(command::mget(keys)).await
    }

    /// MSET several key/value pairs.
    pub async fn mset<I, K, V>(&mut self, pairs: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Bytes>,
        V: Into<Bytes>,
    {
        self.call_string(command::mset(pairs)).await
    }

    /// MSETNX; true only if every key was set.
    pub async fn msetnx<I, K, V>(&mut self, pairs: I) -> Result<bool>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Bytes>,
        V: Into<Bytes>,
    {
        self.call_bool(command::msetnx(pairs)).await
    }

    // Lists

    /// LPUSH values; answers the list length.
    pub async fn lpush<I, T>(&mut self, key: impl Into<Bytes>, values: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::lpush(key, values)).await
    }

    /// RPUSH values; answers the list length.
    pub async fn rpush<I, T>(&mut self, key: impl Into<Bytes>, values: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::rpush(key, values)).await
    }

    /// LLEN of a list.
    pub async fn llen(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::llen(key)).await
    }

    /// LREM matching elements; answers the removed count.
    pub async fn lrem(
        &mut self,
        key: impl Into<Bytes>,
        count: i64,
        value: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::lrem(key, count, value)).await
    }

    /// LSET an element by index.
    pub async fn lset(
        &mut self,
        key: impl Into<Bytes>,
        index: i64,
        value: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::lset(key, index, value)).await
    }

    /// LTRIM a list to a range.
    pub async fn ltrim(
        &mut self,
        key: impl Into<Bytes>,
        start: i64,
        stop: i64,
    ) -> Result<bool> {
        self.call_bool(command::ltrim(key, start, stop)).await
    }

    /// LINDEX an element by index.
    pub async fn lindex(&mut self, key: impl Into<Bytes>, index: i64) -> Result<String> {
        self.call_string(command::lindex(key, index)).await
    }

    /// LPOP the head of a list.
    pub async fn lpop(&mut self, key: impl Into<Bytes>) -> Result<String> {
        self.call_string(command::lpop(key)).await
    }

    /// RPOP the tail of a list.
    pub async fn rpop(&mut self, key: impl Into<Bytes>) -> Result<String> {
        self.call_string(command::rpop(key)).await
    }

    /// LRANGE of a list as strings.
    pub async fn lrange(
        &mut self,
        key: impl Into<Bytes>,
        start: i64,
        stop: i64,
    ) -> Result<Vec<String>> {
        self.call_strings(command::lrange(key, start, stop)).await
    }

    /// LPUSHX; pushes only onto an existing list.
    pub async fn lpushx(
        &mut self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::lpushx(key, value)).await
    }

    /// RPUSHX; pushes only onto an existing list.
    pub async fn rpushx(
        &mut self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::rpushx(key, value)).await
    }

    /// RPOPLPUSH; rotates the popped element to another list.
    pub async fn rpoplpush(
        &mut self,
        source: impl Into<Bytes>,
        destination: impl Into<Bytes>,
    ) -> Result<String> {
        self.call_string(command::rpoplpush(source, destination))
            .await
    }

    /// LINSERT relative to a pivot; answers the new length, -1 when the
    /// pivot is absent.
    pub async fn linsert(
        &mut self,
        key: impl Into<Bytes>,
        before: bool,
        pivot: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::linsert(key, before, pivot, value))
            .await
    }

    /// BLPOP; answers a key/element pair, or nil on timeout.
    pub async fn blpop<I, T>(&mut self, keys: I, timeout_secs: u64) -> Result<Vec<Reply>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_array(command::blpop(keys, timeout_secs)).await
    }

    /// BRPOP; answers a key/element pair, or nil on timeout.
    pub async fn brpop<I, T>(&mut self, keys: I, timeout_secs: u64) -> Result<Vec<Reply>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_array(command::brpop(keys, timeout_secs)).await
    }

    // Sets

    /// SADD members; answers the newly added count.
    pub async fn sadd<I, T>(&mut self, key: impl Into<Bytes>, members: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::sadd(key, members)).await
    }

    /// SREM members; answers the removed count.
    pub async fn srem<I, T>(&mut self, key: impl Into<Bytes>, members: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::srem(key, members)).await
    }

    /// SCARD of a set.
    pub async fn scard(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::scard(key)).await
    }

    /// SISMEMBER membership test.
    pub async fn sismember(
        &mut self,
        key: impl Into<Bytes>,
        member: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::sismember(key, member)).await
    }

    /// SMOVE a member between sets.
    pub async fn smove(
        &mut self,
        source: impl Into<Bytes>,
        destination: impl Into<Bytes>,
        member: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::smove(source, destination, member))
            .await
    }

    /// SPOP a random member.
    pub async fn spop(&mut self, key: impl Into<Bytes>) -> Result<String> {
        self.call_string(command::spop(key)).await
    }

    /// SMEMBERS of a set as strings.
    pub async fn smembers(&mut self, key: impl Into<Bytes>) -> Result<Vec<String>> {
        self.call_strings(command::smembers(key)).await
    }

    /// SDIFF of several sets.
    pub async fn sdiff<I, T>(&mut self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_strings(command::sdiff(keys)).await
    }

    /// SINTER of several sets.
    pub async fn sinter<I, T>(&mut self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_strings(command::sinter(keys)).await
    }

    /// SUNION of several sets.
    pub async fn sunion<I, T>(&mut self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_strings(command::sunion(keys)).await
    }

    /// SDIFFSTORE; answers the stored cardinality.
    pub async fn sdiffstore<I, T>(
        &mut self,
        destination: impl Into<Bytes>,
        keys: I,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::sdiffstore(destination, keys))
            .await
    }

    /// SINTERSTORE; answers the stored cardinality.
    pub async fn sinterstore<I, T>(
        &mut self,
        destination: impl Into<Bytes>,
        keys: I,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::sinterstore(destination, keys))
            .await
    }

    /// SUNIONSTORE; answers the stored cardinality.
    pub async fn sunionstore<I, T>(
        &mut self,
        destination: impl Into<Bytes>,
        keys: I,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::sunionstore(destination, keys))
            .await
    }

    /// SSCAN one page; a two-element cursor/members array, untyped.
    pub async fn sscan(&mut self, key: impl Into<Bytes>, cursor: u64) -> Result<Vec<Reply>> {
        self.call_array(command::sscan(key, cursor)).await
    }

    // Sorted sets

    /// ZADD one scored member; answers the added count.
    pub async fn zadd(
        &mut self,
        key: impl Into<Bytes>,
        score: f64,
        member: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::zadd(key, score, member)).await
    }

    /// ZINCRBY a member's score; the new score arrives as numeric text.
    pub async fn zincrby(
        &mut self,
        key: impl Into<Bytes>,
        delta: f64,
        member: impl Into<Bytes>,
    ) -> Result<String> {
        self.call_string(command::zincrby(key, delta, member)).await
    }

    /// ZSCORE of a member; scores arrive as bulk-string numeric text.
    pub async fn zscore(
        &mut self,
        key: impl Into<Bytes>,
        member: impl Into<Bytes>,
    ) -> Result<String> {
        self.call_string(command::zscore(key, member)).await
    }

    /// ZCARD of a sorted set.
    pub async fn zcard(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::zcard(key)).await
    }

    /// ZCOUNT members within a score range.
    pub async fn zcount(
        &mut self,
        key: impl Into<Bytes>,
        min: impl Into<Bytes>,
        max: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::zcount(key, min, max)).await
    }

    /// ZREM members; answers the removed count.
    pub async fn zrem<I, T>(&mut self, key: impl Into<Bytes>, members: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::zrem(key, members)).await
    }

    /// ZRANGE by rank as strings.
    pub async fn zrange(
        &mut self,
        key: impl Into<Bytes>,
        start: i64,
        stop: i64,
    ) -> Result<Vec<String>> {
        self.call_strings(command::zrange(key, start, stop)).await
    }

    /// ZREVRANGE by rank as strings.
    pub async fn zrevrange(
        &mut self,
        key: impl Into<Bytes>,
        start: i64,
        stop: i64,
    ) -> Result<Vec<String>> {
        self.call_strings(command::zrevrange(key, start, stop)).await
    }

    /// ZRANGEBYSCORE as strings.
    pub async fn zrangebyscore(
        &mut self,
        key: impl Into<Bytes>,
        min: impl Into<Bytes>,
        max: impl Into<Bytes>,
    ) -> Result<Vec<String>> {
        self.call_strings(command::zrangebyscore(key, min, max))
            .await
    }

    /// ZLEXCOUNT members within a lexicographic range.
    pub async fn zlexcount(
        &mut self,
        key: impl Into<Bytes>,
        min: impl Into<Bytes>,
        max: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::zlexcount(key, min, max)).await
    }

    /// ZREMRANGEBYLEX; answers the removed count.
    pub async fn zremrangebylex(
        &mut self,
        key: impl Into<Bytes>,
        min: impl Into<Bytes>,
        max: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::zremrangebylex(key, min, max))
            .await
    }

    /// ZREMRANGEBYRANK; answers the removed count.
    pub async fn zremrangebyrank(
        &mut self,
        key: impl Into<Bytes>,
        start: i64,
        stop: i64,
    ) -> Result<i64> {
        self.call_integer(command::zremrangebyrank(key, start, stop))
            .await
    }

    /// ZREMRANGEBYSCORE; answers the removed count.
    pub async fn zremrangebyscore(
        &mut self,
        key: impl Into<Bytes>,
        min: impl Into<Bytes>,
        max: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::zremrangebyscore(key, min, max))
            .await
    }

    /// ZINTERSTORE; answers the stored cardinality.
    pub async fn zinterstore<I, T>(
        &mut self,
        destination: impl Into<Bytes>,
        keys: I,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::zinterstore(destination, keys))
            .await
    }

    /// ZUNIONSTORE; answers the stored cardinality.
    pub async fn zunionstore<I, T>(
        &mut self,
        destination: impl Into<Bytes>,
        keys: I,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::zunionstore(destination, keys))
            .await
    }

    /// ZSCAN one page; a two-element cursor/entries array, untyped.
    pub async fn zscan(&mut self, key: impl Into<Bytes>, cursor: u64) -> Result<Vec<Reply>> {
        self.call_array(command::zscan(key, cursor)).await
    }

    // Hashes

    /// HSET a field; true when the field is new.
    pub async fn hset(
        &mut self,
        key: impl Into<Bytes>,
        field: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::hset(key, field, value)).await
    }

    /// HSETNX a field; true when it was set.
    pub async fn hsetnx(
        &mut self,
        key: impl Into<Bytes>,
        field: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::hsetnx(key, field, value)).await
    }

    /// HGET a field value.
    pub async fn hget(
        &mut self,
        key: impl Into<Bytes>,
        field: impl Into<Bytes>,
    ) -> Result<String> {
        self.call_string(command::hget(key, field)).await
    }

    /// HDEL fields; answers the removed count.
    pub async fn hdel<I, T>(&mut self, key: impl Into<Bytes>, fields: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::hdel(key, fields)).await
    }

    /// HEXISTS field test; the server answers 1/0.
    pub async fn hexists(
        &mut self,
        key: impl Into<Bytes>,
        field: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::hexists(key, field)).await
    }

    /// HINCRBY a field.
    pub async fn hincrby(
        &mut self,
        key: impl Into<Bytes>,
        field: impl Into<Bytes>,
        amount: i64,
    ) -> Result<i64> {
        self.call_integer(command::hincrby(key, field, amount)).await
    }

    /// HLEN of a hash.
    pub async fn hlen(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::hlen(key)).await
    }

    /// HSTRLEN of a field value.
    pub async fn hstrlen(
        &mut self,
        key: impl Into<Bytes>,
        field: impl Into<Bytes>,
    ) -> Result<i64> {
        self.call_integer(command::hstrlen(key, field)).await
    }

    /// HGETALL as an alternating field/value sequence; untyped because
    /// values may be binary.
    pub async fn hgetall(&mut self, key: impl Into<Bytes>) -> Result<Vec<Reply>> {
        self.call_array(command::hgetall(key)).await
    }

    /// HKEYS as strings.
    pub async fn hkeys(&mut self, key: impl Into<Bytes>) -> Result<Vec<String>> {
        self.call_strings(command::hkeys(key)).await
    }

    /// HVALS as strings.
    pub async fn hvals(&mut self, key: impl Into<Bytes>) -> Result<Vec<String>> {
        self.call_strings(command::hvals(key)).await
    }

    /// HMGET fields; untyped because absent fields answer nil.
    pub async fn hmget<I, T>(&mut self, key: impl Into<Bytes>, fields: I) -> Result<Vec<Reply>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_array(command::hmget(key, fields)).await
    }

    /// HMSET several fields; acknowledged with a status line.
    pub async fn hmset<I, F, V>(&mut self, key: impl Into<Bytes>, pairs: I) -> Result<bool>
    where
        I: IntoIterator<Item = (F, V)>,
        F: Into<Bytes>,
        V: Into<Bytes>,
    {
        self.call_bool(command::hmset(key, pairs)).await
    }

    /// HINCRBYFLOAT; the new value arrives as numeric text.
    pub async fn hincrbyfloat(
        &mut self,
        key: impl Into<Bytes>,
        field: impl Into<Bytes>,
        amount: f64,
    ) -> Result<String> {
        self.call_string(command::hincrbyfloat(key, field, amount))
            .await
    }

    /// HSCAN one page; a two-element cursor/entries array, untyped.
    pub async fn hscan(&mut self, key: impl Into<Bytes>, cursor: u64) -> Result<Vec<Reply>> {
        self.call_array(command::hscan(key, cursor)).await
    }

    // Keys

    /// DEL keys; answers the removed count.
    pub async fn del<I, T>(&mut self, keys: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::del(keys)).await
    }

    /// EXISTS test for one key.
    pub async fn exists(&mut self, key: impl Into<Bytes>) -> Result<bool> {
        self.call_bool(command::exists(key)).await
    }

    /// EXPIRE a key; true if a timeout was set.
    pub async fn expire(&mut self, key: impl Into<Bytes>, seconds: i64) -> Result<bool> {
        self.call_bool(command::expire(key, seconds)).await
    }

    /// EXPIREAT a key at a Unix timestamp; true if a timeout was set.
    pub async fn expireat(
        &mut self,
        key: impl Into<Bytes>,
        timestamp: i64,
    ) -> Result<bool> {
        self.call_bool(command::expireat(key, timestamp)).await
    }

    /// PEXPIRE a key in milliseconds; true if a timeout was set.
    pub async fn pexpire(&mut self, key: impl Into<Bytes>, millis: i64) -> Result<bool> {
        self.call_bool(command::pexpire(key, millis)).await
    }

    /// PEXPIREAT a key at a millisecond Unix timestamp.
    pub async fn pexpireat(
        &mut self,
        key: impl Into<Bytes>,
        timestamp_millis: i64,
    ) -> Result<bool> {
        self.call_bool(command::pexpireat(key, timestamp_millis))
            .await
    }

    /// MOVE a key to another database; true if it moved.
    pub async fn move_key(&mut self, key: impl Into<Bytes>, db: u8) -> Result<bool> {
        self.call_bool(command::move_key(key, db)).await
    }

    /// PERSIST a key; true if a timeout was removed.
    pub async fn persist(&mut self, key: impl Into<Bytes>) -> Result<bool> {
        self.call_bool(command::persist(key)).await
    }

    /// TTL in seconds; negative values are the server's absent/no-expiry
    /// markers.
    pub async fn ttl(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::ttl(key)).await
    }

    /// PTTL in milliseconds.
    pub async fn pttl(&mut self, key: impl Into<Bytes>) -> Result<i64> {
        self.call_integer(command::pttl(key)).await
    }

    /// TOUCH keys; answers the touched count.
    pub async fn touch<I, T>(&mut self, keys: I) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_integer(command::touch(keys)).await
    }

    /// RENAME a key.
    pub async fn rename(
        &mut self,
        key: impl Into<Bytes>,
        new_key: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::rename(key, new_key)).await
    }

    /// RENAMENX a key; true if the target did not exist.
    pub async fn renamenx(
        &mut self,
        key: impl Into<Bytes>,
        new_key: impl Into<Bytes>,
    ) -> Result<bool> {
        self.call_bool(command::renamenx(key, new_key)).await
    }

    /// RANDOMKEY from the current database.
    pub async fn randomkey(&mut self) -> Result<String> {
        self.call_string(command::randomkey()).await
    }

    /// TYPE of the value stored at a key.
    pub async fn key_type(&mut self, key: impl Into<Bytes>) -> Result<String> {
        self.call_string(command::key_type(key)).await
    }

    /// KEYS matching a pattern.
    pub async fn keys(&mut self, pattern: impl Into<Bytes>) -> Result<Vec<String>> {
        self.call_strings(command::keys(pattern)).await
    }

    /// SORT a list, set or sorted set with default options.
    pub async fn sort(&mut self, key: impl Into<Bytes>) -> Result<Vec<String>> {
        self.call_strings(command::sort(key)).await
    }

    /// SCAN one page of the keyspace; a two-element cursor/keys array,
    /// untyped.
    pub async fn scan(&mut self, cursor: u64) -> Result<Vec<Reply>> {
        self.call_array(command::scan(cursor)).await
    }

    /// WAIT for replica acknowledgement; answers the replica count.
    pub async fn wait(&mut self, numreplicas: i64, timeout_millis: i64) -> Result<i64> {
        self.call_integer(command::wait(numreplicas, timeout_millis))
            .await
    }

    // Scripting

    /// EVAL a script that answers an integer.
    pub async fn eval<I, T, J, U>(
        &mut self,
        script: impl Into<Bytes>,
        keys: I,
        args: J,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
        J: IntoIterator<Item = U>,
        U: Into<Bytes>,
    {
        self.call_integer(command::eval(script, keys, args)).await
    }

    /// EVALSHA a cached script that answers an integer.
    pub async fn evalsha<I, T, J, U>(
        &mut self,
        sha: impl Into<Bytes>,
        keys: I,
        args: J,
    ) -> Result<i64>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
        J: IntoIterator<Item = U>,
        U: Into<Bytes>,
    {
        self.call_integer(command::evalsha(sha, keys, args)).await
    }

    /// SCRIPT LOAD; answers the script's sha1 digest.
    pub async fn script_load(&mut self, script: impl Into<Bytes>) -> Result<String> {
        self.call_string(command::script_load(script)).await
    }

    /// SCRIPT EXISTS; one flag per digest, in order.
    pub async fn script_exists<I, T>(&mut self, shas: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_bools(command::script_exists(shas)).await
    }

    // Transactions

    /// MULTI; opens a transaction.
    pub async fn multi(&mut self) -> Result<bool> {
        self.call_bool(command::multi()).await
    }

    /// EXEC; answers the queued replies, still untyped.
    pub async fn exec(&mut self) -> Result<Vec<Reply>> {
        self.call_array(command::exec()).await
    }

    /// DISCARD; abandons a transaction.
    pub async fn discard(&mut self) -> Result<bool> {
        self.call_bool(command::discard()).await
    }

    /// WATCH keys for optimistic locking.
    pub async fn watch<I, T>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.call_bool(command::watch(keys)).await
    }

    /// UNWATCH all watched keys.
    pub async fn unwatch(&mut self) -> Result<bool> {
        self.call_bool(command::unwatch()).await
    }
}
