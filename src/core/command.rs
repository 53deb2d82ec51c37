use bytes::Bytes;

/// A command request ready to be sent to the server.
///
/// An ordered, non-empty argument list, first element the command name.
/// Always encoded as an array-of-bulk-strings frame regardless of element
/// count. Arguments are raw bytes; binary payloads need no escaping.
///
/// # Example
///
/// ```
/// use redwire::core::command::{get, Cmd};
///
/// let cmd = Cmd::new("SET").arg("key").arg("value");
/// let get_cmd = get("key");
/// ```
#[derive(Debug)]
pub struct Cmd {
    args: Vec<Bytes>,
}

impl Cmd {
    /// Creates a new command with the given name.
    #[inline]
    pub fn new(name: impl Into<Bytes>) -> Self {
        Self {
            args: vec![name.into()],
        }
    }

    /// Appends an argument to the command.
    #[inline]
    pub fn arg<T: Into<Bytes>>(mut self, arg: T) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends every argument from the iterator, in order.
    #[inline]
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Consumes the command, yielding its ordered argument list.
    #[inline]
    pub fn into_args(self) -> Vec<Bytes> {
        self.args
    }

    /// Number of arguments, including the command name.
    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Always false: a command carries at least its name.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

// Connection

/// Creates a PING command.
#[inline]
pub fn ping() -> Cmd {
    Cmd::new("PING")
}

/// Creates an ECHO command.
#[inline]
pub fn echo(msg: impl Into<Bytes>) -> Cmd {
    Cmd::new("ECHO").arg(msg)
}

/// Creates a SELECT command.
#[inline]
pub fn select(db: u8) -> Cmd {
    Cmd::new("SELECT").arg(db.to_string())
}

/// Creates an AUTH command with password only.
#[inline]
pub fn auth(password: impl Into<Bytes>) -> Cmd {
    Cmd::new("AUTH").arg(password)
}

/// Creates an AUTH command with username and password (ACL style).
#[inline]
pub fn auth_with_username(username: impl Into<Bytes>, password: impl Into<Bytes>) -> Cmd {
    Cmd::new("AUTH").arg(username).arg(password)
}

// Strings

/// Creates a GET command.
#[inline]
pub fn get(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("GET").arg(key)
}

/// Creates a SET command.
#[inline]
pub fn set(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("SET").arg(key).arg(value)
}

/// Creates a SETNX command.
#[inline]
pub fn setnx(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("SETNX").arg(key).arg(value)
}

/// Creates an APPEND command.
#[inline]
pub fn append(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("APPEND").arg(key).arg(value)
}

/// Creates a STRLEN command.
#[inline]
pub fn strlen(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("STRLEN").arg(key)
}

/// Creates an INCR command.
#[inline]
pub fn incr(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("INCR").arg(key)
}

/// Creates an INCRBY command.
#[inline]
pub fn incr_by(key: impl Into<Bytes>, amount: i64) -> Cmd {
    Cmd::new("INCRBY").arg(key).arg(amount.to_string())
}

/// Creates an INCRBYFLOAT command.
#[inline]
pub fn incr_by_float(key: impl Into<Bytes>, amount: f64) -> Cmd {
    Cmd::new("INCRBYFLOAT").arg(key).arg(amount.to_string())
}

/// Creates a DECR command.
#[inline]
pub fn decr(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("DECR").arg(key)
}

/// Creates a DECRBY command.
#[inline]
pub fn decr_by(key: impl Into<Bytes>, amount: i64) -> Cmd {
    Cmd::new("DECRBY").arg(key).arg(amount.to_string())
}

/// Creates an MGET command.
#[inline]
pub fn mget<I, T>(keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("MGET").args(keys)
}

/// Creates an MSET command from key/value pairs.
#[inline]
pub fn mset<I, K, V>(pairs: I) -> Cmd
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Bytes>,
    V: Into<Bytes>,
{
    pairs
        .into_iter()
        .fold(Cmd::new("MSET"), |cmd, (k, v)| cmd.arg(k).arg(v))
}

/// Creates an MSETNX command from key/value pairs.
#[inline]
pub fn msetnx<I, K, V>(pairs: I) -> Cmd
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Bytes>,
    V: Into<Bytes>,
{
    pairs
        .into_iter()
        .fold(Cmd::new("MSETNX"), |cmd, (k, v)| cmd.arg(k).arg(v))
}

// Lists

/// Creates an LPUSH command.
#[inline]
pub fn lpush<I, T>(key: impl Into<Bytes>, values: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("LPUSH").arg(key).args(values)
}

/// Creates an RPUSH command.
#[inline]
pub fn rpush<I, T>(key: impl Into<Bytes>, values: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("RPUSH").arg(key).args(values)
}

/// Creates an LPUSHX command.
#[inline]
pub fn lpushx(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("LPUSHX").arg(key).arg(value)
}

/// Creates an RPUSHX command.
#[inline]
pub fn rpushx(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("RPUSHX").arg(key).arg(value)
}

/// Creates an LINSERT command; inserts before or after the pivot.
#[inline]
pub fn linsert(
    key: impl Into<Bytes>,
    before: bool,
    pivot: impl Into<Bytes>,
    value: impl Into<Bytes>,
) -> Cmd {
    Cmd::new("LINSERT")
        .arg(key)
        .arg(if before { "BEFORE" } else { "AFTER" })
        .arg(pivot)
        .arg(value)
}

/// Creates an LLEN command.
#[inline]
pub fn llen(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("LLEN").arg(key)
}

/// Creates an LREM command.
#[inline]
pub fn lrem(key: impl Into<Bytes>, count: i64, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("LREM").arg(key).arg(count.to_string()).arg(value)
}

/// Creates an LSET command.
#[inline]
pub fn lset(key: impl Into<Bytes>, index: i64, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("LSET").arg(key).arg(index.to_string()).arg(value)
}

/// Creates an LTRIM command.
#[inline]
pub fn ltrim(key: impl Into<Bytes>, start: i64, stop: i64) -> Cmd {
    Cmd::new("LTRIM")
        .arg(key)
        .arg(start.to_string())
        .arg(stop.to_string())
}

/// Creates an LINDEX command.
#[inline]
pub fn lindex(key: impl Into<Bytes>, index: i64) -> Cmd {
    Cmd::new("LINDEX").arg(key).arg(index.to_string())
}

/// Creates an LPOP command.
#[inline]
pub fn lpop(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("LPOP").arg(key)
}

/// Creates an RPOP command.
#[inline]
pub fn rpop(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("RPOP").arg(key)
}

/// Creates an RPOPLPUSH command.
#[inline]
pub fn rpoplpush(source: impl Into<Bytes>, destination: impl Into<Bytes>) -> Cmd {
    Cmd::new("RPOPLPUSH").arg(source).arg(destination)
}

/// Creates an LRANGE command.
#[inline]
pub fn lrange(key: impl Into<Bytes>, start: i64, stop: i64) -> Cmd {
    Cmd::new("LRANGE")
        .arg(key)
        .arg(start.to_string())
        .arg(stop.to_string())
}

/// Creates a BLPOP command with a timeout in seconds.
#[inline]
pub fn blpop<I, T>(keys: I, timeout_secs: u64) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("BLPOP").args(keys).arg(timeout_secs.to_string())
}

/// Creates a BRPOP command with a timeout in seconds.
#[inline]
pub fn brpop<I, T>(keys: I, timeout_secs: u64) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("BRPOP").args(keys).arg(timeout_secs.to_string())
}

// Sets

/// Creates an SADD command.
#[inline]
pub fn sadd<I, T>(key: impl Into<Bytes>, members: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SADD").arg(key).args(members)
}

/// Creates an SREM command.
#[inline]
pub fn srem<I, T>(key: impl Into<Bytes>, members: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SREM").arg(key).args(members)
}

/// Creates an SCARD command.
#[inline]
pub fn scard(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("SCARD").arg(key)
}

/// Creates an SISMEMBER command.
#[inline]
pub fn sismember(key: impl Into<Bytes>, member: impl Into<Bytes>) -> Cmd {
    Cmd::new("SISMEMBER").arg(key).arg(member)
}

/// Creates an SMOVE command.
#[inline]
pub fn smove(
    source: impl Into<Bytes>,
    destination: impl Into<Bytes>,
    member: impl Into<Bytes>,
) -> Cmd {
    Cmd::new("SMOVE").arg(source).arg(destination).arg(member)
}

/// Creates an SPOP command.
#[inline]
pub fn spop(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("SPOP").arg(key)
}

/// Creates an SMEMBERS command.
#[inline]
pub fn smembers(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("SMEMBERS").arg(key)
}

/// Creates an SDIFF command.
#[inline]
pub fn sdiff<I, T>(keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SDIFF").args(keys)
}

/// Creates an SINTER command.
#[inline]
pub fn sinter<I, T>(keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SINTER").args(keys)
}

/// Creates an SUNION command.
#[inline]
pub fn sunion<I, T>(keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SUNION").args(keys)
}

/// Creates an SDIFFSTORE command.
#[inline]
pub fn sdiffstore<I, T>(destination: impl Into<Bytes>, keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SDIFFSTORE").arg(destination).args(keys)
}

/// Creates an SINTERSTORE command.
#[inline]
pub fn sinterstore<I, T>(destination: impl Into<Bytes>, keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SINTERSTORE").arg(destination).args(keys)
}

/// Creates an SUNIONSTORE command.
#[inline]
pub fn sunionstore<I, T>(destination: impl Into<Bytes>, keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SUNIONSTORE").arg(destination).args(keys)
}

/// Creates an SSCAN command.
#[inline]
pub fn sscan(key: impl Into<Bytes>, cursor: u64) -> Cmd {
    Cmd::new("SSCAN").arg(key).arg(cursor.to_string())
}

// Sorted sets

/// Creates a ZADD command for one member.
#[inline]
pub fn zadd(key: impl Into<Bytes>, score: f64, member: impl Into<Bytes>) -> Cmd {
    Cmd::new("ZADD").arg(key).arg(score.to_string()).arg(member)
}

/// Creates a ZINCRBY command.
#[inline]
pub fn zincrby(key: impl Into<Bytes>, delta: f64, member: impl Into<Bytes>) -> Cmd {
    Cmd::new("ZINCRBY")
        .arg(key)
        .arg(delta.to_string())
        .arg(member)
}

/// Creates a ZSCORE command.
#[inline]
pub fn zscore(key: impl Into<Bytes>, member: impl Into<Bytes>) -> Cmd {
    Cmd::new("ZSCORE").arg(key).arg(member)
}

/// Creates a ZCARD command.
#[inline]
pub fn zcard(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("ZCARD").arg(key)
}

/// Creates a ZCOUNT command.
#[inline]
pub fn zcount(key: impl Into<Bytes>, min: impl Into<Bytes>, max: impl Into<Bytes>) -> Cmd {
    Cmd::new("ZCOUNT").arg(key).arg(min).arg(max)
}

/// Creates a ZREM command.
#[inline]
pub fn zrem<I, T>(key: impl Into<Bytes>, members: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("ZREM").arg(key).args(members)
}

/// Creates a ZRANGE command.
#[inline]
pub fn zrange(key: impl Into<Bytes>, start: i64, stop: i64) -> Cmd {
    Cmd::new("ZRANGE")
        .arg(key)
        .arg(start.to_string())
        .arg(stop.to_string())
}

/// Creates a ZREVRANGE command.
#[inline]
pub fn zrevrange(key: impl Into<Bytes>, start: i64, stop: i64) -> Cmd {
    Cmd::new("ZREVRANGE")
        .arg(key)
        .arg(start.to_string())
        .arg(stop.to_string())
}

/// Creates a ZRANGEBYSCORE command.
#[inline]
pub fn zrangebyscore(key: impl Into<Bytes>, min: impl Into<Bytes>, max: impl Into<Bytes>) -> Cmd {
    Cmd::new("ZRANGEBYSCORE").arg(key).arg(min).arg(max)
}

/// Creates a ZLEXCOUNT command.
#[inline]
pub fn zlexcount(key: impl Into<Bytes>, min: impl Into<Bytes>, max: impl Into<Bytes>) -> Cmd {
    Cmd::new("ZLEXCOUNT").arg(key).arg(min).arg(max)
}

/// Creates a ZREMRANGEBYLEX command.
#[inline]
pub fn zremrangebylex(
    key: impl Into<Bytes>,
    min: impl Into<Bytes>,
    max: impl Into<Bytes>,
) -> Cmd {
    Cmd::new("ZREMRANGEBYLEX").arg(key).arg(min).arg(max)
}

/// Creates a ZREMRANGEBYRANK command.
#[inline]
pub fn zremrangebyrank(key: impl Into<Bytes>, start: i64, stop: i64) -> Cmd {
    Cmd::new("ZREMRANGEBYRANK")
        .arg(key)
        .arg(start.to_string())
        .arg(stop.to_string())
}

/// Creates a ZREMRANGEBYSCORE command.
#[inline]
pub fn zremrangebyscore(
    key: impl Into<Bytes>,
    min: impl Into<Bytes>,
    max: impl Into<Bytes>,
) -> Cmd {
    Cmd::new("ZREMRANGEBYSCORE").arg(key).arg(min).arg(max)
}

/// Creates a ZINTERSTORE command; the key count is part of the wire
/// format.
#[inline]
pub fn zinterstore<I, T>(destination: impl Into<Bytes>, keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    let keys: Vec<Bytes> = keys.into_iter().map(Into::into).collect();
    Cmd::new("ZINTERSTORE")
        .arg(destination)
        .arg(keys.len().to_string())
        .args(keys)
}

/// Creates a ZUNIONSTORE command; the key count is part of the wire
/// format.
#[inline]
pub fn zunionstore<I, T>(destination: impl Into<Bytes>, keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    let keys: Vec<Bytes> = keys.into_iter().map(Into::into).collect();
    Cmd::new("ZUNIONSTORE")
        .arg(destination)
        .arg(keys.len().to_string())
        .args(keys)
}

/// Creates a ZSCAN command.
#[inline]
pub fn zscan(key: impl Into<Bytes>, cursor: u64) -> Cmd {
    Cmd::new("ZSCAN").arg(key).arg(cursor.to_string())
}

// Hashes

/// Creates an HSET command.
#[inline]
pub fn hset(key: impl Into<Bytes>, field: impl Into<Bytes>, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("HSET").arg(key).arg(field).arg(value)
}

/// Creates an HSETNX command.
#[inline]
pub fn hsetnx(key: impl Into<Bytes>, field: impl Into<Bytes>, value: impl Into<Bytes>) -> Cmd {
    Cmd::new("HSETNX").arg(key).arg(field).arg(value)
}

/// Creates an HGET command.
#[inline]
pub fn hget(key: impl Into<Bytes>, field: impl Into<Bytes>) -> Cmd {
    Cmd::new("HGET").arg(key).arg(field)
}

/// Creates an HDEL command.
#[inline]
pub fn hdel<I, T>(key: impl Into<Bytes>, fields: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("HDEL").arg(key).args(fields)
}

/// Creates an HEXISTS command.
#[inline]
pub fn hexists(key: impl Into<Bytes>, field: impl Into<Bytes>) -> Cmd {
    Cmd::new("HEXISTS").arg(key).arg(field)
}

/// Creates an HINCRBY command.
#[inline]
pub fn hincrby(key: impl Into<Bytes>, field: impl Into<Bytes>, amount: i64) -> Cmd {
    Cmd::new("HINCRBY")
        .arg(key)
        .arg(field)
        .arg(amount.to_string())
}

/// Creates an HLEN command.
#[inline]
pub fn hlen(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("HLEN").arg(key)
}

/// Creates an HSTRLEN command.
#[inline]
pub fn hstrlen(key: impl Into<Bytes>, field: impl Into<Bytes>) -> Cmd {
    Cmd::new("HSTRLEN").arg(key).arg(field)
}

/// Creates an HGETALL command.
#[inline]
pub fn hgetall(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("HGETALL").arg(key)
}

/// Creates an HKEYS command.
#[inline]
pub fn hkeys(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("HKEYS").arg(key)
}

/// Creates an HVALS command.
#[inline]
pub fn hvals(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("HVALS").arg(key)
}

/// Creates an HMGET command.
#[inline]
pub fn hmget<I, T>(key: impl Into<Bytes>, fields: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("HMGET").arg(key).args(fields)
}

/// Creates an HMSET command from field/value pairs.
#[inline]
pub fn hmset<I, K, V>(key: impl Into<Bytes>, pairs: I) -> Cmd
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Bytes>,
    V: Into<Bytes>,
{
    pairs
        .into_iter()
        .fold(Cmd::new("HMSET").arg(key), |cmd, (f, v)| cmd.arg(f).arg(v))
}

/// Creates an HINCRBYFLOAT command.
#[inline]
pub fn hincrbyfloat(key: impl Into<Bytes>, field: impl Into<Bytes>, amount: f64) -> Cmd {
    Cmd::new("HINCRBYFLOAT")
        .arg(key)
        .arg(field)
        .arg(amount.to_string())
}

/// Creates an HSCAN command.
#[inline]
pub fn hscan(key: impl Into<Bytes>, cursor: u64) -> Cmd {
    Cmd::new("HSCAN").arg(key).arg(cursor.to_string())
}

// Keys

/// Creates a DEL command.
#[inline]
pub fn del<I, T>(keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("DEL").args(keys)
}

/// Creates an EXISTS command.
#[inline]
pub fn exists(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("EXISTS").arg(key)
}

/// Creates an EXPIRE command.
#[inline]
pub fn expire(key: impl Into<Bytes>, seconds: i64) -> Cmd {
    Cmd::new("EXPIRE").arg(key).arg(seconds.to_string())
}

/// Creates an EXPIREAT command with a Unix timestamp in seconds.
#[inline]
pub fn expireat(key: impl Into<Bytes>, timestamp: i64) -> Cmd {
    Cmd::new("EXPIREAT").arg(key).arg(timestamp.to_string())
}

/// Creates a PEXPIRE command with a timeout in milliseconds.
#[inline]
pub fn pexpire(key: impl Into<Bytes>, millis: i64) -> Cmd {
    Cmd::new("PEXPIRE").arg(key).arg(millis.to_string())
}

/// Creates a PEXPIREAT command with a Unix timestamp in milliseconds.
#[inline]
pub fn pexpireat(key: impl Into<Bytes>, timestamp_millis: i64) -> Cmd {
    Cmd::new("PEXPIREAT")
        .arg(key)
        .arg(timestamp_millis.to_string())
}

/// Creates a MOVE command targeting another logical database.
#[inline]
pub fn move_key(key: impl Into<Bytes>, db: u8) -> Cmd {
    Cmd::new("MOVE").arg(key).arg(db.to_string())
}

/// Creates a PERSIST command.
#[inline]
pub fn persist(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("PERSIST").arg(key)
}

/// Creates a TTL command.
#[inline]
pub fn ttl(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("TTL").arg(key)
}

/// Creates a PTTL command.
#[inline]
pub fn pttl(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("PTTL").arg(key)
}

/// Creates a TOUCH command.
#[inline]
pub fn touch<I, T>(keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("TOUCH").args(keys)
}

/// Creates a RENAME command.
#[inline]
pub fn rename(key: impl Into<Bytes>, new_key: impl Into<Bytes>) -> Cmd {
    Cmd::new("RENAME").arg(key).arg(new_key)
}

/// Creates a RENAMENX command.
#[inline]
pub fn renamenx(key: impl Into<Bytes>, new_key: impl Into<Bytes>) -> Cmd {
    Cmd::new("RENAMENX").arg(key).arg(new_key)
}

/// Creates a RANDOMKEY command.
#[inline]
pub fn randomkey() -> Cmd {
    Cmd::new("RANDOMKEY")
}

/// Creates a TYPE command.
#[inline]
pub fn key_type(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("TYPE").arg(key)
}

/// Creates a KEYS command.
#[inline]
pub fn keys(pattern: impl Into<Bytes>) -> Cmd {
    Cmd::new("KEYS").arg(pattern)
}

/// Creates a SORT command.
#[inline]
pub fn sort(key: impl Into<Bytes>) -> Cmd {
    Cmd::new("SORT").arg(key)
}

/// Creates a SCAN command.
#[inline]
pub fn scan(cursor: u64) -> Cmd {
    Cmd::new("SCAN").arg(cursor.to_string())
}

/// Creates a WAIT command.
#[inline]
pub fn wait(numreplicas: i64, timeout_millis: i64) -> Cmd {
    Cmd::new("WAIT")
        .arg(numreplicas.to_string())
        .arg(timeout_millis.to_string())
}

// Scripting

/// Creates an EVAL command; the key count is part of the wire format.
#[inline]
pub fn eval<I, T, J, U>(script: impl Into<Bytes>, keys: I, args: J) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
    J: IntoIterator<Item = U>,
    U: Into<Bytes>,
{
    let keys: Vec<Bytes> = keys.into_iter().map(Into::into).collect();
    Cmd::new("EVAL")
        .arg(script)
        .arg(keys.len().to_string())
        .args(keys)
        .args(args)
}

/// Creates an EVALSHA command; the key count is part of the wire format.
#[inline]
pub fn evalsha<I, T, J, U>(sha: impl Into<Bytes>, keys: I, args: J) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
    J: IntoIterator<Item = U>,
    U: Into<Bytes>,
{
    let keys: Vec<Bytes> = keys.into_iter().map(Into::into).collect();
    Cmd::new("EVALSHA")
        .arg(sha)
        .arg(keys.len().to_string())
        .args(keys)
        .args(args)
}

/// Creates a SCRIPT LOAD command.
#[inline]
pub fn script_load(script: impl Into<Bytes>) -> Cmd {
    Cmd::new("SCRIPT").arg("LOAD").arg(script)
}

/// Creates a SCRIPT EXISTS command.
#[inline]
pub fn script_exists<I, T>(shas: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("SCRIPT").arg("EXISTS").args(shas)
}

// Transactions

/// Creates a MULTI command.
#[inline]
pub fn multi() -> Cmd {
    Cmd::new("MULTI")
}

/// Creates an EXEC command.
#[inline]
pub fn exec() -> Cmd {
    Cmd::new("EXEC")
}

/// Creates a DISCARD command.
#[inline]
pub fn discard() -> Cmd {
    Cmd::new("DISCARD")
}

/// Creates a WATCH command.
#[inline]
pub fn watch<I, T>(keys: I) -> Cmd
where
    I: IntoIterator<Item = T>,
    T: Into<Bytes>,
{
    Cmd::new("WATCH").args(keys)
}

/// Creates an UNWATCH command.
#[inline]
pub fn unwatch() -> Cmd {
    Cmd::new("UNWATCH")
}
