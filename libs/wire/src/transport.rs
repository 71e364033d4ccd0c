//! TCP transport with deadline-bounded connection retry
//!
//! Connection establishment loops until a deadline: the target service may
//! still be starting up in a co-located deployment, so failed attempts are
//! recorded and retried after a fixed delay. Once a connection exists the
//! retry loop is left for good; anything that fails afterwards surfaces as
//! a transport error.

use std::io;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::{sleep, timeout, Instant};

use crate::error::{Error, Result};
use crate::frame::{decode_response, read_line_bounded, write_request};

/// Default per-attempt connect timeout
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default window for connection establishment as a whole
pub const DEFAULT_OVERALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Default delay between failed attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Builder for a retrying TCP connection
///
/// `host` and `port` are assumed well-formed (non-empty host, nonzero
/// port); validation belongs to the configuration boundary, not here.
pub struct Connector {
    host: String,
    port: u16,
    attempt_timeout: Duration,
    overall_timeout: Duration,
    retry_delay: Duration,
}

impl Connector {
    /// Create a connector with the default timing parameters
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            overall_timeout: DEFAULT_OVERALL_TIMEOUT,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Set the timeout for a single connect attempt
    pub fn attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Set the total window in which attempts may be made
    pub fn overall_timeout(mut self, timeout: Duration) -> Self {
        self.overall_timeout = timeout;
        self
    }

    /// Set the delay between failed attempts
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Connect, retrying failed attempts until the deadline elapses.
    ///
    /// Each attempt is bounded by the attempt timeout. A failed attempt
    /// (refusal, resolution failure, timeout) records its error and the
    /// loop sleeps for the retry delay before trying again. When the
    /// deadline passes without a connection, the last recorded error is
    /// returned inside [`Error::Exhausted`].
    pub async fn connect(self) -> Result<TcpTransport> {
        let deadline = Instant::now() + self.overall_timeout;
        let mut last_err: Option<io::Error> = None;

        while Instant::now() < deadline {
            let attempt = TcpStream::connect((self.host.as_str(), self.port));
            match timeout(self.attempt_timeout, attempt).await {
                Ok(Ok(stream)) => {
                    // I/O on the established connection inherits the
                    // attempt timeout, like a socket timeout set at
                    // connect time.
                    return Ok(TcpTransport::from_stream(stream, self.attempt_timeout));
                }
                Ok(Err(e)) => last_err = Some(e),
                Err(_) => {
                    last_err = Some(io::Error::new(
                        io::ErrorKind::TimedOut,
                        "connect attempt timed out",
                    ));
                }
            }
            sleep(self.retry_delay).await;
        }

        Err(Error::Exhausted {
            host: self.host,
            port: self.port,
            source: last_err.unwrap_or_else(|| {
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    "deadline elapsed before any attempt",
                )
            }),
        })
    }
}

/// A connected stream carrying one request/response exchange
pub struct TcpTransport {
    stream: TcpStream,
    io_timeout: Duration,
}

impl TcpTransport {
    /// Wrap an existing stream with an explicit I/O timeout
    pub fn from_stream(stream: TcpStream, io_timeout: Duration) -> Self {
        Self { stream, io_timeout }
    }

    /// Send one request and read one newline-terminated response.
    ///
    /// The request is written in full before the first read; exactly one
    /// request/response pair travels over this connection. Failures here
    /// are terminal: the connection was already established, so they are
    /// reported directly instead of re-entering the retry loop.
    pub async fn exchange(&mut self, n: u64) -> Result<String> {
        self.send(n).await?;
        self.receive().await
    }

    async fn send(&mut self, n: u64) -> Result<()> {
        timeout(self.io_timeout, write_request(&mut self.stream, n))
            .await
            .map_err(|_| {
                Error::Transport(io::Error::new(io::ErrorKind::TimedOut, "send timed out"))
            })?
    }

    async fn receive(&mut self) -> Result<String> {
        let bytes = timeout(self.io_timeout, read_line_bounded(&mut self.stream))
            .await
            .map_err(|_| {
                Error::Transport(io::Error::new(io::ErrorKind::TimedOut, "receive timed out"))
            })??;
        Ok(decode_response(&bytes))
    }
}
