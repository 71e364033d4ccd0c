//! Newline framing for the compute wire protocol
//!
//! A request is the decimal digits of a positive integer followed by a
//! single `\n`. A response is a byte sequence terminated by a `\n`, by the
//! peer closing the connection, or by a size cap.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;

/// Upper bound on an accumulated response
pub const MAX_RESPONSE_BYTES: usize = 4096;

/// Bytes requested per read call
pub const READ_CHUNK_SIZE: usize = 256;

/// Write a request as its decimal form with a terminating newline
pub async fn write_request<W: AsyncWrite + Unpin>(writer: &mut W, n: u64) -> Result<()> {
    let line = format!("{n}\n");
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Read a single newline-terminated response into an accumulator.
///
/// Requests at most [`READ_CHUNK_SIZE`] bytes per read, never asking past
/// the [`MAX_RESPONSE_BYTES`] cap, and stops as soon as a newline appears
/// in the accumulator, the peer closes the connection (zero-length read),
/// or the cap is reached. No reads happen after a stop condition; bytes
/// that arrived after the newline within the same chunk stay in the
/// accumulator.
pub async fn read_line_bounded<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    while data.len() < MAX_RESPONSE_BYTES {
        let want = READ_CHUNK_SIZE.min(MAX_RESPONSE_BYTES - data.len());
        let n = reader.read(&mut chunk[..want]).await?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);
        if data.contains(&b'\n') {
            break;
        }
    }

    Ok(data)
}

/// Decode an accumulated response: lossy UTF-8, then whitespace trim.
///
/// Invalid byte sequences become U+FFFD instead of failing; the trim
/// removes the protocol-level trailing newline along with any other
/// leading or trailing whitespace.
pub fn decode_response(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}
