use crate::error::Result;
use crate::transport::Connector;

/// Perform a single compute request against a remote server.
///
/// Connects with retry, sends the request, reads the response, and drops
/// the connection. The retry window covers connection establishment only;
/// once connected, the exchange result (success or error) is returned
/// directly. The connection is released on every exit path.
pub async fn request_steps(connector: Connector, n: u64) -> Result<String> {
    let mut transport = connector.connect().await?;
    transport.exchange(n).await
}
