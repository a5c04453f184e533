//! Plain TCP transport on the registry protocol.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::WhoisTransport;
use crate::config::{Config, CONNECT_RETRIES, MAX_RESPONSE_BYTES, QUERY_TERMINATOR};
use crate::directory::ServerAddress;
use crate::error_handling::{get_connect_retry_strategy, TransportError};

/// Opens one connection per exchange, writes the query line and reads until
/// the server closes the connection.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    connect_retries: usize,
    max_response_bytes: usize,
}

impl TcpTransport {
    pub fn new(connect_retries: usize, max_response_bytes: usize) -> Self {
        TcpTransport {
            connect_retries,
            max_response_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.connect_retries, config.max_response_bytes)
    }

    async fn connect(&self, server: &ServerAddress) -> Result<TcpStream, TransportError> {
        let host = server.host();
        let port = server.port();
        tokio_retry::Retry::spawn(get_connect_retry_strategy(self.connect_retries), || {
            debug!("Connecting to {server}");
            TcpStream::connect((host, port))
        })
        .await
        .map_err(|source| TransportError::Connect {
            server: server.clone(),
            source,
        })
    }

    async fn exchange(
        &self,
        server: &ServerAddress,
        query_text: &str,
    ) -> Result<String, TransportError> {
        let mut stream = self.connect(server).await?;
        let io_error = |source: std::io::Error| TransportError::Io {
            server: server.clone(),
            source,
        };

        let mut request = String::with_capacity(query_text.len() + QUERY_TERMINATOR.len());
        request.push_str(query_text);
        request.push_str(QUERY_TERMINATOR);
        stream
            .write_all(request.as_bytes())
            .await
            .map_err(io_error)?;
        stream.flush().await.map_err(io_error)?;

        // One byte past the cap tells a full response from a cut one
        let limit = self.max_response_bytes as u64 + 1;
        let mut response = Vec::new();
        (&mut stream)
            .take(limit)
            .read_to_end(&mut response)
            .await
            .map_err(io_error)?;

        if response.is_empty() {
            return Err(TransportError::ShortRead {
                server: server.clone(),
            });
        }
        if response.len() > self.max_response_bytes {
            warn!(
                "Response from {server} exceeds {} bytes, truncating",
                self.max_response_bytes
            );
            response.truncate(self.max_response_bytes);
        }

        debug!("Received {} bytes from {server}", response.len());
        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new(CONNECT_RETRIES, MAX_RESPONSE_BYTES)
    }
}

#[async_trait]
impl WhoisTransport for TcpTransport {
    async fn query(
        &self,
        server: &ServerAddress,
        query_text: &str,
        timeout: Duration,
    ) -> Result<String, TransportError> {
        tokio::time::timeout(timeout, self.exchange(server, query_text))
            .await
            .map_err(|_| TransportError::Timeout {
                server: server.clone(),
                after: timeout,
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_constants() {
        let transport = TcpTransport::default();
        assert_eq!(transport.connect_retries, CONNECT_RETRIES);
        assert_eq!(transport.max_response_bytes, MAX_RESPONSE_BYTES);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            connect_retries: 3,
            max_response_bytes: 4096,
            ..Default::default()
        };
        let transport = TcpTransport::from_config(&config);
        assert_eq!(transport.connect_retries, 3);
        assert_eq!(transport.max_response_bytes, 4096);
    }

    #[tokio::test]
    async fn test_unreachable_port_is_connect_error() {
        // Bind then drop to get a port with nothing listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = TcpTransport::new(0, MAX_RESPONSE_BYTES);
        let server = ServerAddress::new("127.0.0.1", port);
        let err = transport
            .query(&server, "example.com", Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(
            matches!(err, TransportError::Connect { .. }),
            "unexpected error: {err:?}"
        );
        assert_eq!(err.server(), &server);
    }
}
