//! Request/response exchange with a registry server.
//!
//! The referral follower only sees the `WhoisTransport` trait. `TcpTransport`
//! is the production implementation; tests substitute scripted transports.

mod tcp;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::directory::ServerAddress;
use crate::error_handling::TransportError;

pub use tcp::TcpTransport;

/// One exchange: send `query_text` to `server`, return the full response text.
///
/// Implementations must give up once `timeout` has elapsed and report it as
/// `TransportError::Timeout`. Any retry policy is internal to the implementation.
#[async_trait]
pub trait WhoisTransport: Send + Sync {
    async fn query(
        &self,
        server: &ServerAddress,
        query_text: &str,
        timeout: Duration,
    ) -> Result<String, TransportError>;
}

#[async_trait]
impl<T: WhoisTransport + ?Sized> WhoisTransport for Arc<T> {
    async fn query(
        &self,
        server: &ServerAddress,
        query_text: &str,
        timeout: Duration,
    ) -> Result<String, TransportError> {
        (**self).query(server, query_text, timeout).await
    }
}
