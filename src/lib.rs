//! whois_rdap library: WHOIS resolution and RDAP-shaped normalization
//!
//! This library resolves registration data for a domain name, an IPv4/IPv6
//! address or an autonomous-system number over the WHOIS protocol (RFC 3912),
//! follows registry referrals to the authoritative server, and normalizes the
//! free-text answer into an RDAP-shaped record.
//!
//! # Example
//!
//! ```no_run
//! use whois_rdap::{lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = lookup("example.com", &Config::default()).await?;
//! println!("{}", result.envelope.to_json_pretty()?);
//! if result.truncated {
//!     eprintln!("referral chain was cut off after {} hops", result.hops);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod client;
pub mod config;
pub mod directory;
pub mod error_handling;
pub mod initialization;
pub mod projection;
pub mod query;
pub mod referral;
pub mod transport;
mod utils;
pub mod whois;

// Re-export public API
pub use client::{LookupResult, RdapClient};
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use directory::ServerAddress;
pub use error_handling::{LookupError, TransportError};
pub use projection::RdapEnvelope;
pub use query::{classify, Query, QueryKind};
pub use referral::{RawResult, Termination};
pub use transport::{TcpTransport, WhoisTransport};
pub use whois::NormalizedRecord;

/// Looks up `input` over TCP with `config`.
///
/// Builds a one-off `RdapClient`; reuse a client for many lookups.
///
/// # Errors
///
/// Returns a `LookupError` scoped to this lookup: unrecognized input, no
/// known registry, a failed hop, a truncated chain with `fail_on_truncation`
/// set, or cancellation.
pub async fn lookup(input: &str, config: &Config) -> Result<LookupResult, LookupError> {
    RdapClient::new(config.clone()).query(input).await
}
