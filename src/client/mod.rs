//! Lookup client.
//!
//! `RdapClient` runs the whole pipeline for one input string:
//! classify, resolve through referrals, normalize, project.

use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error_handling::LookupError;
use crate::projection::{project, RdapEnvelope};
use crate::query::Query;
use crate::referral::{resolve, FollowLimits, Termination};
use crate::transport::{TcpTransport, WhoisTransport};
use crate::whois::normalize;

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct LookupResult {
    /// The RDAP-shaped record
    pub envelope: RdapEnvelope,
    /// True when the hop limit cut the referral chain short
    pub truncated: bool,
    /// Number of registry servers queried
    pub hops: usize,
    /// Why referral following stopped
    pub termination: Termination,
}

/// Resolves identifiers to RDAP envelopes over a `WhoisTransport`.
///
/// Holds no per-lookup state, so one client can serve many concurrent lookups.
pub struct RdapClient<T: WhoisTransport = TcpTransport> {
    transport: T,
    config: Config,
}

impl RdapClient<TcpTransport> {
    /// Client over TCP, configured from `config`.
    pub fn new(config: Config) -> Self {
        let transport = TcpTransport::from_config(&config);
        Self::with_transport(transport, config)
    }
}

impl<T: WhoisTransport> RdapClient<T> {
    pub fn with_transport(transport: T, config: Config) -> Self {
        RdapClient { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Looks up `input`.
    ///
    /// # Errors
    ///
    /// See `query_with_cancel`.
    pub async fn query(&self, input: &str) -> Result<LookupResult, LookupError> {
        self.query_with_cancel(input, &CancellationToken::new())
            .await
    }

    /// Looks up `input`, giving up as soon as `cancel` fires.
    ///
    /// # Errors
    ///
    /// - `LookupError::UnclassifiedInput` or `LookupError::NoServer` without
    ///   touching the network
    /// - `LookupError::Transport` if any hop fails
    /// - `LookupError::TooManyHops` if the chain was truncated and
    ///   `fail_on_truncation` is set
    /// - `LookupError::Cancelled`
    pub async fn query_with_cancel(
        &self,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<LookupResult, LookupError> {
        let query = Query::parse(input)?;
        debug!("Classified {query:?} as {}", query.kind());

        let limits = FollowLimits::from(&self.config);
        let raw = resolve(&self.transport, &query, &limits, cancel).await?;

        let truncated = raw.truncated();
        if truncated {
            warn!(
                "Referral chain for {query} truncated after {} hops at {}",
                raw.hop_count(),
                raw.terminal_server()
            );
            if self.config.fail_on_truncation {
                return Err(LookupError::TooManyHops {
                    max_hops: limits.max_hops,
                });
            }
        }

        let record = normalize(&raw, query.kind());
        let envelope = project(record, &raw, &query);
        debug!(
            "Lookup for {query} finished at {} after {} hops ({})",
            raw.terminal_server(),
            raw.hop_count(),
            raw.termination().as_str()
        );

        Ok(LookupResult {
            envelope,
            truncated,
            hops: raw.hop_count(),
            termination: raw.termination(),
        })
    }
}
