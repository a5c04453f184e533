//! Referral chain resolution.

use std::time::{Duration, Instant};

use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use super::hint::find_referral;
use super::types::{RawResult, ReferralChain, Termination};
use crate::config::Config;
use crate::directory::{query_text, resolve_initial_server, ServerAddress};
use crate::error_handling::{LookupError, TransportError};
use crate::query::Query;
use crate::transport::WhoisTransport;
use crate::utils::log_preview;

/// Bounds on one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowLimits {
    /// Deadline for a single exchange
    pub per_hop_timeout: Duration,
    /// Budget across all exchanges of one resolution
    pub overall_timeout: Option<Duration>,
    /// Maximum number of referrals followed after the first server
    pub max_hops: usize,
}

impl From<&Config> for FollowLimits {
    fn from(config: &Config) -> Self {
        FollowLimits {
            per_hop_timeout: config.per_hop_timeout,
            overall_timeout: config.overall_timeout,
            max_hops: config.max_hops,
        }
    }
}

impl Default for FollowLimits {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

enum State {
    /// About to query `server`; `chain` holds the hops so far.
    Querying {
        server: ServerAddress,
        chain: Option<ReferralChain>,
    },
    /// Resolution finished.
    Done(ReferralChain, Termination),
}

/// Resolves `query` starting at its directory server and following referrals.
///
/// Stops at the first response without a usable referral, at a referral back
/// into the chain, or once `limits.max_hops` referrals have been followed. A
/// limit of zero queries only the directory server.
///
/// # Errors
///
/// - `LookupError::UnclassifiedInput` / `LookupError::NoServer` before any
///   network activity
/// - `LookupError::Transport` for the first failed hop; nothing is retried here
/// - `LookupError::Cancelled` when `cancel` fires; the partial chain is dropped
pub async fn resolve<T>(
    transport: &T,
    query: &Query,
    limits: &FollowLimits,
    cancel: &CancellationToken,
) -> Result<RawResult, LookupError>
where
    T: WhoisTransport + ?Sized,
{
    let max_hops = limits.max_hops;
    let started = Instant::now();
    let mut state = State::Querying {
        server: resolve_initial_server(query)?,
        chain: None,
    };

    loop {
        state = match state {
            State::Querying { server, chain } => {
                let hop = chain.as_ref().map_or(0, ReferralChain::len) + 1;
                let timeout = hop_timeout(limits, started).ok_or_else(|| {
                    LookupError::Transport {
                        hop,
                        server: server.clone(),
                        source: TransportError::Timeout {
                            server: server.clone(),
                            after: limits.overall_timeout.unwrap_or_default(),
                        },
                    }
                })?;

                debug!("Hop {hop}: querying {server} for {query}");
                let text = query_text(&server, query);
                let response = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        debug!("Lookup for {query} cancelled at hop {hop}");
                        return Err(LookupError::Cancelled);
                    }
                    result = transport.query(&server, &text, timeout) => result,
                };
                let response = response.map_err(|source| {
                    warn!("Hop {hop} to {server} failed for {query}: {source}");
                    LookupError::Transport {
                        hop,
                        server: server.clone(),
                        source,
                    }
                })?;
                debug!(
                    "Hop {hop}: {} bytes from {server}: {}",
                    response.len(),
                    log_preview(&response)
                );

                let chain = match chain {
                    None => ReferralChain::start(server, response),
                    Some(mut chain) => {
                        chain.push(server, response);
                        chain
                    }
                };
                next_state(chain, query, max_hops)
            }
            State::Done(chain, termination) => {
                return Ok(RawResult::new(chain, termination));
            }
        };
    }
}

/// Decides where to go after the latest hop.
fn next_state(chain: ReferralChain, query: &Query, max_hops: usize) -> State {
    let last = chain.last();
    match find_referral(&last.response, query.kind()) {
        None => State::Done(chain, Termination::Terminal),
        Some(next) if chain.contains(&next) => {
            debug!(
                "Referral from {} to {next} points back into the chain, stopping",
                last.server
            );
            State::Done(chain, Termination::Cycle)
        }
        Some(next) if chain.referrals_followed() >= max_hops => {
            warn!(
                "Not following referral from {} to {next} for {query}: hop limit {max_hops} reached",
                last.server
            );
            State::Done(chain, Termination::DepthExceeded)
        }
        Some(next) => {
            debug!("Following referral from {} to {next}", last.server);
            State::Querying {
                server: next,
                chain: Some(chain),
            }
        }
    }
}

/// Deadline for the next hop, or `None` once the overall budget is spent.
fn hop_timeout(limits: &FollowLimits, started: Instant) -> Option<Duration> {
    match limits.overall_timeout {
        None => Some(limits.per_hop_timeout),
        Some(budget) => {
            let remaining = budget.checked_sub(started.elapsed())?;
            if remaining.is_zero() {
                return None;
            }
            Some(remaining.min(limits.per_hop_timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_from_config() {
        let config = Config {
            max_hops: 7,
            overall_timeout: None,
            ..Default::default()
        };
        let limits = FollowLimits::from(&config);
        assert_eq!(limits.max_hops, 7);
        assert_eq!(limits.overall_timeout, None);
        assert_eq!(limits.per_hop_timeout, config.per_hop_timeout);
    }

    #[test]
    fn test_hop_timeout_without_budget() {
        let limits = FollowLimits {
            per_hop_timeout: Duration::from_secs(5),
            overall_timeout: None,
            max_hops: 4,
        };
        assert_eq!(
            hop_timeout(&limits, Instant::now()),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_hop_timeout_clamped_to_remaining_budget() {
        let limits = FollowLimits {
            per_hop_timeout: Duration::from_secs(60),
            overall_timeout: Some(Duration::from_secs(30)),
            max_hops: 4,
        };
        let timeout = hop_timeout(&limits, Instant::now()).unwrap();
        assert!(timeout <= Duration::from_secs(30));
        assert!(timeout > Duration::from_secs(29));
    }

    #[test]
    fn test_hop_timeout_exhausted_budget() {
        let limits = FollowLimits {
            per_hop_timeout: Duration::from_secs(5),
            overall_timeout: Some(Duration::ZERO),
            max_hops: 4,
        };
        assert_eq!(hop_timeout(&limits, Instant::now()), None);
    }

    #[test]
    fn test_next_state_without_referral_is_terminal() {
        let query = Query::parse("egger.ru").unwrap();
        let chain = ReferralChain::start(
            ServerAddress::well_known("whois.tcinet.ru"),
            "domain: EGGER.RU\n".into(),
        );
        assert!(matches!(
            next_state(chain, &query, 4),
            State::Done(_, Termination::Terminal)
        ));
    }

    #[test]
    fn test_next_state_self_referral_is_cycle() {
        let query = Query::parse("example.com").unwrap();
        let chain = ReferralChain::start(
            ServerAddress::well_known("whois.verisign-grs.com"),
            "Registrar WHOIS Server: WHOIS.VERISIGN-GRS.COM\n".into(),
        );
        assert!(matches!(
            next_state(chain, &query, 4),
            State::Done(_, Termination::Cycle)
        ));
    }

    #[test]
    fn test_next_state_zero_limit_is_depth_exceeded() {
        let query = Query::parse("example.com").unwrap();
        let chain = ReferralChain::start(
            ServerAddress::well_known("whois.verisign-grs.com"),
            "Registrar WHOIS Server: whois.markmonitor.com\n".into(),
        );
        assert!(matches!(
            next_state(chain, &query, 0),
            State::Done(_, Termination::DepthExceeded)
        ));
    }

    #[test]
    fn test_next_state_limit_counts_referrals_not_servers() {
        let query = Query::parse("example.com").unwrap();
        let chain = ReferralChain::start(
            ServerAddress::well_known("whois.verisign-grs.com"),
            "Registrar WHOIS Server: whois.markmonitor.com\n".into(),
        );
        // One server queried, no referral followed yet: a limit of one still follows
        let mut chain = match next_state(chain, &query, 1) {
            State::Querying { server, chain } => {
                assert_eq!(server.host(), "whois.markmonitor.com");
                chain.unwrap()
            }
            State::Done(_, termination) => panic!("stopped early: {termination:?}"),
        };
        chain.push(
            ServerAddress::well_known("whois.markmonitor.com"),
            "whois server: whois.third.example\n".into(),
        );
        assert!(matches!(
            next_state(chain, &query, 1),
            State::Done(_, Termination::DepthExceeded)
        ));
    }

    #[test]
    fn test_next_state_follows_new_server() {
        let query = Query::parse("example.com").unwrap();
        let chain = ReferralChain::start(
            ServerAddress::well_known("whois.verisign-grs.com"),
            "Registrar WHOIS Server: whois.markmonitor.com\n".into(),
        );
        match next_state(chain, &query, 4) {
            State::Querying { server, chain } => {
                assert_eq!(server.host(), "whois.markmonitor.com");
                assert_eq!(chain.map(|c| c.len()), Some(1));
            }
            State::Done(_, termination) => panic!("stopped early: {termination:?}"),
        }
    }
}
