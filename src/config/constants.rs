//! Configuration constants.
//!
//! This module defines the protocol constants and operational defaults used
//! throughout the resolver: ports, timeouts, size limits and retry tuning.

use std::time::Duration;

// Registry protocol
/// Well-known TCP port of the WHOIS protocol (RFC 3912)
pub const WHOIS_PORT: u16 = 43;
/// Line terminator appended to every query sent to a registry
pub const QUERY_TERMINATOR: &str = "\r\n";

// Network operation timeouts
/// Per-hop timeout in seconds
/// Covers connect, write and read of a single registry exchange
pub const PER_HOP_TIMEOUT_SECS: u64 = 10;
/// Wall-clock budget in seconds across all hops of one resolution
pub const OVERALL_TIMEOUT_SECS: u64 = 30;
/// Per-hop timeout as a `Duration`
pub const PER_HOP_TIMEOUT: Duration = Duration::from_secs(PER_HOP_TIMEOUT_SECS);

// Referral handling
/// Maximum number of referrals followed for a single resolution
/// Thin registries (e.g. .com) need one; ARIN to RIPE to a national registry needs two
pub const MAX_HOPS: usize = 4;

// Response size limits
/// Maximum response size in bytes (1MB)
/// Responses longer than this are truncated to prevent memory exhaustion
pub const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

// Parsing limits
/// Maximum length of a field label in characters
/// Longer "labels" are sentences of legal prose that happen to contain a colon
pub const MAX_LABEL_LENGTH: usize = 64;

// Connect retry strategy (transport-internal only)
/// Number of connect retries after the first attempt
pub const CONNECT_RETRIES: usize = 1;
/// Initial delay in milliseconds before the first connect retry
pub const CONNECT_RETRY_INITIAL_DELAY_MS: u64 = 200;
/// Maximum delay between connect retries in milliseconds
pub const CONNECT_RETRY_MAX_DELAY_MS: u64 = 2000;

// Envelope metadata
/// RDAP conformance marker attached to every envelope
pub const RDAP_CONFORMANCE: &str = "rdap_level_0";
/// Title of the standard notice
pub const NOTICE_TITLE: &str = "Terms of Service";
/// Type of the standard notice
pub const NOTICE_TYPE: &str = "result set truncated due to authorization";
/// Description of the standard notice
pub const NOTICE_DESCRIPTION: &str = "This response has been truncated due to authorization.";

// CLI
/// Lookups the binary runs at the same time
pub const MAX_CONCURRENT_LOOKUPS: usize = 8;
