//! Error type definitions.
//!
//! This module defines all error and info types used throughout the resolver.

use std::time::Duration;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::directory::ServerAddress;
use crate::query::QueryKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure of a single request/response exchange with a registry server.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The TCP connection could not be established.
    #[error("failed to connect to {server}: {source}")]
    Connect {
        /// Server that refused or could not be reached
        server: ServerAddress,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// The exchange did not complete before its deadline.
    #[error("timed out after {}ms talking to {server}", .after.as_millis())]
    Timeout {
        /// Server that did not answer in time
        server: ServerAddress,
        /// Deadline that expired
        after: Duration,
    },

    /// The server closed the connection without sending anything.
    #[error("{server} closed the connection without a response")]
    ShortRead {
        /// Server that sent an empty response
        server: ServerAddress,
    },

    /// Reading or writing the established connection failed.
    #[error("I/O error talking to {server}: {source}")]
    Io {
        /// Server the connection was open to
        server: ServerAddress,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },
}

impl TransportError {
    /// Server the failed exchange was addressed to.
    pub fn server(&self) -> &ServerAddress {
        match self {
            TransportError::Connect { server, .. }
            | TransportError::Timeout { server, .. }
            | TransportError::ShortRead { server }
            | TransportError::Io { server, .. } => server,
        }
    }
}

/// A referral value that does not name a WHOIS server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// Nothing left after trimming.
    #[error("empty server address")]
    Empty,

    /// A URL scheme other than `whois://` (e.g. `rwhois://`, `https://`).
    #[error("unsupported scheme {0:?}")]
    UnsupportedScheme(String),

    /// The host part is not a valid hostname.
    #[error("invalid host {0:?}")]
    InvalidHost(String),

    /// The port part is not a number in 1..=65535.
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}

/// Failure of one lookup. Scoped to that lookup only.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The input is not a domain, IP address or AS number.
    #[error("unrecognized query {0:?}: not a domain, IP address or AS number")]
    UnclassifiedInput(String),

    /// The directory has no first-hop server for the identifier.
    #[error("no registry server known for {kind} query {identifier:?}")]
    NoServer {
        /// Kind the input was classified as
        kind: QueryKind,
        /// Identifier that found no directory entry
        identifier: String,
    },

    /// A hop failed; the whole resolution is aborted.
    #[error("hop {hop} to {server} failed: {source}")]
    Transport {
        /// 1-based position of the failed hop in the referral chain
        hop: usize,
        /// Server that was being queried
        server: ServerAddress,
        /// Underlying transport failure
        #[source]
        source: TransportError,
    },

    /// The referral chain was cut off by the hop limit and the caller asked
    /// for that to be an error.
    #[error("referral chain exceeded {max_hops} hops")]
    TooManyHops {
        /// Configured hop limit
        max_hops: usize,
    },

    /// The resolution was cancelled by the caller.
    #[error("lookup cancelled")]
    Cancelled,
}

impl LookupError {
    /// True for failures detected before any network activity.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            LookupError::UnclassifiedInput(_) | LookupError::NoServer { .. }
        )
    }
}

/// Categories of lookup failures, used for end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    UnclassifiedInput,
    NoServer,
    TransportConnect,
    TransportTimeout,
    TransportShortRead,
    TransportIo,
    TooManyHops,
    Cancelled,
}

/// Notable events that are not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// At least one referral was followed
    ReferralFollowed,
    /// A referral pointed back into the chain
    ReferralCycle,
    /// The chain was cut off by the hop limit
    ChainTruncated,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::UnclassifiedInput => "Unrecognized input",
            ErrorType::NoServer => "No registry server",
            ErrorType::TransportConnect => "Connect error",
            ErrorType::TransportTimeout => "Timeout",
            ErrorType::TransportShortRead => "Empty response",
            ErrorType::TransportIo => "I/O error",
            ErrorType::TooManyHops => "Too many hops",
            ErrorType::Cancelled => "Cancelled",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ReferralFollowed => "Referral followed",
            InfoType::ReferralCycle => "Referral cycle",
            InfoType::ChainTruncated => "Referral chain truncated",
        }
    }
}
