//! Query classification.
//!
//! Decides once, up front, what kind of identifier the caller handed us:
//! - `classify()` - pure, total mapping from any string to a `QueryKind`
//! - `Query` - the trimmed input together with its kind, plus the normalized
//!   forms later stages need (bare AS number, `AS`-prefixed autnum, TLD, IP)
//!
//! AS numbers and IP literals are checked before the domain rule, so `8.8.8.8`
//! is never a domain and `15169` is never anything but an AS number.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use strum_macros::EnumIter;

use crate::error_handling::LookupError;
use crate::utils::compile_regex_unsafe;

/// `AS15169`, `as15169` or bare `15169`.
static ASN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"^(?i:as)?([0-9]{1,10})$", "ASN_PATTERN"));

/// What an input string identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum QueryKind {
    /// A domain name (anything dotted that is not an IP literal)
    Domain,
    /// A dotted-quad IPv4 address
    Ipv4,
    /// A colon-separated IPv6 address
    Ipv6,
    /// An autonomous-system number
    Asn,
    /// None of the above
    Unknown,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Domain => "domain",
            QueryKind::Ipv4 => "IPv4",
            QueryKind::Ipv6 => "IPv6",
            QueryKind::Asn => "ASN",
            QueryKind::Unknown => "unknown",
        }
    }

    /// True for the two IP kinds.
    pub fn is_ip(&self) -> bool {
        matches!(self, QueryKind::Ipv4 | QueryKind::Ipv6)
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an input string. Pure and total: never fails, never panics.
///
/// Leading and trailing whitespace is ignored.
pub fn classify(input: &str) -> QueryKind {
    let input = input.trim();
    if input.is_empty() {
        return QueryKind::Unknown;
    }
    if parse_asn(input).is_some() {
        return QueryKind::Asn;
    }
    if parse_ipv4(input).is_some() {
        return QueryKind::Ipv4;
    }
    if input.parse::<Ipv6Addr>().is_ok() {
        return QueryKind::Ipv6;
    }
    if is_domain_shaped(input) {
        return QueryKind::Domain;
    }
    QueryKind::Unknown
}

/// Extracts the AS number from `AS<digits>` or `<digits>`; must fit in 32 bits.
fn parse_asn(input: &str) -> Option<u32> {
    let caps = ASN_PATTERN.captures(input)?;
    caps.get(1)?.as_str().parse::<u32>().ok()
}

/// Four decimal groups of one to three digits, each 0-255.
///
/// Zero-padded groups (`08.8.8.8`) are read as decimal, never octal.
fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut groups = input.split('.');
    for octet in &mut octets {
        let group = groups.next()?;
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = group.parse().ok()?;
    }
    if groups.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

/// At least one label separator, at least one non-empty label, and nothing that
/// could not travel on a single protocol line.
fn is_domain_shaped(input: &str) -> bool {
    input.contains('.')
        && !input.trim_matches('.').is_empty()
        && !input.contains("..")
        && !input
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == ':' || c == '/')
}

/// A classified identifier. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    input: String,
    kind: QueryKind,
}

impl Query {
    /// Classifies `input` and refuses anything unrecognized.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnclassifiedInput` when the input is not a domain,
    /// IP address or AS number. No network activity happens in that case.
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let trimmed = input.trim();
        match classify(trimmed) {
            QueryKind::Unknown => Err(LookupError::UnclassifiedInput(input.to_string())),
            // Registries expect the canonical dotted quad
            QueryKind::Ipv4 => Ok(Query {
                input: parse_ipv4(trimmed)
                    .map_or_else(|| trimmed.to_string(), |addr| addr.to_string()),
                kind: QueryKind::Ipv4,
            }),
            kind => Ok(Query {
                input: trimmed.to_string(),
                kind,
            }),
        }
    }

    /// The trimmed input as given by the caller; IPv4 addresses in canonical form.
    pub fn as_str(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Bare AS number for ASN queries.
    pub fn asn(&self) -> Option<u32> {
        match self.kind {
            QueryKind::Asn => parse_asn(&self.input),
            _ => None,
        }
    }

    /// `AS`-prefixed form for ASN queries; `15169` and `as15169` both give `AS15169`.
    pub fn autnum(&self) -> Option<String> {
        self.asn().map(|n| format!("AS{n}"))
    }

    /// Parsed address for IP queries.
    pub fn ip(&self) -> Option<IpAddr> {
        match self.kind {
            QueryKind::Ipv4 | QueryKind::Ipv6 => self.input.parse().ok(),
            _ => None,
        }
    }

    /// `v4` or `v6` for IP queries.
    pub fn ip_version(&self) -> Option<&'static str> {
        match self.kind {
            QueryKind::Ipv4 => Some("v4"),
            QueryKind::Ipv6 => Some("v6"),
            _ => None,
        }
    }

    /// Lowercased rightmost label for domain queries, ignoring a trailing root dot.
    pub fn tld(&self) -> Option<String> {
        match self.kind {
            QueryKind::Domain => self
                .input
                .trim_end_matches('.')
                .rsplit('.')
                .next()
                .filter(|label| !label.is_empty())
                .map(|label| label.to_ascii_lowercase()),
            _ => None,
        }
    }

    /// Lowercased domain without a trailing root dot.
    pub fn ldh_name(&self) -> Option<String> {
        match self.kind {
            QueryKind::Domain => Some(self.input.trim_end_matches('.').to_lowercase()),
            _ => None,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input)
    }
}
