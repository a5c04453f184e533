//! Server directory.
//!
//! Picks the first server to ask for a query and formats the query line that
//! server expects. The tables are process-wide and immutable after first use.

mod address;
mod tables;

use std::net::IpAddr;

use crate::error_handling::LookupError;
use crate::query::{Query, QueryKind};

pub use address::ServerAddress;

/// Returns the first-hop server for a classified query.
///
/// # Errors
///
/// Returns `LookupError::NoServer` when no table entry covers the identifier
/// (unknown TLD, unallocated or special-purpose IP, reserved AS number), and
/// `LookupError::UnclassifiedInput` for an `Unknown` query.
pub fn resolve_initial_server(query: &Query) -> Result<ServerAddress, LookupError> {
    let server = match query.kind() {
        QueryKind::Domain => query.tld().and_then(|tld| tables::tld_server(&tld)),
        QueryKind::Ipv4 | QueryKind::Ipv6 => query.ip().and_then(|ip| match ip {
            IpAddr::V4(v4) => tables::ipv4_server(v4),
            IpAddr::V6(v6) => tables::ipv6_server(v6),
        }),
        QueryKind::Asn => query.asn().and_then(tables::asn_server),
        QueryKind::Unknown => {
            return Err(LookupError::UnclassifiedInput(query.as_str().to_string()))
        }
    };

    server
        .map(ServerAddress::well_known)
        .ok_or_else(|| LookupError::NoServer {
            kind: query.kind(),
            identifier: query.as_str().to_string(),
        })
}

/// Formats the query line for `server`, without the line terminator.
///
/// Most servers take the bare identifier. ARIN needs a record-type flag to
/// avoid matching every object type, DENIC only returns full records when
/// asked for them, and the RIPE-family databases index autnums by `AS<n>`.
pub fn query_text(server: &ServerAddress, query: &Query) -> String {
    let host = server.host();
    match query.kind() {
        QueryKind::Ipv4 | QueryKind::Ipv6 if host == tables::ARIN => {
            format!("n + {}", query.as_str())
        }
        QueryKind::Asn => match query.asn() {
            Some(asn) if host == tables::ARIN => format!("a + {asn}"),
            Some(asn)
                if [tables::RIPE, tables::APNIC, tables::AFRINIC, tables::LACNIC]
                    .contains(&host) =>
            {
                format!("AS{asn}")
            }
            _ => query.as_str().to_string(),
        },
        QueryKind::Domain if host == tables::DENIC => {
            format!("-T dn,ace {}", query.as_str())
        }
        _ => query.as_str().to_string(),
    }
}
