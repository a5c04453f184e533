//! Referral hint extraction.

use log::debug;

use crate::directory::ServerAddress;
use crate::query::QueryKind;
use crate::whois::fields;

/// Labels that name the next server for domain queries. Compared lowercase.
const DOMAIN_REFERRAL_LABELS: &[&str] = &["registrar whois server", "whois server", "refer", "whois"];

/// Labels that name the next server for IP and AS number queries.
const NETWORK_REFERRAL_LABELS: &[&str] = &["referralserver", "refer", "whois"];

/// Referral labels understood for `kind`.
pub fn referral_labels(kind: QueryKind) -> &'static [&'static str] {
    match kind {
        QueryKind::Domain => DOMAIN_REFERRAL_LABELS,
        QueryKind::Ipv4 | QueryKind::Ipv6 | QueryKind::Asn => NETWORK_REFERRAL_LABELS,
        QueryKind::Unknown => &[],
    }
}

/// Returns the server named by the first usable referral line in `text`.
///
/// A referral line whose value is not a server address is skipped and the scan
/// continues; later valid lines can still win.
pub fn find_referral(text: &str, kind: QueryKind) -> Option<ServerAddress> {
    let labels = referral_labels(kind);
    for (label, value) in fields(text) {
        let label = label.to_lowercase();
        if !labels.contains(&label.as_str()) {
            continue;
        }
        match ServerAddress::parse(value) {
            Ok(server) => return Some(server),
            Err(e) => debug!("Ignoring malformed referral {label:?}: {e}"),
        }
    }
    None
}
