//! Per-kind field mapping tables.
//!
//! The only place registry vocabulary lives. Supporting a new registry's field
//! names means adding labels here. Labels are lowercase; every rule whose label
//! set contains a line's label fires, in table order.

use super::types::{EventAction, Role};
use crate::query::QueryKind;

/// Structured slot a field value is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// Object name; last value wins
    Name,
    /// Registry handle; last value wins
    Handle,
    /// Country code; last value wins
    Country,
    /// Appends a status flag
    Status,
    /// Appends a name server
    Nameserver,
    /// Appends a dated event
    Event(EventAction),
    /// Appends a role-tagged entity
    Entity(Role),
    /// Appends a free-text remark
    Remark,
}

pub(crate) type Rule = (&'static [&'static str], Target);

const DOMAIN_RULES: &[Rule] = &[
    (&["domain name", "domain"], Target::Name),
    (&["registrar", "sponsoring registrar"], Target::Entity(Role::Registrar)),
    (
        &["registrant", "registrant organization", "org"],
        Target::Entity(Role::Registrant),
    ),
    (
        &["registrar abuse contact email"],
        Target::Entity(Role::Abuse),
    ),
    (
        &["created", "creation date", "registered", "registered on"],
        Target::Event(EventAction::Registration),
    ),
    (
        &[
            "paid-till",
            "expires",
            "expiry date",
            "expiration date",
            "registry expiry date",
            "registrar registration expiration date",
        ],
        Target::Event(EventAction::Expiration),
    ),
    (
        &["updated", "updated date", "last updated", "last modified", "changed"],
        Target::Event(EventAction::LastChanged),
    ),
    (
        &["nserver", "name server", "nameserver"],
        Target::Nameserver,
    ),
    (&["status", "domain status", "state"], Target::Status),
];

const NETWORK_RULES: &[Rule] = &[
    (&["netname", "network name"], Target::Name),
    (&["nethandle", "inetnum", "inet6num"], Target::Handle),
    (&["country"], Target::Country),
    (&["status"], Target::Status),
    (
        &["descr", "description", "remarks", "comment"],
        Target::Remark,
    ),
    (
        &["created", "regdate"],
        Target::Event(EventAction::Registration),
    ),
    (
        &["last-modified", "updated", "changed"],
        Target::Event(EventAction::LastChanged),
    ),
    (&["orgname", "org-name"], Target::Entity(Role::Registrant)),
    (
        &["abuse-mailbox", "orgabuseemail"],
        Target::Entity(Role::Abuse),
    ),
];

const AUTNUM_RULES: &[Rule] = &[
    (&["aut-num", "as-name", "asname"], Target::Name),
    (&["aut-num", "ashandle"], Target::Handle),
    (&["country"], Target::Country),
    (&["status"], Target::Status),
    (
        &["descr", "description", "remarks", "comment"],
        Target::Remark,
    ),
    (
        &["created", "regdate"],
        Target::Event(EventAction::Registration),
    ),
    (
        &["last-modified", "updated", "changed"],
        Target::Event(EventAction::LastChanged),
    ),
    (&["orgname", "org-name"], Target::Entity(Role::Registrant)),
    (
        &["abuse-mailbox", "orgabuseemail"],
        Target::Entity(Role::Abuse),
    ),
];

pub(crate) fn rules_for(kind: QueryKind) -> &'static [Rule] {
    match kind {
        QueryKind::Domain => DOMAIN_RULES,
        QueryKind::Ipv4 | QueryKind::Ipv6 => NETWORK_RULES,
        QueryKind::Asn => AUTNUM_RULES,
        QueryKind::Unknown => &[],
    }
}

/// Targets for a lowercased label, in table order.
pub(crate) fn targets_for(
    kind: QueryKind,
    label: &str,
) -> impl Iterator<Item = Target> + '_ {
    rules_for(kind)
        .iter()
        .filter(move |(labels, _)| labels.contains(&label))
        .map(|(_, target)| *target)
}
