//! Registry response normalization.
//!
//! Turns the free-text terminal response into a `NormalizedRecord`:
//! - every `label: value` line lands in the catch-all `FieldMap`
//! - labels known to the per-kind tables in `rules` also populate structured
//!   slots (name, events, status, nameservers, entities, remarks)
//!
//! Normalization never fails. Lines it cannot read are skipped and missing
//! labels leave their slots empty.

mod field_map;
mod parse;
mod rules;
mod types;

use crate::query::QueryKind;
use crate::referral::RawResult;

pub use field_map::FieldMap;
pub(crate) use parse::fields;
pub use types::{
    DomainRecord, Entity, Event, EventAction, NormalizedRecord, ResourceRecord, Role,
};

use rules::{targets_for, Target};

/// Normalizes the terminal response of `raw`.
pub fn normalize(raw: &RawResult, kind: QueryKind) -> NormalizedRecord {
    normalize_text(raw.text(), kind)
}

/// Normalizes a response text directly. `QueryKind::Unknown` yields a domain
/// record holding only the catch-all map.
pub fn normalize_text(text: &str, kind: QueryKind) -> NormalizedRecord {
    let slots = collect_slots(text, kind);
    match kind {
        QueryKind::Domain | QueryKind::Unknown => NormalizedRecord::Domain(slots.into_domain()),
        QueryKind::Ipv4 | QueryKind::Ipv6 => NormalizedRecord::IpNetwork(slots.into_resource()),
        QueryKind::Asn => NormalizedRecord::Autnum(slots.into_resource()),
    }
}

/// Every structured slot any kind can fill.
#[derive(Default)]
struct Slots {
    name: Option<String>,
    handle: Option<String>,
    country: Option<String>,
    status: Vec<String>,
    nameservers: Vec<String>,
    events: Vec<Event>,
    entities: Vec<Entity>,
    remarks: Vec<String>,
    fields: FieldMap,
}

impl Slots {
    fn apply(&mut self, target: Target, value: &str) {
        match target {
            Target::Name => self.name = Some(value.to_string()),
            Target::Handle => self.handle = Some(value.to_string()),
            Target::Country => self.country = Some(value.to_string()),
            Target::Status => self.status.push(status_flag(value).to_string()),
            Target::Nameserver => self.nameservers.push(value.to_string()),
            Target::Event(action) => self.events.push(Event {
                action,
                date: value.to_string(),
            }),
            Target::Entity(role) => self.entities.push(Entity {
                handle: value.to_string(),
                role,
            }),
            Target::Remark => self.remarks.push(value.to_string()),
        }
    }

    fn into_domain(self) -> DomainRecord {
        DomainRecord {
            name: self.name,
            nameservers: self.nameservers,
            status: self.status,
            events: self.events,
            entities: self.entities,
            fields: self.fields,
        }
    }

    fn into_resource(self) -> ResourceRecord {
        ResourceRecord {
            name: self.name,
            handle: self.handle,
            country: self.country,
            status: self.status,
            events: self.events,
            entities: self.entities,
            remarks: self.remarks,
            fields: self.fields,
        }
    }
}

fn collect_slots(text: &str, kind: QueryKind) -> Slots {
    let mut slots = Slots::default();
    for (label, value) in fields(text) {
        slots.fields.insert(label, value);
        if value.is_empty() {
            continue;
        }
        let lowered = label.to_lowercase();
        for target in targets_for(kind, &lowered) {
            slots.apply(target, value);
        }
    }
    slots
}

/// EPP statuses often carry a link to their definition; keep only the code.
fn status_flag(value: &str) -> &str {
    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(code), Some(next))
            if next.starts_with("http://")
                || next.starts_with("https://")
                || next.starts_with("(http") =>
        {
            code
        }
        _ => value,
    }
}
