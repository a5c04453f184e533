//! Normalized record structures.

use super::field_map::FieldMap;

/// Kind of dated event a registry reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    Registration,
    Expiration,
    LastChanged,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::Registration => "registration",
            EventAction::Expiration => "expiration",
            EventAction::LastChanged => "last changed",
        }
    }
}

/// A dated event. The date is kept exactly as the registry wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub action: EventAction,
    pub date: String,
}

/// Role an entity plays for the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Registrar,
    Registrant,
    Abuse,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Registrar => "registrar",
            Role::Registrant => "registrant",
            Role::Abuse => "abuse",
        }
    }
}

/// A role-tagged handle, e.g. the registrar `RU-CENTER-RU`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub handle: String,
    pub role: Role,
}

/// Normalized domain registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainRecord {
    /// Domain name as the registry spells it
    pub name: Option<String>,
    /// Name server host names, in response order
    pub nameservers: Vec<String>,
    /// Status flags, in response order
    pub status: Vec<String>,
    pub events: Vec<Event>,
    pub entities: Vec<Entity>,
    /// Catch-all map of every field in the response
    pub fields: FieldMap,
}

/// Normalized IP network or autonomous system object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Network name or AS name
    pub name: Option<String>,
    /// Registry handle (`NET-8-8-8-0-1`, `AS15169`, an inetnum range)
    pub handle: Option<String>,
    /// Two-letter country code
    pub country: Option<String>,
    pub status: Vec<String>,
    pub events: Vec<Event>,
    pub entities: Vec<Entity>,
    /// Free-text description lines
    pub remarks: Vec<String>,
    /// Catch-all map of every field in the response
    pub fields: FieldMap,
}

/// Registry-agnostic projection of a terminal response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedRecord {
    Domain(DomainRecord),
    IpNetwork(ResourceRecord),
    Autnum(ResourceRecord),
}

impl NormalizedRecord {
    /// Catch-all map, whatever the variant.
    pub fn fields(&self) -> &FieldMap {
        match self {
            NormalizedRecord::Domain(record) => &record.fields,
            NormalizedRecord::IpNetwork(record) | NormalizedRecord::Autnum(record) => {
                &record.fields
            }
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            NormalizedRecord::Domain(record) => record.name.as_deref(),
            NormalizedRecord::IpNetwork(record) | NormalizedRecord::Autnum(record) => {
                record.name.as_deref()
            }
        }
    }
}
