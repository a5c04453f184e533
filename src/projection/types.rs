//! RDAP envelope structures.
//!
//! Field names follow RDAP (RFC 9083) spelling. Absent optional fields and
//! empty collections are omitted from the serialized document.

use serde::Serialize;

use crate::query::QueryKind;
use crate::whois::FieldMap;

/// Object class discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectClass {
    #[serde(rename = "domain")]
    Domain,
    #[serde(rename = "ip network")]
    IpNetwork,
    #[serde(rename = "autnum")]
    Autnum,
}

impl ObjectClass {
    /// Derived from the query kind alone. `Unknown` never reaches projection
    /// through a lookup; it maps to `Domain` like its normalized record.
    pub fn for_kind(kind: QueryKind) -> Self {
        match kind {
            QueryKind::Domain | QueryKind::Unknown => ObjectClass::Domain,
            QueryKind::Ipv4 | QueryKind::Ipv6 => ObjectClass::IpNetwork,
            QueryKind::Asn => ObjectClass::Autnum,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectClass::Domain => "domain",
            ObjectClass::IpNetwork => "ip network",
            ObjectClass::Autnum => "autnum",
        }
    }
}

/// The standard notice attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    #[serde(rename = "type")]
    pub notice_type: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapEvent {
    pub event_action: String,
    pub event_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapEntity {
    pub object_class_name: String,
    pub handle: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapNameserver {
    pub object_class_name: String,
    pub ldh_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RdapRemark {
    pub description: Vec<String>,
}

/// The externally visible lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapEnvelope {
    pub rdap_conformance: Vec<String>,
    pub notices: Vec<Notice>,
    pub object_class_name: ObjectClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldh_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autnum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<RdapNameserver>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<RdapEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<RdapEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<RdapRemark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port43: Option<String>,
    /// Terminal response text, unmodified
    pub raw_whois: String,
    /// Catch-all label to value map
    pub whois_parsed: FieldMap,
}

impl RdapEnvelope {
    /// Compact JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON document.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
