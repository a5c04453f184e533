//! Response projection.
//!
//! Wraps a normalized record in the RDAP envelope: conformance marker,
//! standard notice, object class, raw terminal text and the catch-all map.

mod types;

use crate::config::{NOTICE_DESCRIPTION, NOTICE_TITLE, NOTICE_TYPE, RDAP_CONFORMANCE};
use crate::query::Query;
use crate::referral::RawResult;
use crate::whois::{Entity, Event, NormalizedRecord};

pub use types::{
    Notice, ObjectClass, RdapEntity, RdapEnvelope, RdapEvent, RdapNameserver, RdapRemark,
};

/// Builds the envelope for `record`, which must come from `raw` and `query`.
///
/// The object class follows `query.kind()`. Identifier fields are taken from
/// the query itself: `ldhName`/`unicodeName` for domains, `startAddress`,
/// `endAddress` and `ipVersion` for addresses, `autnum` for AS numbers.
pub fn project(record: NormalizedRecord, raw: &RawResult, query: &Query) -> RdapEnvelope {
    let mut envelope = RdapEnvelope {
        rdap_conformance: vec![RDAP_CONFORMANCE.to_string()],
        notices: vec![standard_notice()],
        object_class_name: ObjectClass::for_kind(query.kind()),
        handle: None,
        ldh_name: None,
        unicode_name: None,
        start_address: None,
        end_address: None,
        ip_version: None,
        autnum: None,
        name: None,
        country: None,
        status: Vec::new(),
        nameservers: Vec::new(),
        entities: Vec::new(),
        events: Vec::new(),
        remarks: Vec::new(),
        port43: Some(raw.terminal_server().host().to_string()),
        raw_whois: raw.text().to_string(),
        whois_parsed: record.fields().clone(),
    };

    match record {
        NormalizedRecord::Domain(domain) => {
            envelope.ldh_name = query.ldh_name();
            envelope.unicode_name = Some(query.as_str().to_string());
            envelope.name = domain.name;
            envelope.status = domain.status;
            envelope.nameservers = domain
                .nameservers
                .into_iter()
                .map(|ldh_name| RdapNameserver {
                    object_class_name: "nameserver".to_string(),
                    ldh_name,
                })
                .collect();
            envelope.entities = domain.entities.into_iter().map(entity).collect();
            envelope.events = domain.events.into_iter().map(event).collect();
        }
        NormalizedRecord::IpNetwork(network) => {
            envelope.start_address = Some(query.as_str().to_string());
            envelope.end_address = Some(query.as_str().to_string());
            envelope.ip_version = query.ip_version().map(str::to_string);
            envelope.handle = network.handle;
            envelope.name = network.name;
            envelope.country = network.country;
            envelope.status = network.status;
            envelope.entities = network.entities.into_iter().map(entity).collect();
            envelope.events = network.events.into_iter().map(event).collect();
            envelope.remarks = remarks(network.remarks);
        }
        NormalizedRecord::Autnum(autnum) => {
            envelope.autnum = query.autnum();
            envelope.handle = autnum.handle;
            envelope.name = autnum.name;
            envelope.country = autnum.country;
            envelope.status = autnum.status;
            envelope.entities = autnum.entities.into_iter().map(entity).collect();
            envelope.events = autnum.events.into_iter().map(event).collect();
            envelope.remarks = remarks(autnum.remarks);
        }
    }

    envelope
}

fn standard_notice() -> Notice {
    Notice {
        title: NOTICE_TITLE.to_string(),
        notice_type: NOTICE_TYPE.to_string(),
        description: vec![NOTICE_DESCRIPTION.to_string()],
    }
}

fn entity(entity: Entity) -> RdapEntity {
    RdapEntity {
        object_class_name: "entity".to_string(),
        handle: entity.handle,
        roles: vec![entity.role.as_str().to_string()],
    }
}

fn event(event: Event) -> RdapEvent {
    RdapEvent {
        event_action: event.action.as_str().to_string(),
        event_date: event.date,
    }
}

fn remarks(lines: Vec<String>) -> Vec<RdapRemark> {
    lines
        .into_iter()
        .map(|line| RdapRemark {
            description: vec![line],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::ServerAddress;
    use crate::whois::normalize;
    use serde_json::Value;

    fn envelope_for(input: &str, server: &str, response: &str) -> RdapEnvelope {
        let query = Query::parse(input).unwrap();
        let raw = RawResult::single(ServerAddress::well_known(server), response.to_string());
        project(normalize(&raw, query.kind()), &raw, &query)
    }

    #[test]
    fn test_domain_envelope() {
        let envelope = envelope_for(
            "Egger.ru",
            "whois.tcinet.ru",
            "Domain Name: EGGER.RU\nRegistrar: RU-CENTER-RU\nCreated: 2001-02-19\nnserver: ns1.dns.millenniumarts.net.\n",
        );
        assert_eq!(envelope.object_class_name, ObjectClass::Domain);
        assert_eq!(envelope.ldh_name.as_deref(), Some("egger.ru"));
        assert_eq!(envelope.unicode_name.as_deref(), Some("Egger.ru"));
        assert_eq!(envelope.name.as_deref(), Some("EGGER.RU"));
        assert_eq!(envelope.port43.as_deref(), Some("whois.tcinet.ru"));
        assert_eq!(
            envelope.entities,
            [RdapEntity {
                object_class_name: "entity".into(),
                handle: "RU-CENTER-RU".into(),
                roles: vec!["registrar".into()],
            }]
        );
        assert_eq!(
            envelope.events,
            [RdapEvent {
                event_action: "registration".into(),
                event_date: "2001-02-19".into(),
            }]
        );
        assert_eq!(envelope.nameservers[0].ldh_name, "ns1.dns.millenniumarts.net.");
        assert_eq!(envelope.nameservers[0].object_class_name, "nameserver");
        assert!(envelope.start_address.is_none());
        assert!(envelope.autnum.is_none());
    }

    #[test]
    fn test_ip_envelope() {
        let envelope = envelope_for(
            "8.8.8.8",
            "whois.arin.net",
            "NetName: GOGL\nNetHandle: NET-8-8-8-0-2\nCountry: US\nComment: Google Public DNS\n",
        );
        assert_eq!(envelope.object_class_name, ObjectClass::IpNetwork);
        assert_eq!(envelope.start_address.as_deref(), Some("8.8.8.8"));
        assert_eq!(envelope.end_address.as_deref(), Some("8.8.8.8"));
        assert_eq!(envelope.ip_version.as_deref(), Some("v4"));
        assert_eq!(envelope.name.as_deref(), Some("GOGL"));
        assert_eq!(envelope.handle.as_deref(), Some("NET-8-8-8-0-2"));
        assert_eq!(envelope.country.as_deref(), Some("US"));
        assert_eq!(envelope.remarks[0].description, ["Google Public DNS"]);
        assert!(envelope.ldh_name.is_none());
    }

    #[test]
    fn test_ipv6_envelope_version() {
        let envelope = envelope_for("2001:4860:4860::8888", "whois.arin.net", "NetName: GOOGLE-IPV6\n");
        assert_eq!(envelope.ip_version.as_deref(), Some("v6"));
        assert_eq!(envelope.start_address.as_deref(), Some("2001:4860:4860::8888"));
    }

    #[test]
    fn test_autnum_envelope_normalizes_identifier() {
        let bare = envelope_for("15169", "whois.arin.net", "ASName: GOOGLE\nASHandle: AS15169\n");
        let prefixed = envelope_for("as15169", "whois.arin.net", "ASName: GOOGLE\nASHandle: AS15169\n");
        assert_eq!(bare.object_class_name, ObjectClass::Autnum);
        assert_eq!(bare.autnum.as_deref(), Some("AS15169"));
        assert_eq!(bare.autnum, prefixed.autnum);
        assert_eq!(bare.name.as_deref(), Some("GOOGLE"));
    }

    #[test]
    fn test_fixed_metadata_always_present() {
        let envelope = envelope_for("example.com", "whois.verisign-grs.com", "");
        assert_eq!(envelope.rdap_conformance, ["rdap_level_0"]);
        assert_eq!(envelope.notices.len(), 1);
        assert_eq!(envelope.notices[0].title, "Terms of Service");
        assert!(envelope.whois_parsed.is_empty());
        assert_eq!(envelope.raw_whois, "");
    }

    #[test]
    fn test_serialized_field_names() {
        let envelope = envelope_for(
            "8.8.8.8",
            "whois.arin.net",
            "NetName: GOGL\nRegDate: 2023-12-28\n",
        );
        let json: Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();

        assert_eq!(json["objectClassName"], "ip network");
        assert_eq!(json["rdapConformance"][0], "rdap_level_0");
        assert_eq!(
            json["notices"][0]["type"],
            "result set truncated due to authorization"
        );
        assert_eq!(json["startAddress"], "8.8.8.8");
        assert_eq!(json["ipVersion"], "v4");
        assert_eq!(json["port43"], "whois.arin.net");
        assert_eq!(json["events"][0]["eventAction"], "registration");
        assert_eq!(json["events"][0]["eventDate"], "2023-12-28");
        assert_eq!(json["whoisParsed"]["NetName"], "GOGL");
        assert_eq!(json["rawWhois"], "NetName: GOGL\nRegDate: 2023-12-28\n");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let envelope = envelope_for("example.com", "whois.verisign-grs.com", "Domain Name: EXAMPLE.COM\n");
        let json: Value = serde_json::from_str(&envelope.to_json_pretty().unwrap()).unwrap();
        let object = json.as_object().unwrap();

        for absent in [
            "startAddress",
            "endAddress",
            "ipVersion",
            "autnum",
            "country",
            "handle",
            "nameservers",
            "entities",
            "events",
            "status",
            "remarks",
        ] {
            assert!(!object.contains_key(absent), "{absent} should be omitted");
        }
        assert!(object.values().all(|v| !v.is_null()));
        assert_eq!(json["ldhName"], "example.com");
        assert_eq!(json["whoisParsed"]["Domain Name"], "EXAMPLE.COM");
    }
}
