//! Static registry tables.
//!
//! Snapshots of the IANA delegation registries, coarse enough to stay small.
//! A block that has since moved between RIRs is still reachable: the RIR we
//! pick first answers with a referral to the current holder.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

pub(crate) const IANA: &str = "whois.iana.org";
pub(crate) const ARIN: &str = "whois.arin.net";
pub(crate) const RIPE: &str = "whois.ripe.net";
pub(crate) const APNIC: &str = "whois.apnic.net";
pub(crate) const LACNIC: &str = "whois.lacnic.net";
pub(crate) const AFRINIC: &str = "whois.afrinic.net";
pub(crate) const DENIC: &str = "whois.denic.de";

/// Top-level label to registry server.
const TLD_SERVERS: &[(&str, &str)] = &[
    ("com", "whois.verisign-grs.com"),
    ("net", "whois.verisign-grs.com"),
    ("org", "whois.pir.org"),
    ("info", "whois.nic.info"),
    ("biz", "whois.nic.biz"),
    ("name", "whois.nic.name"),
    ("mobi", "whois.nic.mobi"),
    ("xyz", "whois.nic.xyz"),
    ("app", "whois.nic.google"),
    ("dev", "whois.nic.google"),
    ("io", "whois.nic.io"),
    ("co", "whois.nic.co"),
    ("me", "whois.nic.me"),
    ("tv", "whois.nic.tv"),
    ("cc", "ccwhois.verisign-grs.com"),
    ("us", "whois.nic.us"),
    ("edu", "whois.educause.edu"),
    ("gov", "whois.dotgov.gov"),
    ("int", IANA),
    ("arpa", IANA),
    ("ru", "whois.tcinet.ru"),
    ("su", "whois.tcinet.ru"),
    ("xn--p1ai", "whois.tcinet.ru"),
    ("de", DENIC),
    ("uk", "whois.nic.uk"),
    ("fr", "whois.nic.fr"),
    ("nl", "whois.domain-registry.nl"),
    ("be", "whois.dns.be"),
    ("eu", "whois.eu"),
    ("ch", "whois.nic.ch"),
    ("li", "whois.nic.li"),
    ("at", "whois.nic.at"),
    ("it", "whois.nic.it"),
    ("es", "whois.nic.es"),
    ("se", "whois.iis.se"),
    ("nu", "whois.iis.nu"),
    ("fi", "whois.fi"),
    ("pl", "whois.dns.pl"),
    ("cz", "whois.nic.cz"),
    ("ua", "whois.ua"),
    ("jp", "whois.jprs.jp"),
    ("cn", "whois.cnnic.cn"),
    ("kr", "whois.kr"),
    ("in", "whois.registry.in"),
    ("au", "whois.auda.org.au"),
    ("nz", "whois.irs.net.nz"),
    ("ca", "whois.cira.ca"),
    ("br", "whois.registro.br"),
    ("mx", "whois.mx"),
];

static TLD_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TLD_SERVERS.iter().copied().collect());

/// Inclusive first-octet ranges. 0/8, 127/8 and 224/3 have no registry.
const IPV4_BLOCKS: &[(u8, u8, &str)] = &[
    (1, 1, APNIC),
    (2, 2, RIPE),
    (3, 4, ARIN),
    (5, 5, RIPE),
    (6, 13, ARIN),
    (14, 14, APNIC),
    (15, 26, ARIN),
    (27, 27, APNIC),
    (28, 30, ARIN),
    (31, 31, RIPE),
    (32, 35, ARIN),
    (36, 36, APNIC),
    (37, 37, RIPE),
    (38, 38, ARIN),
    (39, 39, APNIC),
    (40, 40, ARIN),
    (41, 41, AFRINIC),
    (42, 43, APNIC),
    (44, 45, ARIN),
    (46, 46, RIPE),
    (47, 48, ARIN),
    (49, 49, APNIC),
    (50, 50, ARIN),
    (51, 51, RIPE),
    (52, 57, ARIN),
    (58, 61, APNIC),
    (62, 62, RIPE),
    (63, 76, ARIN),
    (77, 95, RIPE),
    (96, 100, ARIN),
    (101, 101, APNIC),
    (102, 102, AFRINIC),
    (103, 103, APNIC),
    (104, 104, ARIN),
    (105, 105, AFRINIC),
    (106, 106, APNIC),
    (107, 108, ARIN),
    (109, 109, RIPE),
    (110, 126, APNIC),
    (128, 132, ARIN),
    (133, 133, APNIC),
    (134, 140, ARIN),
    (141, 141, RIPE),
    (142, 144, ARIN),
    (145, 145, RIPE),
    (146, 149, ARIN),
    (150, 150, APNIC),
    (151, 151, RIPE),
    (152, 152, ARIN),
    (153, 153, APNIC),
    (154, 154, AFRINIC),
    (155, 162, ARIN),
    (163, 163, APNIC),
    (164, 170, ARIN),
    (171, 171, APNIC),
    (172, 174, ARIN),
    (175, 175, APNIC),
    (176, 176, RIPE),
    (177, 177, LACNIC),
    (178, 178, RIPE),
    (179, 179, LACNIC),
    (180, 180, APNIC),
    (181, 181, LACNIC),
    (182, 183, APNIC),
    (184, 184, ARIN),
    (185, 185, RIPE),
    (186, 187, LACNIC),
    (188, 188, RIPE),
    (189, 191, LACNIC),
    (192, 192, ARIN),
    (193, 195, RIPE),
    (196, 197, AFRINIC),
    (198, 199, ARIN),
    (200, 201, LACNIC),
    (202, 203, APNIC),
    (204, 209, ARIN),
    (210, 211, APNIC),
    (212, 213, RIPE),
    (214, 216, ARIN),
    (217, 217, RIPE),
    (218, 223, APNIC),
];

/// (prefix, prefix length, server). Longest prefix wins.
const IPV6_BLOCKS: &[(u128, u8, &str)] = &[
    (0x2001_0200 << 96, 23, APNIC),
    (0x2001_0400 << 96, 23, ARIN),
    (0x2001_0600 << 96, 23, RIPE),
    (0x2001_0800 << 96, 22, RIPE),
    (0x2001_0c00 << 96, 23, APNIC),
    (0x2001_0e00 << 96, 23, APNIC),
    (0x2001_1200 << 96, 23, LACNIC),
    (0x2001_1400 << 96, 22, RIPE),
    (0x2001_1800 << 96, 23, ARIN),
    (0x2001_1a00 << 96, 23, RIPE),
    (0x2001_1c00 << 96, 22, RIPE),
    (0x2001_4000 << 96, 23, RIPE),
    (0x2001_4200 << 96, 23, AFRINIC),
    (0x2001_4400 << 96, 23, APNIC),
    (0x2001_4600 << 96, 23, RIPE),
    (0x2001_4800 << 96, 23, ARIN),
    (0x2001_4a00 << 96, 23, RIPE),
    (0x2001_4c00 << 96, 23, RIPE),
    (0x2001_5000 << 96, 20, RIPE),
    (0x2001_8000 << 96, 19, APNIC),
    (0x2001_a000 << 96, 20, APNIC),
    (0x2001_b000 << 96, 20, APNIC),
    (0x2003 << 112, 18, RIPE),
    (0x2400 << 112, 12, APNIC),
    (0x2600 << 112, 12, ARIN),
    (0x2800 << 112, 12, LACNIC),
    (0x2a00 << 112, 12, RIPE),
    (0x2a10 << 112, 12, RIPE),
    (0x2c00 << 112, 12, AFRINIC),
    // Global unicast not listed above; IANA refers onwards.
    (0x2000 << 112, 3, IANA),
];

/// 2001:db8::/32 documentation range.
const IPV6_DOCUMENTATION: (u128, u8) = (0x2001_0db8 << 96, 32);

/// Inclusive AS number ranges. 0, 23456, 64496-131071 and the private 32-bit
/// range have no registry.
const ASN_BLOCKS: &[(u32, u32, &str)] = &[
    (1, 7466, ARIN),
    (7467, 7722, APNIC),
    (7723, 8191, ARIN),
    (8192, 9215, RIPE),
    (9216, 10239, APNIC),
    (10240, 12287, ARIN),
    (12288, 13311, RIPE),
    (13312, 15359, ARIN),
    (15360, 16383, RIPE),
    (16384, 17407, ARIN),
    (17408, 18431, APNIC),
    (18432, 20479, ARIN),
    (20480, 21503, RIPE),
    (21504, 23455, ARIN),
    (23457, 23551, ARIN),
    (23552, 24575, APNIC),
    (24576, 25599, RIPE),
    (25600, 26591, ARIN),
    (26592, 26623, LACNIC),
    (26624, 27647, ARIN),
    (27648, 28671, LACNIC),
    (28672, 29695, RIPE),
    (29696, 30719, ARIN),
    (30720, 31743, RIPE),
    (31744, 34815, ARIN),
    (34816, 35839, RIPE),
    (35840, 36863, ARIN),
    (36864, 37887, AFRINIC),
    (37888, 38911, APNIC),
    (38912, 39935, RIPE),
    (39936, 40959, ARIN),
    (40960, 45055, RIPE),
    (45056, 46079, APNIC),
    (46080, 47103, ARIN),
    (47104, 52223, RIPE),
    (52224, 53247, LACNIC),
    (53248, 55295, ARIN),
    (55296, 56319, APNIC),
    (56320, 58367, RIPE),
    (58368, 59391, APNIC),
    (59392, 61439, RIPE),
    (61440, 61951, LACNIC),
    (61952, 62463, RIPE),
    (62464, 63487, ARIN),
    (63488, 64495, APNIC),
    (131072, 196607, APNIC),
    (196608, 262143, RIPE),
    (262144, 327679, LACNIC),
    (327680, 393215, AFRINIC),
    (393216, 458751, ARIN),
];

pub(crate) fn tld_server(tld: &str) -> Option<&'static str> {
    TLD_TABLE.get(tld).copied()
}

pub(crate) fn ipv4_server(addr: Ipv4Addr) -> Option<&'static str> {
    let first = addr.octets()[0];
    IPV4_BLOCKS
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&first))
        .map(|(_, _, server)| *server)
}

fn prefix_matches(addr: u128, prefix: u128, len: u8) -> bool {
    let mask = if len == 0 { 0 } else { u128::MAX << (128 - u32::from(len)) };
    addr & mask == prefix & mask
}

pub(crate) fn ipv6_server(addr: Ipv6Addr) -> Option<&'static str> {
    let bits = u128::from(addr);
    let (doc_prefix, doc_len) = IPV6_DOCUMENTATION;
    if prefix_matches(bits, doc_prefix, doc_len) {
        return None;
    }
    IPV6_BLOCKS
        .iter()
        .filter(|(prefix, len, _)| prefix_matches(bits, *prefix, *len))
        .max_by_key(|(_, len, _)| *len)
        .map(|(_, _, server)| *server)
}

pub(crate) fn asn_server(asn: u32) -> Option<&'static str> {
    ASN_BLOCKS
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&asn))
        .map(|(_, _, server)| *server)
}
