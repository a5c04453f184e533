//! Registry server addresses.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::WHOIS_PORT;
use crate::error_handling::AddressParseError;
use crate::utils::compile_regex_unsafe;

/// `scheme://rest`, used to pick apart URL-shaped referral values.
static SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"^([A-Za-z][A-Za-z0-9+.-]*)://(.*)$", "SCHEME_PATTERN")
});

/// LDH hostname (or dotted IPv4 literal) with an optional root dot.
static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"^(?i)[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.?$",
        "HOST_PATTERN",
    )
});

/// A registry endpoint.
///
/// The host is stored normalized (lowercase, no trailing root dot), so derived
/// equality is the host+port comparison the cycle guard relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerAddress {
    host: String,
    port: u16,
}

impl ServerAddress {
    pub fn new(host: &str, port: u16) -> Self {
        ServerAddress {
            host: host.trim().trim_end_matches('.').to_ascii_lowercase(),
            port,
        }
    }

    /// Address on the well-known port.
    pub fn well_known(host: &str) -> Self {
        Self::new(host, WHOIS_PORT)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Parses a referral value: `host`, `host:port` or `whois://host[:port][/]`.
    ///
    /// # Errors
    ///
    /// Any other scheme, a value that is not a hostname, or a port outside
    /// 1..=65535 is rejected with the matching `AddressParseError`.
    pub fn parse(value: &str) -> Result<Self, AddressParseError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AddressParseError::Empty);
        }

        let authority = match SCHEME_PATTERN.captures(value) {
            Some(caps) => {
                let scheme = caps.get(1).map_or("", |m| m.as_str());
                if !scheme.eq_ignore_ascii_case("whois") {
                    return Err(AddressParseError::UnsupportedScheme(scheme.to_string()));
                }
                caps.get(2).map_or("", |m| m.as_str()).trim_end_matches('/')
            }
            None => value,
        };

        let (host, port) = match authority.split_once(':') {
            Some((host, port_text)) => {
                let port = port_text
                    .parse::<u16>()
                    .ok()
                    .filter(|p| *p != 0)
                    .ok_or_else(|| AddressParseError::InvalidPort(port_text.to_string()))?;
                (host, port)
            }
            None => (authority, WHOIS_PORT),
        };

        if host.is_empty() || !HOST_PATTERN.is_match(host) {
            return Err(AddressParseError::InvalidHost(host.to_string()));
        }

        Ok(Self::new(host, port))
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_host() {
        let addr = ServerAddress::new("WHOIS.Verisign-GRS.com.", 43);
        assert_eq!(addr.host(), "whois.verisign-grs.com");
        assert_eq!(addr, ServerAddress::well_known("whois.verisign-grs.com"));
        assert_eq!(addr.to_string(), "whois.verisign-grs.com:43");
    }

    #[test]
    fn test_parse_bare_host() {
        let addr = ServerAddress::parse("  whois.markmonitor.com ").unwrap();
        assert_eq!(addr.host(), "whois.markmonitor.com");
        assert_eq!(addr.port(), 43);
    }

    #[test]
    fn test_parse_host_and_port() {
        let addr = ServerAddress::parse("127.0.0.1:4343").unwrap();
        assert_eq!(addr.host(), "127.0.0.1");
        assert_eq!(addr.port(), 4343);
    }

    #[test]
    fn test_parse_whois_url() {
        let addr = ServerAddress::parse("whois://whois.ripe.net").unwrap();
        assert_eq!(addr, ServerAddress::well_known("whois.ripe.net"));

        let addr = ServerAddress::parse("WHOIS://whois.apnic.net:43/").unwrap();
        assert_eq!(addr, ServerAddress::well_known("whois.apnic.net"));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert_eq!(
            ServerAddress::parse("rwhois://rwhois.example.net:4321"),
            Err(AddressParseError::UnsupportedScheme("rwhois".into()))
        );
        assert!(matches!(
            ServerAddress::parse("https://rdap.example.net/"),
            Err(AddressParseError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(ServerAddress::parse("   "), Err(AddressParseError::Empty));
        assert!(matches!(
            ServerAddress::parse("not available"),
            Err(AddressParseError::InvalidHost(_))
        ));
        assert!(matches!(
            ServerAddress::parse("whois.example.net:0"),
            Err(AddressParseError::InvalidPort(_))
        ));
        assert!(matches!(
            ServerAddress::parse("whois.example.net:99999"),
            Err(AddressParseError::InvalidPort(_))
        ));
        assert!(matches!(
            ServerAddress::parse(":43"),
            Err(AddressParseError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_parsed_and_directory_addresses_compare_equal() {
        let referred = ServerAddress::parse("Whois.Tcinet.RU.").unwrap();
        assert_eq!(referred, ServerAddress::well_known("whois.tcinet.ru"));
    }
}
