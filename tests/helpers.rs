// Shared test helpers: a scripted in-memory registry network.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use whois_rdap::{ServerAddress, TransportError, WhoisTransport};

/// What a scripted server does when queried.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Not every test file uses every behavior
pub enum Behavior {
    /// Answer with this text
    Respond(String),
    /// Refuse the connection
    Refuse,
    /// Accept and close without answering
    Close,
    /// Never answer; fails once the caller's timeout elapses
    Hang,
}

/// Transport that answers from a per-server script and records every call.
///
/// Servers without a script refuse the connection.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: HashMap<ServerAddress, Behavior>,
    calls: Mutex<Vec<(ServerAddress, String)>>,
}

#[allow(dead_code)] // Used by other test files
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// `server` is a referral-style address: `host` or `host:port`.
    pub fn with(mut self, server: &str, behavior: Behavior) -> Self {
        let address = ServerAddress::parse(server).expect("test server address must parse");
        self.script.insert(address, behavior);
        self
    }

    pub fn respond(self, server: &str, text: &str) -> Self {
        self.with(server, Behavior::Respond(text.to_string()))
    }

    /// Every `(server, query text)` pair seen so far, in call order.
    pub fn calls(&self) -> Vec<(ServerAddress, String)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// `host:port` of every server queried, in call order.
    pub fn servers_queried(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|(server, _)| server.to_string())
            .collect()
    }
}

#[async_trait]
impl WhoisTransport for MockTransport {
    async fn query(
        &self,
        server: &ServerAddress,
        query_text: &str,
        timeout: Duration,
    ) -> Result<String, TransportError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((server.clone(), query_text.to_string()));

        match self.script.get(server).cloned() {
            Some(Behavior::Respond(text)) => Ok(text),
            Some(Behavior::Close) => Err(TransportError::ShortRead {
                server: server.clone(),
            }),
            Some(Behavior::Hang) => {
                tokio::time::sleep(timeout).await;
                Err(TransportError::Timeout {
                    server: server.clone(),
                    after: timeout,
                })
            }
            Some(Behavior::Refuse) | None => Err(TransportError::Connect {
                server: server.clone(),
                source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            }),
        }
    }
}

/// Terminal response of the `.ru` registry for `egger.ru`.
#[allow(dead_code)]
pub const TCINET_EGGER_RU: &str = "\
% TCI Whois Service. Terms of use:
% https://tcinet.ru/documents/whois_ru_rf.pdf (in Russian)

Domain Name: EGGER.RU
nserver: ns1.dns.millenniumarts.net.
state: REGISTERED, DELEGATED, VERIFIED
org: Fritz Egger GmbH & Co. OG
Registrar: RU-CENTER-RU
Created: 2001-02-19
paid-till: 2025-03-01
source: TCI
";

/// ARIN answer for `n + 8.8.8.8`.
#[allow(dead_code)]
pub const ARIN_8_8_8_8: &str = "\
# ARIN WHOIS data and services are subject to the Terms of Use

NetRange:       8.8.8.0 - 8.8.8.255
CIDR:           8.8.8.0/24
NetName:        GOGL
NetHandle:      NET-8-8-8-0-2
RegDate:        2023-12-28
Updated:        2023-12-28
OrgName:        Google LLC
Country:        US
";

/// ARIN answer for `a + 15169`.
#[allow(dead_code)]
pub const ARIN_AS15169: &str = "\
ASNumber:       15169
ASName:         GOOGLE
ASHandle:       AS15169
RegDate:        2000-03-30
Updated:        2012-02-24
OrgName:        Google LLC
Country:        US
";
