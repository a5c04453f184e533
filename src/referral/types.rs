//! Referral chain data structures.

use crate::directory::ServerAddress;

/// One exchange in a referral chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Server that was queried
    pub server: ServerAddress,
    /// Full response text
    pub response: String,
}

/// Servers queried for one resolution, in order. Never empty and never holds
/// the same server twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralChain {
    first: Hop,
    rest: Vec<Hop>,
}

impl ReferralChain {
    pub(crate) fn start(server: ServerAddress, response: String) -> Self {
        ReferralChain {
            first: Hop { server, response },
            rest: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, server: ServerAddress, response: String) {
        debug_assert!(!self.contains(&server));
        self.rest.push(Hop { server, response });
    }

    /// True if `server` (by normalized host and port) was already queried.
    pub fn contains(&self, server: &ServerAddress) -> bool {
        self.hops().any(|hop| &hop.server == server)
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Referrals followed so far; the directory server's hop is not one.
    pub fn referrals_followed(&self) -> usize {
        self.rest.len()
    }

    /// Always false: a chain holds at least one hop.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn hops(&self) -> impl Iterator<Item = &Hop> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Most recent hop.
    pub fn last(&self) -> &Hop {
        self.rest.last().unwrap_or(&self.first)
    }
}

/// Why the follower stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The last response carried no usable referral.
    Terminal,
    /// The last response referred to a server already in the chain.
    Cycle,
    /// The last response referred onwards but the hop limit was reached.
    DepthExceeded,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Terminal => "terminal",
            Termination::Cycle => "cycle",
            Termination::DepthExceeded => "depth exceeded",
        }
    }
}

/// The terminal response together with the chain that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult {
    chain: ReferralChain,
    termination: Termination,
}

impl RawResult {
    pub(crate) fn new(chain: ReferralChain, termination: Termination) -> Self {
        RawResult { chain, termination }
    }

    /// Wraps a single response that was obtained elsewhere, e.g. a saved capture.
    pub fn single(server: ServerAddress, response: String) -> Self {
        Self::new(ReferralChain::start(server, response), Termination::Terminal)
    }

    /// Terminal response text.
    pub fn text(&self) -> &str {
        &self.chain.last().response
    }

    /// Server that produced the terminal response.
    pub fn terminal_server(&self) -> &ServerAddress {
        &self.chain.last().server
    }

    pub fn chain(&self) -> &ReferralChain {
        &self.chain
    }

    /// Number of servers queried.
    pub fn hop_count(&self) -> usize {
        self.chain.len()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// True when the hop limit cut the chain short.
    pub fn truncated(&self) -> bool {
        self.termination == Termination::DepthExceeded
    }
}
