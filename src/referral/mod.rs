//! Referral following.
//!
//! This module provides:
//! - Referral hint extraction from a response (`find_referral`)
//! - The hop-by-hop resolver (`resolve`), an explicit state machine over
//!   `Querying` and `Done` with failures returned directly
//! - The chain and result types it produces
//!
//! Invariants kept by `resolve`: no server is queried twice in one resolution,
//! and at most `max_hops` servers are queried.

mod follower;
mod hint;
mod types;

// Re-export public API
pub use follower::{resolve, FollowLimits};
pub use hint::{find_referral, referral_labels};
pub use types::{Hop, RawResult, ReferralChain, Termination};
