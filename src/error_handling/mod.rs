//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, transport, lookup)
//! - Lookup statistics tracking (errors and info metrics)
//! - Connect retry strategy configuration
//! - Error categorization for statistics

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_lookup_error, categorize_transport_error, get_connect_retry_strategy,
    update_error_stats,
};
pub use stats::ProcessingStats;
pub use types::{
    AddressParseError, ErrorType, InfoType, InitializationError, LookupError, TransportError,
};
