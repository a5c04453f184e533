//! Error categorization and retry strategy.

use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;

use super::stats::ProcessingStats;
use super::types::{ErrorType, LookupError, TransportError};

/// Creates the exponential backoff used between connect attempts.
///
/// Returns a strategy configured with:
/// - Initial delay: `CONNECT_RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: 2 (doubles delay each retry)
/// - Maximum delay: `CONNECT_RETRY_MAX_DELAY_MS` milliseconds
/// - At most `retries` retries after the first attempt
pub fn get_connect_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(crate::config::CONNECT_RETRY_INITIAL_DELAY_MS / 2)
        .max_delay(Duration::from_millis(
            crate::config::CONNECT_RETRY_MAX_DELAY_MS,
        ))
        .take(retries)
}

/// Categorizes a `TransportError` into an `ErrorType`.
pub fn categorize_transport_error(error: &TransportError) -> ErrorType {
    match error {
        TransportError::Connect { .. } => ErrorType::TransportConnect,
        TransportError::Timeout { .. } => ErrorType::TransportTimeout,
        TransportError::ShortRead { .. } => ErrorType::TransportShortRead,
        TransportError::Io { .. } => ErrorType::TransportIo,
    }
}

/// Categorizes a `LookupError` into an `ErrorType`.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::UnclassifiedInput(_) => ErrorType::UnclassifiedInput,
        LookupError::NoServer { .. } => ErrorType::NoServer,
        LookupError::Transport { source, .. } => categorize_transport_error(source),
        LookupError::TooManyHops { .. } => ErrorType::TooManyHops,
        LookupError::Cancelled => ErrorType::Cancelled,
    }
}

/// Updates processing statistics based on a failed lookup.
pub fn update_error_stats(stats: &ProcessingStats, error: &LookupError) {
    stats.increment_error(categorize_lookup_error(error));
}
