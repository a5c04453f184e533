//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    CONNECT_RETRIES, MAX_HOPS, MAX_RESPONSE_BYTES, OVERALL_TIMEOUT_SECS, PER_HOP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what range is accepted
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use whois_rdap::Config;
///
/// let config = Config {
///     per_hop_timeout: Duration::from_secs(5),
///     max_hops: 2,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Timeout for a single registry exchange (connect + write + read)
    pub per_hop_timeout: Duration,

    /// Wall-clock budget across all hops of one resolution (`None` = unbounded)
    pub overall_timeout: Option<Duration>,

    /// Maximum number of referrals followed per resolution (0 = directory server only)
    pub max_hops: usize,

    /// Connect retries performed inside the transport before a hop fails
    pub connect_retries: usize,

    /// Responses longer than this many bytes are truncated
    pub max_response_bytes: usize,

    /// Treat a referral chain cut off by `max_hops` as an error
    pub fail_on_truncation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            per_hop_timeout: Duration::from_secs(PER_HOP_TIMEOUT_SECS),
            overall_timeout: Some(Duration::from_secs(OVERALL_TIMEOUT_SECS)),
            max_hops: MAX_HOPS,
            connect_retries: CONNECT_RETRIES,
            max_response_bytes: MAX_RESPONSE_BYTES,
            fail_on_truncation: false,
        }
    }
}

impl Config {
    /// Checks that every field is within its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.per_hop_timeout.is_zero() {
            return Err(ConfigValidationError::new(
                "per_hop_timeout",
                "must be greater than 0",
            ));
        }
        if let Some(overall) = self.overall_timeout {
            if overall < self.per_hop_timeout {
                return Err(ConfigValidationError::new(
                    "overall_timeout",
                    format!(
                        "must be at least the per-hop timeout ({}s)",
                        self.per_hop_timeout.as_secs()
                    ),
                ));
            }
        }
        if self.max_hops > 16 {
            return Err(ConfigValidationError::new(
                "max_hops",
                "must be between 0 and 16",
            ));
        }
        if self.connect_retries > 5 {
            return Err(ConfigValidationError::new(
                "connect_retries",
                "must be at most 5",
            ));
        }
        if self.max_response_bytes < 1024 {
            return Err(ConfigValidationError::new(
                "max_response_bytes",
                "must be at least 1024",
            ));
        }
        Ok(())
    }
}

/// Command-line options of the `whois_rdap` binary.
#[derive(Debug, Parser)]
#[command(
    name = "whois_rdap",
    version,
    about = "Look up domain, IP and AS-number registration data as RDAP-shaped JSON"
)]
pub struct Opt {
    /// Identifiers to look up (domain, IPv4/IPv6 address, AS number)
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-hop timeout in seconds
    #[arg(long, default_value_t = PER_HOP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Overall budget per query in seconds (0 disables the budget)
    #[arg(long, default_value_t = OVERALL_TIMEOUT_SECS)]
    pub overall_timeout_seconds: u64,

    /// Maximum number of referrals followed per lookup (0 never follows one)
    #[arg(long, default_value_t = MAX_HOPS)]
    pub max_hops: usize,

    /// Connect retries per hop
    #[arg(long, default_value_t = CONNECT_RETRIES)]
    pub connect_retries: usize,

    /// Fail a lookup whose referral chain was cut off by --max-hops
    #[arg(long)]
    pub fail_on_truncation: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print the terminal registry response instead of JSON
    #[arg(long)]
    pub raw_only: bool,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Config {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            per_hop_timeout: Duration::from_secs(opt.timeout_seconds),
            overall_timeout: match opt.overall_timeout_seconds {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            max_hops: opt.max_hops,
            connect_retries: opt.connect_retries,
            max_response_bytes: MAX_RESPONSE_BYTES,
            fail_on_truncation: opt.fail_on_truncation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.per_hop_timeout, Duration::from_secs(10));
        assert_eq!(config.overall_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.max_hops, 4);
        assert_eq!(config.connect_retries, 1);
        assert!(!config.fail_on_truncation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_hop_limit_range() {
        let config = Config {
            max_hops: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = Config {
            max_hops: 17,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "max_hops");
        assert!(err.message.contains("between 0 and 16"));
    }

    #[test]
    fn test_validate_rejects_budget_below_hop_timeout() {
        let config = Config {
            per_hop_timeout: Duration::from_secs(10),
            overall_timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "overall_timeout");
    }

    #[test]
    fn test_validate_allows_unbounded_budget() {
        let config = Config {
            overall_timeout: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_opt_into_config() {
        let opt = Opt::parse_from([
            "whois_rdap",
            "example.com",
            "--timeout-seconds",
            "3",
            "--overall-timeout-seconds",
            "0",
            "--max-hops",
            "2",
        ]);
        let config = Config::from(&opt);
        assert_eq!(config.per_hop_timeout, Duration::from_secs(3));
        assert_eq!(config.overall_timeout, None);
        assert_eq!(config.max_hops, 2);
    }
}
