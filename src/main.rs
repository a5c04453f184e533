//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whois_rdap` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C cancellation
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

use whois_rdap::config::{Opt, MAX_CONCURRENT_LOOKUPS};
use whois_rdap::error_handling::{update_error_stats, InfoType, ProcessingStats};
use whois_rdap::initialization::init_logger_with;
use whois_rdap::{Config, LookupResult, RdapClient, Termination};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(&opt);
    config.validate().context("Invalid configuration")?;

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupted, cancelling outstanding lookups");
                cancel.cancel();
            }
        }
    });

    let client = RdapClient::new(config);
    let stats = ProcessingStats::new();

    // Results come back in input order
    let mut results = stream::iter(opt.queries.iter())
        .map(|input| {
            let client = &client;
            let cancel = &cancel;
            async move { (input, client.query_with_cancel(input, cancel).await) }
        })
        .buffered(MAX_CONCURRENT_LOOKUPS);

    let mut failed = 0usize;
    while let Some((input, result)) = results.next().await {
        match result {
            Ok(lookup) => {
                record_success(&stats, &lookup);
                if lookup.truncated {
                    eprintln!(
                        "whois_rdap warning: referral chain for {input} was cut off after {} hops",
                        lookup.hops
                    );
                }
                print_result(&lookup, opt.raw_only, opt.pretty)
                    .with_context(|| format!("Failed to render result for {input}"))?;
            }
            Err(e) => {
                failed += 1;
                update_error_stats(&stats, &e);
                eprintln!("whois_rdap error: {input}: {:#}", anyhow::Error::new(e));
            }
        }
    }

    stats.log_summary();
    if failed > 0 {
        process::exit(1);
    }
    Ok(())
}

fn record_success(stats: &ProcessingStats, lookup: &LookupResult) {
    stats.increment_succeeded();
    if lookup.hops > 1 {
        stats.increment_info(InfoType::ReferralFollowed);
    }
    match lookup.termination {
        Termination::Cycle => stats.increment_info(InfoType::ReferralCycle),
        Termination::DepthExceeded => stats.increment_info(InfoType::ChainTruncated),
        Termination::Terminal => {}
    }
}

fn print_result(lookup: &LookupResult, raw_only: bool, pretty: bool) -> Result<()> {
    if raw_only {
        println!("{}", lookup.envelope.raw_whois);
        return Ok(());
    }
    let json = if pretty {
        lookup.envelope.to_json_pretty()?
    } else {
        lookup.envelope.to_json()?
    };
    println!("{json}");
    Ok(())
}
