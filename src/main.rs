//! Sounder binary entry point: parse arguments, resolve the target, run the
//! scan, present results.

use anyhow::Result;
use clap::Parser;
use sounder::cli::Args;
use sounder::output;
use sounder::types::PortRange;
use sounder::{run_scan, ScanConfig, ScanTarget};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let ports: PortRange = args.ports.parse()?;
    let mut config = ScanConfig::new(args.concurrency, Duration::from_millis(args.timeout))?;
    if !args.no_progress && !args.json {
        config = config.with_progress();
    }

    let target = ScanTarget::resolve(&args.target, ports).await?;

    if !args.json {
        output::print_scan_header(&target);
    }

    let summary = run_scan(&target, &config, |finding| {
        if !args.json {
            output::print_finding(finding);
        }
    })
    .await;

    if args.json {
        output::print_json(&summary)?;
    } else {
        output::print_summary(&summary);
    }

    Ok(())
}
