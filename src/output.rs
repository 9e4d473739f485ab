//! Output formatting module.
//!
//! A pure per-finding formatter plus the console-styled printing the binary
//! uses around it. Findings are formatted one per line as they stream in;
//! the summary renders once the scan completes.

use crate::scanner::{PortFinding, ScanSummary};
use crate::types::ScanTarget;
use console::style;
use std::io;

/// Format one finding as a stable, human-readable line.
///
/// The banner segment is omitted entirely when no banner was collected.
pub fn format_finding(finding: &PortFinding) -> String {
    match &finding.banner {
        Some(banner) => format!(
            "Port {} is open - Service: {} - Banner: {}",
            finding.port, finding.service, banner
        ),
        None => format!(
            "Port {} is open - Service: {}",
            finding.port, finding.service
        ),
    }
}

/// Print a finding line to stdout as it arrives.
pub fn print_finding(finding: &PortFinding) {
    println!(
        "{} {}",
        style("[+]").green().bold(),
        format_finding(finding)
    );
}

/// Print the scan header before probing begins.
pub fn print_scan_header(target: &ScanTarget) {
    println!(
        "{} Scanning ports {} to {} on {}...",
        style("[*]").cyan().bold(),
        style(target.ports.start()).bold(),
        style(target.ports.end()).bold(),
        style(target).bold()
    );
    println!();
}

/// Print the end-of-scan summary line.
pub fn print_summary(summary: &ScanSummary) {
    println!();
    println!(
        "{} {} ports scanned in {:.2}s, {} open",
        style("[*]").cyan().bold(),
        summary.ports_scanned,
        summary.duration_ms as f64 / 1000.0,
        style(summary.open_ports).green().bold()
    );
}

/// Print the whole summary as pretty JSON to stdout.
pub fn print_json(summary: &ScanSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
