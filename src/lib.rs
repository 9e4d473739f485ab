//! # Sounder - A Concurrent TCP Connect Scanner
//!
//! Sounder probes a target host across a range of TCP ports, reports which
//! ports accept connections, and identifies the listening service via a
//! well-known port table and opportunistic banner grabbing.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use sounder::{run_scan, PortRange, ScanConfig, ScanTarget};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ports: PortRange = "1-1000".parse()?;
//!     let target = ScanTarget::resolve("192.168.1.10", ports).await?;
//!     let config = ScanConfig::new(100, Duration::from_secs(1))?;
//!
//!     let summary = run_scan(&target, &config, |finding| {
//!         println!("{} is open", finding.port);
//!     })
//!     .await;
//!
//!     println!("{} open ports", summary.open_ports);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated port, range, and target types
//! - [`scanner`] - The probe and the concurrent scan coordinator
//! - [`banner`] - Banner grabbing from established connections
//! - [`services`] - Well-known port to service name lookup
//! - [`progress`] - The scan spinner
//! - [`output`] - Result formatting
//! - [`error`] - Scan-level error types

pub mod banner;
pub mod cli;
pub mod error;
pub mod output;
pub mod progress;
pub mod scanner;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use error::{ScanError, ScanResult};
pub use scanner::{probe, run_scan, PortFinding, ScanConfig, ScanSummary};
pub use types::{Port, PortRange, ScanTarget};
