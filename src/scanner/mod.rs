//! Scanner module - the concurrent scan engine.
//!
//! The coordinator fans one probe per port out over the tokio runtime,
//! bounded by a semaphore, and streams findings to the caller's sink as they
//! arrive. A scan is one call to [`run_scan`]: dispatch, drain, done. Nothing
//! is shared across probes except the concurrency limiter, and nothing
//! outlives the call except the returned summary.

pub mod probe;

pub use probe::{probe, PortFinding};

use crate::error::{ScanError, ScanResult};
use crate::progress::Spinner;
use crate::types::{Port, ScanTarget};
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::debug;

/// How many probe futures the stream keeps queued. The semaphore enforces
/// the actual concurrency bound; the buffer just keeps it saturated.
const PROBE_BUFFER: usize = 1000;

/// Configuration for a scan, immutable once constructed.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    concurrency: usize,
    timeout: Duration,
    progress: bool,
}

impl ScanConfig {
    /// Create a validated scan configuration.
    ///
    /// Rejects a zero concurrency bound or a zero timeout up front rather
    /// than attempting a degraded scan.
    pub fn new(concurrency: usize, timeout: Duration) -> ScanResult<Self> {
        if concurrency == 0 {
            return Err(ScanError::InvalidConcurrency);
        }
        if timeout.is_zero() {
            return Err(ScanError::InvalidTimeout);
        }
        Ok(Self {
            concurrency,
            timeout,
            progress: false,
        })
    }

    /// Enable the progress spinner for this scan.
    pub fn with_progress(mut self) -> Self {
        self.progress = true;
        self
    }

    /// Maximum number of concurrently in-flight probes.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Per-connection timeout applied to each probe.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Aggregated outcome of one scan, with findings sorted by port for stable
/// output.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub host: String,
    pub addr: String,
    pub ports_scanned: usize,
    pub open_ports: usize,
    pub duration_ms: u64,
    pub findings: Vec<PortFinding>,
}

/// Execute a complete port scan.
///
/// Every port in `target.ports` is probed exactly once, with at most
/// `config.concurrency()` probes in flight at any instant. Each finding is
/// passed to `on_finding` as soon as its probe produces it; findings for
/// different ports arrive in no particular order. The function returns only
/// after every dispatched probe has finished and the progress spinner has
/// been stopped.
pub async fn run_scan<F>(target: &ScanTarget, config: &ScanConfig, mut on_finding: F) -> ScanSummary
where
    F: FnMut(&PortFinding),
{
    let started = Instant::now();
    let total = target.ports.len();
    debug!(
        host = %target.host,
        addr = %target.addr,
        ports = total,
        concurrency = config.concurrency,
        "scan started"
    );

    let spinner = config.progress.then(Spinner::start);

    let addr = target.addr;
    let connect_timeout = config.timeout;
    let outcomes = probe_all(target.ports.iter(), config.concurrency, move |port| {
        probe(addr, port, connect_timeout)
    });
    futures::pin_mut!(outcomes);

    let mut findings = Vec::new();
    while let Some(outcome) = outcomes.next().await {
        if let Some(finding) = outcome {
            debug!(port = %finding.port, service = finding.service, "open port");
            on_finding(&finding);
            findings.push(finding);
        }
    }
    // The stream is exhausted: every dispatched probe has finished.

    if let Some(spinner) = spinner {
        spinner.finish();
    }

    findings.sort_by_key(|f| f.port);
    let open_ports = findings.len();
    let duration_ms = started.elapsed().as_millis() as u64;
    debug!(open_ports, duration_ms, "scan complete");

    ScanSummary {
        host: target.host.clone(),
        addr: target.addr.to_string(),
        ports_scanned: total,
        open_ports,
        duration_ms,
        findings,
    }
}

/// Run `prober` once per port with at most `limit` invocations in flight,
/// yielding outcomes as they complete, in completion order.
///
/// Generic over the prober so the concurrency bound can be exercised with an
/// instrumented closure in tests.
fn probe_all<I, F, Fut, T>(ports: I, limit: usize, prober: F) -> impl Stream<Item = T>
where
    I: Iterator<Item = Port>,
    F: Fn(Port) -> Fut + Clone,
    Fut: Future<Output = T>,
{
    let semaphore = Arc::new(Semaphore::new(limit));

    stream::iter(ports)
        .map(move |port| {
            let sem = Arc::clone(&semaphore);
            let prober = prober.clone();
            async move {
                // Acquire never fails: the semaphore is never closed.
                let _permit = sem.acquire().await.unwrap();
                prober(port).await
            }
        })
        .buffer_unordered(limit.max(PROBE_BUFFER))
}
