//! Scan target resolution.
//!
//! A `ScanTarget` pairs the user's original host string with the address it
//! resolved to and the port range to sweep. Resolution happens exactly once,
//! before any probe is dispatched; an unresolvable host fails the whole scan
//! rather than failing per port.

use crate::types::PortRange;
use std::fmt;
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// A scan target that has been resolved to a concrete IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    /// The original input (hostname or IP string).
    pub host: String,
    /// The resolved IP address.
    pub addr: IpAddr,
    /// The port range this scan sweeps.
    pub ports: PortRange,
}

impl ScanTarget {
    /// Resolve a host string to a scan target.
    ///
    /// IP literals are used as-is; anything else goes through DNS and the
    /// first returned address wins.
    pub async fn resolve(host: &str, ports: PortRange) -> Result<Self, TargetError> {
        let host = host.trim();

        if let Ok(addr) = host.parse::<IpAddr>() {
            return Ok(Self {
                host: host.to_string(),
                addr,
                ports,
            });
        }

        let resolver =
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

        let response = resolver
            .lookup_ip(host)
            .await
            .map_err(|e| TargetError::DnsResolutionFailed(host.to_string(), e.to_string()))?;

        let addr = response
            .iter()
            .next()
            .ok_or_else(|| TargetError::NoAddressesFound(host.to_string()))?;

        Ok(Self {
            host: host.to_string(),
            addr,
            ports,
        })
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host == self.addr.to_string() {
            write!(f, "{}", self.addr)
        } else {
            write!(f, "{} ({})", self.host, self.addr)
        }
    }
}

/// Error type for target resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TargetError {
    #[error("failed to resolve hostname '{0}': {1}")]
    DnsResolutionFailed(String, String),
    #[error("no IP addresses found for hostname '{0}'")]
    NoAddressesFound(String),
}
