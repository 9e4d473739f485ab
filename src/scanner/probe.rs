//! Single-port TCP connect probe.
//!
//! One probe makes at most one connection attempt. A port that refuses,
//! times out, or is unreachable is the overwhelmingly common case at scale,
//! so that outcome is typed as the absence of a finding rather than an error.

use crate::banner::read_banner;
use crate::services::service_name;
use crate::types::Port;
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// An open port discovered by a probe.
///
/// A finding is only ever constructed for a successful connection, consumed
/// once by the presenter, and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct PortFinding {
    /// The port that accepted the connection.
    pub port: Port,
    /// Always true; closed and filtered ports produce no finding at all.
    pub is_open: bool,
    /// Well-known service name for the port, or the "Unknown" sentinel.
    pub service: &'static str,
    /// Initial data the service sent after the handshake, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

impl PortFinding {
    fn new(port: Port, service: &'static str, banner: Option<String>) -> Self {
        Self {
            port,
            is_open: true,
            service,
            banner,
        }
    }
}

/// Probe a single TCP port.
///
/// Opens one connection to `(ip, port)` bounded by `connect_timeout`. On
/// success the service name is resolved, a banner read is attempted with the
/// same timeout, and the connection is closed on every exit path (the stream
/// drops at the end of this function). Any failure to establish the
/// connection yields `None`.
pub async fn probe(ip: IpAddr, port: Port, connect_timeout: Duration) -> Option<PortFinding> {
    let addr = SocketAddr::new(ip, port.as_u16());

    let mut stream = match timeout(connect_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => stream,
        // Refused, unreachable, or timed out: expected for closed ports.
        Ok(Err(_)) | Err(_) => return None,
    };

    let service = service_name(port);
    let banner = read_banner(&mut stream, connect_timeout).await;

    Some(PortFinding::new(port, service, banner))
}
