//! Service identification based on well-known port numbers.
//!
//! Best-effort only: the table records convention, not fact. A lookup miss is
//! a normal outcome, reported via the `"Unknown"` sentinel rather than an
//! error.

use crate::types::Port;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Sentinel returned when a port has no well-known TCP service.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Static map of well-known TCP ports to service names.
static TCP_SERVICES: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (20, "ftp-data"),
        (21, "ftp"),
        (22, "ssh"),
        (23, "telnet"),
        (25, "smtp"),
        (53, "dns"),
        (79, "finger"),
        (80, "http"),
        (88, "kerberos"),
        (110, "pop3"),
        (111, "rpcbind"),
        (119, "nntp"),
        (135, "msrpc"),
        (139, "netbios-ssn"),
        (143, "imap"),
        (179, "bgp"),
        (389, "ldap"),
        (443, "https"),
        (445, "microsoft-ds"),
        (465, "smtps"),
        (514, "syslog"),
        (515, "printer"),
        (548, "afp"),
        (554, "rtsp"),
        (587, "submission"),
        (631, "ipp"),
        (636, "ldaps"),
        (873, "rsync"),
        (993, "imaps"),
        (995, "pop3s"),
        (1080, "socks"),
        (1194, "openvpn"),
        (1433, "mssql"),
        (1521, "oracle"),
        (1723, "pptp"),
        (1883, "mqtt"),
        (2049, "nfs"),
        (2181, "zookeeper"),
        (2375, "docker"),
        (3128, "squid"),
        (3306, "mysql"),
        (3389, "rdp"),
        (3690, "svn"),
        (5060, "sip"),
        (5222, "xmpp-client"),
        (5432, "postgresql"),
        (5672, "amqp"),
        (5900, "vnc"),
        (5984, "couchdb"),
        (6379, "redis"),
        (6667, "irc"),
        (8000, "http-alt"),
        (8080, "http-proxy"),
        (8443, "https-alt"),
        (8888, "http-alt"),
        (9042, "cassandra"),
        (9090, "prometheus"),
        (9092, "kafka"),
        (9200, "elasticsearch"),
        (9418, "git"),
        (11211, "memcached"),
        (27017, "mongodb"),
    ])
});

/// Look up the probable TCP service name for a port.
///
/// Returns `None` if the port is not in the well-known services table.
pub fn lookup(port: Port) -> Option<&'static str> {
    TCP_SERVICES.get(&port.as_u16()).copied()
}

/// Get the service name for a port, falling back to [`UNKNOWN_SERVICE`].
///
/// Never fails; a miss is a normal outcome.
pub fn service_name(port: Port) -> &'static str {
    lookup(port).unwrap_or(UNKNOWN_SERVICE)
}
