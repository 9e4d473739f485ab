//! Banner grabbing from established TCP connections.
//!
//! Many services volunteer an identifying line immediately after the
//! handshake (SMTP greetings, SSH version strings). This module makes exactly
//! one bounded read attempt for it; everything that can go wrong on the read
//! side degrades to "no banner".

use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Maximum bytes to read for a banner.
const MAX_BANNER_BYTES: usize = 1024;

/// Attempt to read a service banner from an open connection.
///
/// Performs a single read bounded by `read_timeout`. Returns `None` when the
/// read times out, the peer closes without sending data, the read fails, or
/// the decoded text is empty after trimming. The stream is left open; the
/// caller owns its lifecycle.
pub async fn read_banner(stream: &mut TcpStream, read_timeout: Duration) -> Option<String> {
    let mut buf = vec![0u8; MAX_BANNER_BYTES];

    let n = match timeout(read_timeout, stream.read(&mut buf)).await {
        Ok(Ok(n)) if n > 0 => n,
        // Timeout, clean close with no data, or a read error: no banner.
        _ => return None,
    };

    let text = sanitize(&buf[..n]);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Decode raw banner bytes into a single printable line.
///
/// Undecodable sequences are replaced rather than rejected; control
/// characters become spaces and runs of whitespace collapse so multi-line
/// banners display on one line.
fn sanitize(data: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(data);

    let mut result = String::with_capacity(decoded.len());
    let mut prev_space = false;
    for c in decoded.chars() {
        if c.is_control() || c == ' ' {
            if !prev_space {
                result.push(' ');
            }
            prev_space = true;
        } else {
            result.push(c);
            prev_space = false;
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    const SHORT: Duration = Duration::from_millis(200);

    async fn local_listener() -> (TcpListener, SocketAddr) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, addr)
    }

    #[test]
    fn test_sanitize_trims_line_endings() {
        assert_eq!(sanitize(b"SSH-2.0-OpenSSH_8.9\r\n"), "SSH-2.0-OpenSSH_8.9");
        assert_eq!(sanitize(b"HELLO\n"), "HELLO");
    }

    #[test]
    fn test_sanitize_collapses_multiline() {
        assert_eq!(sanitize(b"220 mail ready\r\n250 ok\r\n"), "220 mail ready 250 ok");
    }

    #[test]
    fn test_sanitize_survives_invalid_utf8() {
        let text = sanitize(b"abc\xff\xfedef");
        assert!(text.starts_with("abc"));
        assert!(text.ends_with("def"));
    }

    #[test]
    fn test_sanitize_whitespace_only_is_empty() {
        assert_eq!(sanitize(b"  \r\n\t  "), "");
        assert_eq!(sanitize(b""), "");
    }

    #[tokio::test]
    async fn test_banner_from_talkative_service() {
        let (listener, addr) = local_listener().await;
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            sock.write_all(b"HELLO\n").await.unwrap();
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        let banner = read_banner(&mut stream, Duration::from_secs(1)).await;
        assert_eq!(banner.as_deref(), Some("HELLO"));
    }

    #[tokio::test]
    async fn test_no_banner_from_silent_service() {
        let (listener, addr) = local_listener().await;
        tokio::spawn(async move {
            let (_sock, _) = listener.accept().await.unwrap();
            // Hold the connection open without sending anything.
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        assert_eq!(read_banner(&mut stream, SHORT).await, None);
    }

    #[tokio::test]
    async fn test_no_banner_when_peer_closes_immediately() {
        let (listener, addr) = local_listener().await;
        tokio::spawn(async move {
            let (sock, _) = listener.accept().await.unwrap();
            drop(sock);
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        assert_eq!(read_banner(&mut stream, SHORT).await, None);
    }

    #[tokio::test]
    async fn test_whitespace_banner_is_no_banner() {
        let (listener, addr) = local_listener().await;
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            sock.write_all(b"\r\n  \r\n").await.unwrap();
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        assert_eq!(read_banner(&mut stream, Duration::from_secs(1)).await, None);
    }
}
