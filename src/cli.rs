//! Command-line interface definitions for sounder.
//!
//! Uses `clap` derive macros for declarative argument parsing. This layer is
//! thin glue: it validates nothing the engine's own constructors don't
//! already enforce.

use clap::Parser;

/// A concurrent TCP connect scanner with banner grabbing.
#[derive(Parser, Debug)]
#[command(name = "sounder")]
#[command(version)]
#[command(about = "A concurrent TCP connect scanner with banner grabbing", long_about = None)]
pub struct Args {
    /// Target IP address or hostname to scan
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Port range to scan, e.g. "1-1000" or a single port "80"
    #[arg(short, long, default_value = "1-1000")]
    pub ports: String,

    /// Maximum number of concurrently in-flight probes
    #[arg(short, long, default_value_t = 100)]
    pub concurrency: usize,

    /// Per-connection timeout in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    pub timeout: u64,

    /// Emit the scan summary as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sounder", "192.168.1.10"]).unwrap();
        assert_eq!(args.target, "192.168.1.10");
        assert_eq!(args.ports, "1-1000");
        assert_eq!(args.concurrency, 100);
        assert_eq!(args.timeout, 1000);
        assert!(!args.json);
        assert!(!args.no_progress);
    }

    #[test]
    fn test_explicit_flags() {
        let args = Args::try_parse_from([
            "sounder",
            "example.com",
            "-p",
            "1-800",
            "-c",
            "200",
            "-t",
            "500",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.ports, "1-800");
        assert_eq!(args.concurrency, 200);
        assert_eq!(args.timeout, 500);
        assert!(args.json);
    }

    #[test]
    fn test_target_is_required() {
        assert!(Args::try_parse_from(["sounder"]).is_err());
    }
}
