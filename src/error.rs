//! Error types for sounder.
//!
//! Uses `thiserror` for ergonomic error definitions.
//!
//! Only scan-level preconditions live here: a closed or filtered port is the
//! common case at scale and is represented as the absence of a finding, never
//! as an error.

use crate::types::{PortError, TargetError};
use thiserror::Error;

/// Errors that reject a scan before any probe is dispatched.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("concurrency must be greater than zero")]
    InvalidConcurrency,

    #[error("timeout must be greater than zero")]
    InvalidTimeout,

    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Target(#[from] TargetError),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
