//! Scan pipeline rejection taxonomy
//!
//! These are the only error values that cross the API boundary. Internal
//! failures (tool diagnostics, io errors) live in
//! [`crate::infrastructure::discovery::DiscoveryError`] and are mapped into
//! this taxonomy explicitly by the use case, never converted implicitly.

use thiserror::Error;

/// Terminal, non-retryable outcome of a failed scan request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanRejection {
    /// Missing or incorrect secret, or a payload that could not be decoded
    #[error("Credential check failed")]
    BadCredential,

    /// The requested segment name is not in the registry
    #[error("Unknown segment: {name}")]
    UnknownSegment { name: String },

    /// The discovery tool failed; details are in the server logs only
    #[error("Discovery run failed")]
    DiscoveryFailure,
}
