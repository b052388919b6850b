//! Host discovery adapters
//!
//! The scan pipeline depends on the [`HostDiscoverer`] abstraction; the
//! concrete strategy (live tool invocation or a deterministic simulated
//! transcript) is selected by deployment configuration at startup.

mod nmap;
mod output;
mod simulated;

pub use nmap::NmapDiscoverer;
pub use output::parse_transcript;
pub use simulated::SimulatedDiscoverer;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a discovery run.
///
/// These carry internal diagnostics (tool stderr, io errors) and are for
/// operator-side logging only. There is deliberately no conversion into
/// [`crate::domain::ScanRejection`]; the use case maps them explicitly so a
/// diagnostic string can never reach a response body.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Discovery tool not found: {0}")]
    NotInstalled(String),

    #[error("Failed to spawn discovery tool: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("Discovery tool exited with {code:?}: {stderr}")]
    ExecutionFailed { code: Option<i32>, stderr: String },

    #[error("Discovery timed out after {0} seconds")]
    Timeout(u64),
}

/// Strategy interface for probing a target range for reachable hosts.
///
/// Implementations return host addresses in the order the tool reported
/// them, duplicates included.
#[async_trait]
pub trait HostDiscoverer: Send + Sync {
    async fn discover(&self, range: &str) -> Result<Vec<String>, DiscoveryError>;
}
