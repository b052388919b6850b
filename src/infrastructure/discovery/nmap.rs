//! Live discovery via the external nmap binary

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

use crate::config::ScannerConfig;

use super::{DiscoveryError, HostDiscoverer, parse_transcript};

/// Runs the configured discovery tool in ping-scan mode against a target
/// range and parses its stdout transcript.
pub struct NmapDiscoverer {
    executable: String,
    timeout: Duration,
}

impl NmapDiscoverer {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            executable: config.executable.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[async_trait]
impl HostDiscoverer for NmapDiscoverer {
    async fn discover(&self, range: &str) -> Result<Vec<String>, DiscoveryError> {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("-sn").arg(range).kill_on_drop(true);

        debug!(executable = %self.executable, range = %range, "Running host discovery");

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| DiscoveryError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DiscoveryError::NotInstalled(self.executable.clone())
                } else {
                    DiscoveryError::SpawnFailed(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(
                exit_code = output.status.code(),
                stderr = %stderr,
                "Discovery tool failed"
            );
            return Err(DiscoveryError::ExecutionFailed {
                code: output.status.code(),
                stderr,
            });
        }

        let transcript = String::from_utf8_lossy(&output.stdout);
        let hosts = parse_transcript(&transcript);
        debug!(host_count = hosts.len(), "Parsed discovery transcript");
        Ok(hosts)
    }
}
