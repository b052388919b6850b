//! Scan orchestration use case

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::domain::{ScanRejection, ScanResult, SegmentRegistry, SharedSecret};
use crate::infrastructure::discovery::HostDiscoverer;

/// Inbound scan request payload.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ScanRequest {
    /// Name of a pre-configured segment
    #[serde(default)]
    #[schema(example = "testvlan111")]
    pub name: String,
    /// Shared scan passphrase
    #[serde(default)]
    pub scan_password: String,
}

/// Orchestrates a single scan request through the validation-and-execution
/// pipeline: payload decode, credential gate, segment lookup, discovery,
/// result assembly. Each failing stage maps to exactly one
/// [`ScanRejection`]; no stage is retried.
pub struct ScanSegmentUseCase {
    secret: SharedSecret,
    registry: SegmentRegistry,
    discoverer: Arc<dyn HostDiscoverer>,
}

impl ScanSegmentUseCase {
    pub fn new(
        secret: SharedSecret,
        registry: SegmentRegistry,
        discoverer: Arc<dyn HostDiscoverer>,
    ) -> Self {
        Self {
            secret,
            registry,
            discoverer,
        }
    }

    /// Runs the pipeline over a raw request body.
    ///
    /// The body is decoded here rather than by the transport layer so that
    /// an undecodable payload is classified like a missing credential
    /// (403-class) instead of the framework's generic decode rejection.
    pub async fn execute(&self, body: &[u8]) -> Result<ScanResult, ScanRejection> {
        let request: ScanRequest = serde_json::from_slice(body).map_err(|e| {
            debug!(error = %e, "Rejecting undecodable scan payload");
            ScanRejection::BadCredential
        })?;

        if !self.secret.verify(&request.scan_password) {
            debug!("Rejecting scan request with bad credential");
            return Err(ScanRejection::BadCredential);
        }

        // An empty name is simply a registry miss; "credential" and
        // "segment" are independent fields validated at different stages
        let segment = self
            .registry
            .lookup(&request.name)
            .ok_or_else(|| ScanRejection::UnknownSegment {
                name: request.name.clone(),
            })?
            .clone();

        info!(segment = %segment.name, range = %segment.range, "Starting discovery scan");

        // The internal diagnostic stays on the operator side; clients only
        // ever see the opaque DiscoveryFailure
        let hosts = self
            .discoverer
            .discover(&segment.range)
            .await
            .map_err(|e| {
                error!(segment = %segment.name, error = %e, "Discovery scan failed");
                ScanRejection::DiscoveryFailure
            })?;

        info!(segment = %segment.name, host_count = hosts.len(), "Discovery scan completed");

        Ok(ScanResult::new(&segment, hosts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SegmentConfig;
    use crate::infrastructure::discovery::DiscoveryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedDiscoverer {
        hosts: Vec<String>,
        seen_ranges: Mutex<Vec<String>>,
    }

    impl FixedDiscoverer {
        fn new(hosts: Vec<String>) -> Self {
            Self {
                hosts,
                seen_ranges: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HostDiscoverer for FixedDiscoverer {
        async fn discover(&self, range: &str) -> Result<Vec<String>, DiscoveryError> {
            self.seen_ranges.lock().unwrap().push(range.to_string());
            Ok(self.hosts.clone())
        }
    }

    struct FailingDiscoverer;

    #[async_trait]
    impl HostDiscoverer for FailingDiscoverer {
        async fn discover(&self, _range: &str) -> Result<Vec<String>, DiscoveryError> {
            Err(DiscoveryError::ExecutionFailed {
                code: Some(1),
                stderr: "Failed to resolve \"127.0.0.50-250\"".to_string(),
            })
        }
    }

    fn registry() -> SegmentRegistry {
        SegmentRegistry::from_config(&[SegmentConfig {
            name: "testvlan111".into(),
            range: "127.0.0.50-250".into(),
        }])
    }

    fn use_case(discoverer: Arc<dyn HostDiscoverer>) -> ScanSegmentUseCase {
        ScanSegmentUseCase::new(SharedSecret::new("DONOTSCAN"), registry(), discoverer)
    }

    #[tokio::test]
    async fn valid_request_yields_result() {
        let uc = use_case(Arc::new(FixedDiscoverer::new(vec![
            "127.0.0.50".into(),
            "127.0.0.51".into(),
        ])));
        let body = br#"{"name":"testvlan111","scan_password":"DONOTSCAN"}"#;

        let result = uc.execute(body).await.unwrap();
        assert_eq!(result.segment_name, "testvlan111");
        assert_eq!(result.range, "127.0.0.50-250");
        assert_eq!(result.reachable_hosts, vec!["127.0.0.50", "127.0.0.51"]);
        assert_eq!(result.host_count, 2);
    }

    #[tokio::test]
    async fn discovery_receives_the_configured_range() {
        let discoverer = Arc::new(FixedDiscoverer::new(vec![]));
        let uc = use_case(discoverer.clone());
        let body = br#"{"name":"testvlan111","scan_password":"DONOTSCAN"}"#;

        uc.execute(body).await.unwrap();
        assert_eq!(
            *discoverer.seen_ranges.lock().unwrap(),
            vec!["127.0.0.50-250"]
        );
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected_regardless_of_payload() {
        let uc = use_case(Arc::new(FixedDiscoverer::new(vec![])));
        let body = br#"{"name":"testvlan111","scan_password":"wrong"}"#;
        assert_eq!(
            uc.execute(body).await.unwrap_err(),
            ScanRejection::BadCredential
        );
    }

    #[tokio::test]
    async fn empty_secret_is_rejected() {
        let uc = use_case(Arc::new(FixedDiscoverer::new(vec![])));
        let body = br#"{"name":"testvlan111","scan_password":""}"#;
        assert_eq!(
            uc.execute(body).await.unwrap_err(),
            ScanRejection::BadCredential
        );
    }

    #[tokio::test]
    async fn missing_fields_default_to_empty_and_fail_the_gate() {
        let uc = use_case(Arc::new(FixedDiscoverer::new(vec![])));
        assert_eq!(
            uc.execute(b"{}").await.unwrap_err(),
            ScanRejection::BadCredential
        );
    }

    #[tokio::test]
    async fn undecodable_payload_is_treated_as_bad_credential() {
        let uc = use_case(Arc::new(FixedDiscoverer::new(vec![])));
        assert_eq!(
            uc.execute(b"not json").await.unwrap_err(),
            ScanRejection::BadCredential
        );
        assert_eq!(
            uc.execute(b"").await.unwrap_err(),
            ScanRejection::BadCredential
        );
    }

    #[tokio::test]
    async fn unknown_segment_is_rejected_after_the_gate() {
        let uc = use_case(Arc::new(FixedDiscoverer::new(vec![])));
        let body = br#"{"name":"INVALIDVLAN","scan_password":"DONOTSCAN"}"#;
        assert_eq!(
            uc.execute(body).await.unwrap_err(),
            ScanRejection::UnknownSegment {
                name: "INVALIDVLAN".into()
            }
        );
    }

    #[tokio::test]
    async fn empty_segment_name_fails_at_segment_resolution() {
        let uc = use_case(Arc::new(FixedDiscoverer::new(vec![])));
        let body = br#"{"name":"","scan_password":"DONOTSCAN"}"#;
        assert_eq!(
            uc.execute(body).await.unwrap_err(),
            ScanRejection::UnknownSegment { name: String::new() }
        );
    }

    #[tokio::test]
    async fn discovery_failure_is_opaque() {
        let uc = use_case(Arc::new(FailingDiscoverer));
        let body = br#"{"name":"testvlan111","scan_password":"DONOTSCAN"}"#;
        let rejection = uc.execute(body).await.unwrap_err();
        assert_eq!(rejection, ScanRejection::DiscoveryFailure);
        // The rejection's display must not echo the tool diagnostic
        assert!(!rejection.to_string().contains("resolve"));
    }
}
