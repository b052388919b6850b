//! Application setup and wiring

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tracing::warn;

use crate::application::ScanSegmentUseCase;
use crate::config::{Config, DiscoveryMode};
use crate::domain::{SegmentRegistry, SharedSecret};
use crate::infrastructure::discovery::{HostDiscoverer, NmapDiscoverer, SimulatedDiscoverer};
use crate::presentation::{AppState, create_router};

/// Assembles the application router from a validated configuration.
///
/// The discovery strategy is a deployment decision made here, once, from
/// `scanner.mode`; the pipeline itself never switches modes at runtime.
pub fn create_app(config: Config) -> Router {
    let discoverer: Arc<dyn HostDiscoverer> = match config.scanner.mode {
        DiscoveryMode::Live => Arc::new(NmapDiscoverer::new(&config.scanner)),
        DiscoveryMode::Simulated => {
            warn!("Discovery is in simulated mode; no real probes will be sent");
            Arc::new(SimulatedDiscoverer)
        }
    };

    let use_case = ScanSegmentUseCase::new(
        SharedSecret::new(config.scanner.shared_secret.clone()),
        SegmentRegistry::from_config(&config.scanner.segments),
        discoverer,
    );

    let config = Arc::new(config);
    let state = AppState {
        scan_use_case: Arc::new(use_case),
        config: config.clone(),
        startup_time: Instant::now(),
    };

    create_router(state, config.as_ref())
}
