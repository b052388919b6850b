//! API response models

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ScanResult;

/// Response model for a completed scan
#[derive(Debug, Serialize, ToSchema)]
pub struct ScanResponse {
    /// Segment name as configured
    #[schema(example = "testvlan111")]
    pub name: String,

    /// Target range handed to the discovery tool
    #[schema(example = "127.0.0.50-250")]
    pub nmap_range: String,

    /// When the scan ran
    pub last_scanned_date: DateTime<Utc>,

    /// Hosts observed as reachable, in tool-report order
    pub responsive_hosts: Vec<String>,

    /// Number of responsive hosts
    #[schema(example = 2)]
    pub hosts_alive: usize,
}

impl From<ScanResult> for ScanResponse {
    fn from(result: ScanResult) -> Self {
        Self {
            name: result.segment_name,
            nmap_range: result.range,
            last_scanned_date: result.scanned_at,
            hosts_alive: result.host_count,
            responsive_hosts: result.reachable_hosts,
        }
    }
}

/// Flat error response model
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always "error"
    #[schema(example = "error")]
    pub status: &'static str,

    /// Outward-facing error label; never carries internal diagnostics
    #[schema(example = "forbidden")]
    pub error: &'static str,
}

impl ErrorResponse {
    pub fn new(error: &'static str) -> Self {
        Self {
            status: "error",
            error,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: &'static str,

    #[schema(example = "0.1.0")]
    pub version: &'static str,

    pub uptime_seconds: u64,
}
