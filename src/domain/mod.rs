//! Domain Layer - Core business logic and entities
//!
//! Segments, the segment registry, the credential gate, and the
//! outward-facing rejection taxonomy for the scan pipeline.

pub mod entities;
pub mod errors;
pub mod registry;
pub mod secret;

pub use entities::{ScanResult, Segment};
pub use errors::ScanRejection;
pub use registry::SegmentRegistry;
pub use secret::SharedSecret;
