//! Application Layer - Use cases

pub mod use_cases;

pub use use_cases::ScanSegmentUseCase;
