//! netsweep - remote scan-trigger API
//!
//! A small HTTP service: a client authenticates with a shared passphrase,
//! names a pre-configured network segment, and receives the list of hosts
//! the external discovery tool observed as reachable.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── domain/          # Segments, registry, credential gate, rejections
//! ├── application/     # The scan orchestration pipeline
//! ├── infrastructure/  # Discovery adapters (nmap subprocess, simulated)
//! ├── presentation/    # axum handlers, DTOs, routes
//! ├── config/          # Strongly-typed configuration with env overrides
//! └── logging.rs       # Structured logging with tracing
//! ```
//!
//! Environment variables use the `NETSWEEP__` prefix with double
//! underscore separators:
//!
//! ```bash
//! NETSWEEP__SERVER__PORT=8000
//! NETSWEEP__SCANNER__SHARED_SECRET=...
//! NETSWEEP__SCANNER__MODE=live
//! ```

mod app;
mod logging;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use app::create_app;
pub use config::Config;
pub use logging::init_tracing;
