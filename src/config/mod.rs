//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub scanner: ScannerConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub host: String,
    /// Port the listener binds to
    pub port: u16,
    /// Whether the Swagger UI is served at /docs
    pub enable_docs: bool,
    /// Per-request timeout applied by the middleware stack (in seconds)
    pub request_timeout_seconds: u64,
    /// CORS allowed origins ("*" for any)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_docs: true,
            // Slightly above the scanner timeout so discovery failures are
            // reported by the pipeline rather than cut off by the middleware
            request_timeout_seconds: 330,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Which discovery strategy the service runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMode {
    /// Invoke the external discovery tool
    Live,
    /// Replay a fixed transcript through the output parser
    #[default]
    Simulated,
}

/// Scan pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Discovery strategy; a deployment setting, deliberately independent
    /// of the shared secret value
    pub mode: DiscoveryMode,
    /// Passphrase clients must present in `scan_password`
    pub shared_secret: String,
    /// Path to the discovery tool (or a bare name resolved via PATH)
    pub executable: String,
    /// Upper bound on a single discovery run (in seconds)
    pub timeout_seconds: u64,
    /// Segments eligible for scanning
    pub segments: Vec<SegmentConfig>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            mode: DiscoveryMode::Simulated,
            shared_secret: "DONOTSCAN".to_string(),
            executable: "nmap".to_string(),
            timeout_seconds: 300,
            segments: vec![SegmentConfig {
                name: "testvlan111".to_string(),
                range: "127.0.0.50-250".to_string(),
            }],
        }
    }
}

/// A named network segment and its tool-compatible target range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub name: String,
    pub range: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (overridden by RUST_LOG)
    pub level: String,
    /// Output format: "json" or "pretty"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.scanner.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Add local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("NETSWEEP").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;

        // A failure here is fatal to startup; there is no degraded mode
        config.validate()?;

        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
