//! Configuration validation module

use std::collections::HashSet;

use crate::config::{LoggingConfig, ScannerConfig, ServerConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Scanner configuration error: {message}")]
    Scanner { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn scanner(message: impl Into<String>) -> Self {
        Self::Scanner {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // u16 cannot exceed 65535, so only zero needs checking
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty"));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl Validate for ScannerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // An empty secret would let an empty scan_password through the gate
        if self.shared_secret.is_empty() {
            return Err(ValidationError::scanner("Shared secret cannot be empty"));
        }

        if self.executable.is_empty() {
            return Err(ValidationError::scanner(
                "Discovery executable cannot be empty",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ValidationError::scanner(
                "Discovery timeout must be greater than zero",
            ));
        }

        if self.segments.is_empty() {
            return Err(ValidationError::scanner(
                "At least one segment must be configured",
            ));
        }

        let mut seen = HashSet::new();
        for segment in &self.segments {
            if segment.name.is_empty() {
                return Err(ValidationError::scanner("Segment name cannot be empty"));
            }
            if segment.range.is_empty() {
                return Err(ValidationError::scanner(format!(
                    "Segment '{}' has an empty range",
                    segment.name
                )));
            }
            if !seen.insert(segment.name.as_str()) {
                return Err(ValidationError::scanner(format!(
                    "Duplicate segment name '{}'",
                    segment.name
                )));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(ValidationError::logging(format!(
                "Unknown log format '{}', expected 'json' or 'pretty'",
                other
            ))),
        }
    }
}
