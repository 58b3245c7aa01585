//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, limits, and directory settings
//! - Return all validation errors, not just the first
//!
//! # Design Decisions
//! - Validation is a pure function: `ServiceConfig` → `Result<(), Vec<ValidationError>>`
//! - Runs before the config is accepted into the system
//! - The gate's field list is deliberately not validated: an empty list is a
//!   legal always-valid gate, and duplicate names are permitted

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending setting (e.g., "listener.bind_address").
    pub setting: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    fn new(setting: &str, message: impl Into<String>) -> Self {
        Self {
            setting: setting.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.setting, self.message)
    }
}

/// Check a parsed config for semantic problems.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("not a valid socket address: {:?}", config.listener.bind_address),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "not a valid socket address: {:?}",
                config.observability.metrics_address
            ),
        ));
    }

    if config.limits.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "limits.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::new(
            "limits.max_body_bytes",
            "must be greater than zero",
        ));
    }

    if config.upload.enabled {
        if config.upload.dir.trim().is_empty() {
            errors.push(ValidationError::new(
                "upload.dir",
                "must not be empty when uploads are enabled",
            ));
        }
        if config.upload.field_name.trim().is_empty() {
            errors.push(ValidationError::new(
                "upload.field_name",
                "must not be empty when uploads are enabled",
            ));
        }
    }

    if config.static_files.enabled && config.static_files.dir.trim().is_empty() {
        errors.push(ValidationError::new(
            "static_files.dir",
            "must not be empty when static hosting is enabled",
        ));
    }

    if config.cors.enabled {
        for origin in &config.cors.allowed_origins {
            let well_formed = Url::parse(origin)
                .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
                .unwrap_or(false);
            if !well_formed {
                errors.push(ValidationError::new(
                    "cors.allowed_origins",
                    format!("not a valid http(s) origin: {origin:?}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
