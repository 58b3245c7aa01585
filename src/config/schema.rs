//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files, and
//! every section has defaults so a missing or partial file still yields a
//! runnable service.

use serde::{Deserialize, Serialize};

use crate::validation::DataSource;

/// Root configuration for the validation gate service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Field validation gate applied to the submit route.
    pub validation: ValidationConfig,

    /// File upload handling.
    pub upload: UploadConfig,

    /// Static file hosting.
    pub static_files: StaticConfig,

    /// Cross-origin resource sharing.
    pub cors: CorsConfig,

    /// Request timeout and body size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Field validation gate configuration.
///
/// `fields` and `source` are read once at startup to construct the gate;
/// the gate itself is immutable afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Field names that must be present and non-blank, in reporting order.
    /// Duplicates are permitted and reported once per occurrence.
    pub fields: Vec<String>,

    /// Which part of the request to inspect: "body", "query", or "params".
    pub source: DataSource,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                "name".to_string(),
                "email".to_string(),
                "password".to_string(),
            ],
            source: DataSource::Body,
        }
    }
}

/// File upload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Enable the upload route.
    pub enabled: bool,

    /// Directory uploaded files are stored under.
    pub dir: String,

    /// Multipart field name that carries the file.
    pub field_name: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: "public/uploads".to_string(),
            field_name: "file".to_string(),
        }
    }
}

/// Static file hosting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Enable static file serving as the router fallback.
    pub enabled: bool,

    /// Directory to serve. Stored uploads are reachable through it when it
    /// contains the upload directory.
    pub dir: String,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: "public".to_string(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable the CORS layer.
    pub enabled: bool,

    /// Origins allowed to call the service with credentials.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_body_bytes: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (e.g., "info" or "fieldgate=debug,tower_http=debug").
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "fieldgate=debug,tower_http=debug".to_string(),
            metrics_enabled: true,
            metrics_address: "127.0.0.1:9100".to_string(),
        }
    }
}
