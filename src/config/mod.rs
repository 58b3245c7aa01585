//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     -> loader.rs (parse & deserialize)
//!     -> validation.rs (semantic checks)
//!     -> ServiceConfig (validated, immutable)
//!     -> consumed once at startup by the server builder
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the validation gate is constructed
//!   from it and never changes afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ObservabilityConfig, ServiceConfig, UploadConfig};
