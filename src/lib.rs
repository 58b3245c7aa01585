//! Field presence validation service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod validation;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use validation::{DataSource, RequiredFields, ValidationResult};
