//! Field presence validation subsystem.
//!
//! # Responsibilities
//! - Define which fields a request must carry and where they live
//! - Decide presence per field (absent, null, falsy, or blank all fail)
//! - Gate HTTP routes, rejecting incomplete requests before handlers run
//!
//! # Data Flow
//! Configuration -> [`RequiredFields`] -> [`require_fields`] middleware
//! -> per-request [`ValidationResult`]
//!
//! # Design Decisions
//! - The presence check is pure and knows nothing about HTTP; the
//!   middleware owns all request plumbing
//! - Missing fields are reported in configuration order so clients see a
//!   stable list

pub mod fields;
pub mod middleware;
pub mod source;

pub use fields::{FieldMap, RequiredFields, ValidationResult};
pub use middleware::require_fields;
pub use source::DataSource;
