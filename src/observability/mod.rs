//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     -> logging.rs (structured log events)
//!     -> metrics.rs (counters, histograms)
//!
//! Consumers:
//!     -> Log aggregation (stdout)
//!     -> Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log events via the trace layer
//! - Metrics are cheap (atomic increments)
//! - The field gate itself stays silent; only the outer layers observe

pub mod logging;
pub mod metrics;
