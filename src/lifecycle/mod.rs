//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Trigger -> Stop accepting -> Drain in-flight requests -> Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT -> Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - One coordinator owns the signal; everything else holds listeners
//! - Dropping the coordinator releases listeners, so tests and early
//!   exits never deadlock

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::shutdown_signal;
