//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     -> server.rs (Axum setup, middleware stack)
//!     -> request_id.rs (assign correlation ID)
//!     -> [validation gate decides pass/reject]
//!     -> handlers.rs (submit, health, upload)
//!     -> Send to client
//! ```

pub mod handlers;
pub mod request_id;
pub mod server;

pub use request_id::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
