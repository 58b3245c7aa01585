//! Field presence validation service.
//!
//! An HTTP service built with Tokio and Axum that rejects requests missing
//! required fields before they reach any handler.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                  FIELDGATE                    │
//!                  │                                               │
//!   Client ───────▶│  request_id ─▶ trace ─▶ metrics ─▶ limits    │
//!                  │                                   │           │
//!                  │                                   ▼           │
//!                  │                          ┌──────────────┐     │
//!                  │              reject 400 ◀│  field gate  │     │
//!                  │                          └──────┬───────┘     │
//!                  │                                 │ pass        │
//!                  │                                 ▼             │
//!                  │         ┌────────┐  ┌────────┐  ┌─────────┐  │
//!   Client ◀───────│         │ submit │  │ upload │  │ static  │  │
//!                  │         └────────┘  └────────┘  └─────────┘  │
//!                  │                                               │
//!                  │  Cross-cutting: config, observability,        │
//!                  │                 lifecycle                     │
//!                  └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

use fieldgate::config::{self, ConfigError, ObservabilityConfig, ServiceConfig};
use fieldgate::http::HttpServer;
use fieldgate::lifecycle::{shutdown_signal, Shutdown};
use fieldgate::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "fieldgate", version, about = "Field presence validation service")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config/fieldgate.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_service_config(&cli.config) {
        Ok(config) => config,
        Err(error) => {
            logging::init(&ObservabilityConfig::default());
            tracing::error!(
                path = %cli.config.display(),
                error = %error,
                "Failed to load configuration"
            );
            return Err(error.into());
        }
    };

    logging::init(&config.observability);

    tracing::info!("fieldgate v{} starting", env!("CARGO_PKG_VERSION"));
    if cli.config.exists() {
        tracing::info!(path = %cli.config.display(), "Configuration loaded");
    } else {
        tracing::info!(
            path = %cli.config.display(),
            "Config file not found, using defaults"
        );
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        fields = ?config.validation.fields,
        source = ?config.validation.source,
        request_timeout_secs = config.limits.request_timeout_secs,
        "Configuration active"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Translate OS signals into the internal shutdown trigger
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.listener();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_service_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    if path.exists() {
        config::load_config(path)
    } else {
        Ok(ServiceConfig::default())
    }
}
