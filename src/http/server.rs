//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Attach the field gate to the submit route
//! - Wire up middleware (request IDs, tracing, metrics, timeouts, limits, CORS)
//! - Serve static assets as the router fallback
//! - Bind the server to a listener and drive graceful shutdown
//!
//! # Design Decisions
//! - The gate is a route layer, so health checks, uploads, and static
//!   assets are never field-checked
//! - CORS sits inside the stack but outside the routes, letting preflight
//!   requests short-circuit before the gate sees them

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ServiceConfig, UploadConfig};
use crate::http::handlers;
use crate::http::request_id::request_id_middleware;
use crate::lifecycle::ShutdownListener;
use crate::observability::metrics;
use crate::validation::{require_fields, RequiredFields};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upload: UploadConfig,
}

/// HTTP server hosting the gated routes.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let gate = Arc::new(RequiredFields::with_source(
            config.validation.fields.clone(),
            config.validation.source,
        ));

        let state = AppState {
            upload: config.upload.clone(),
        };

        let router = Self::build_router(&config, gate, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, gate: Arc<RequiredFields>, state: AppState) -> Router {
        let mut router = Router::new()
            .route(
                "/submit",
                post(handlers::submit)
                    .route_layer(middleware::from_fn_with_state(gate, require_fields)),
            )
            .route("/health", get(handlers::health));

        if config.upload.enabled {
            router = router.route("/upload", post(handlers::upload));
        }

        if config.static_files.enabled {
            router = router.fallback_service(ServeDir::new(&config.static_files.dir));
        }

        let mut router = router.with_state(state);

        if config.cors.enabled {
            router = router.layer(cors_layer(&config.cors.allowed_origins));
        }

        // Later layers wrap earlier ones, so requests traverse this list
        // bottom to top.
        router
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            )))
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            fields = ?self.config.validation.fields,
            source = ?self.config.validation.source,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// CORS layer allowing the configured origins with credentials.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
