//! Shared utilities for integration tests.

use tokio::net::TcpListener;

use fieldgate::config::ServiceConfig;
use fieldgate::http::HttpServer;
use fieldgate::lifecycle::Shutdown;

/// A running service instance bound to an ephemeral port.
pub struct TestService {
    pub base_url: String,
    shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Spawn the service on an ephemeral port with the given configuration.
///
/// The metrics exporter is always disabled; its fixed port would clash
/// between concurrently running tests.
pub async fn spawn_service(mut config: ServiceConfig) -> TestService {
    config.observability.metrics_enabled = false;
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.listener();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        base_url: format!("http://{addr}"),
        shutdown,
    }
}
