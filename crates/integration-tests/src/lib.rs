//! Integration tests for the Benchtop Estimator.
//!
//! Each test spawns the real router on an ephemeral port and drives it
//! over HTTP with reqwest. The external pricing webhook is either left
//! unconfigured (demo mode) or pointed at a local mockito server - no test
//! talks to a real pricing scenario.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p benchtop-integration-tests
//! ```

use std::time::Duration;

use benchtop_web::config::{EstimatorConfig, WebhookConfig};
use benchtop_web::state::AppState;
use secrecy::SecretString;

/// A configuration with no webhook: the server runs in demo mode.
#[must_use]
pub fn demo_config() -> EstimatorConfig {
    EstimatorConfig {
        host: std::net::Ipv4Addr::LOCALHOST.into(),
        port: 0,
        webhook: None,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// A configuration pointing the webhook at `url` (normally mockito).
#[must_use]
pub fn webhook_config(url: &str) -> EstimatorConfig {
    EstimatorConfig {
        webhook: Some(WebhookConfig {
            url: SecretString::from(url),
            timeout: Duration::from_secs(5),
        }),
        ..demo_config()
    }
}

/// Spawn the estimator app on an ephemeral port and return its base URL.
pub async fn spawn_app(config: EstimatorConfig) -> String {
    let state = AppState::new(config).expect("Failed to build application state");
    let app = benchtop_web::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{addr}")
}
