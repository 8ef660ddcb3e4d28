//! Benchtop Estimator web library.
//!
//! This crate provides the estimator site as a library, allowing it to be
//! tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the application router.
///
/// Static assets and the observability layers are added by the binary;
/// tests can exercise everything else through this router directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
