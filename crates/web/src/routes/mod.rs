//! HTTP route handlers for the estimator site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Estimator page
//! GET  /health                  - Health check
//!
//! # Estimate (HTMX fragments)
//! POST /estimate                - Run an estimate (returns quote or error fragment)
//! POST /estimate/preview        - Upload a kitchen photo (returns preview fragment)
//! GET  /estimate/preview/{id}   - Serve stored preview bytes
//! ```

pub mod estimator;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the estimator routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(estimator::page))
        .route("/estimate", post(estimator::estimate))
        .route("/estimate/preview", post(estimator::upload_preview))
        .route("/estimate/preview/{id}", get(estimator::preview))
}
