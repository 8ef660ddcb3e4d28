//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::EstimatorConfig;
use crate::services::{PreviewStore, QuoteClient, QuoteError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the pricing webhook client, and the preview store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: EstimatorConfig,
    quote: QuoteClient,
    previews: PreviewStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook HTTP client fails to build.
    pub fn new(config: EstimatorConfig) -> Result<Self, QuoteError> {
        let quote = QuoteClient::new(config.webhook.as_ref())?;
        let previews = PreviewStore::new();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                quote,
                previews,
            }),
        })
    }

    /// Get a reference to the estimator configuration.
    #[must_use]
    pub fn config(&self) -> &EstimatorConfig {
        &self.inner.config
    }

    /// Get a reference to the pricing webhook client.
    #[must_use]
    pub fn quote(&self) -> &QuoteClient {
        &self.inner.quote
    }

    /// Get a reference to the upload preview store.
    #[must_use]
    pub fn previews(&self) -> &PreviewStore {
        &self.inner.previews
    }
}
