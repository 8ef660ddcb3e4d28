//! Estimator configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ESTIMATOR_HOST` - Bind address (default: 127.0.0.1)
//! - `ESTIMATOR_PORT` - Listen port (default: 3000)
//! - `ESTIMATOR_WEBHOOK_URL` - Pricing webhook endpoint. When unset, empty,
//!   or still a placeholder, the site runs in demo mode and synthesizes the
//!   fixed demo quote instead of making network calls.
//! - `ESTIMATOR_WEBHOOK_TIMEOUT_SECS` - Webhook request timeout (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;

/// Blocklist of common placeholder patterns (case-insensitive).
///
/// A webhook URL matching any of these is treated as "not configured yet"
/// and selects demo mode rather than failing at startup.
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "replace",
    "your-",
    "changeme",
    "placeholder",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Estimator application configuration.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Pricing webhook configuration; `None` selects demo mode
    pub webhook: Option<WebhookConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Pricing webhook configuration.
///
/// Implements `Debug` manually to redact the URL: Make-style webhook URLs
/// are capability URLs, so the path component is effectively a secret.
#[derive(Clone)]
pub struct WebhookConfig {
    /// Webhook endpoint URL
    pub url: SecretString,
    /// Per-request timeout for webhook calls
    pub timeout: Duration,
}

impl std::fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("url", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl EstimatorConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provided variable fails to parse. An
    /// absent or placeholder webhook URL is not an error - it selects demo
    /// mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ESTIMATOR_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ESTIMATOR_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ESTIMATOR_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ESTIMATOR_PORT".to_string(), e.to_string()))?;

        let webhook = webhook_from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            webhook,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Load the webhook configuration, if one is actually configured.
fn webhook_from_env() -> Result<Option<WebhookConfig>, ConfigError> {
    webhook_from_parts(
        get_optional_env("ESTIMATOR_WEBHOOK_URL"),
        get_optional_env("ESTIMATOR_WEBHOOK_TIMEOUT_SECS"),
    )
}

/// Build the webhook configuration from the raw variable values.
fn webhook_from_parts(
    url: Option<String>,
    timeout_secs: Option<String>,
) -> Result<Option<WebhookConfig>, ConfigError> {
    let Some(url) = url else {
        return Ok(None);
    };

    let url = url.trim().to_string();
    if url.is_empty() || is_placeholder(&url) {
        return Ok(None);
    }

    let timeout_secs = timeout_secs
        .unwrap_or_else(|| DEFAULT_WEBHOOK_TIMEOUT_SECS.to_string())
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("ESTIMATOR_WEBHOOK_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

    Ok(Some(WebhookConfig {
        url: SecretString::from(url),
        timeout: Duration::from_secs(timeout_secs),
    }))
}

/// Check whether a webhook URL still looks like an unconfigured placeholder.
fn is_placeholder(url: &str) -> bool {
    let lower = url.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
