//! Pricing webhook client.
//!
//! Posts the estimate payload to the configured webhook and decodes the
//! response tolerantly. When no webhook is configured the client runs in
//! demo mode: it sleeps briefly and returns the fixed demo quote, so the
//! page works end to end before any pricing scenario is connected.

use std::time::Duration;

use benchtop_core::{QuoteRequest, QuoteResult};
use thiserror::Error;
use tracing::instrument;

use crate::config::WebhookConfig;

/// Artificial latency for demo-mode quotes.
const DEMO_DELAY: Duration = Duration::from_millis(500);

/// Errors that can occur when requesting a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// HTTP request failed (network unreachable, DNS failure, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Webhook returned a non-success status.
    #[error("Webhook error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Webhook returned a success status but the body was not JSON.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the external pricing webhook.
#[derive(Clone)]
pub struct QuoteClient {
    mode: Mode,
}

#[derive(Clone)]
enum Mode {
    /// No webhook configured: synthesize the fixed demo quote.
    Demo,
    /// Post to the configured webhook.
    Webhook { client: reqwest::Client, url: String },
}

impl QuoteClient {
    /// Create a new quote client.
    ///
    /// `None` selects demo mode.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(webhook: Option<&WebhookConfig>) -> Result<Self, QuoteError> {
        use secrecy::ExposeSecret;

        let Some(webhook) = webhook else {
            return Ok(Self { mode: Mode::Demo });
        };

        // A hung webhook must not hold a request open forever.
        let client = reqwest::Client::builder()
            .timeout(webhook.timeout)
            .build()?;

        Ok(Self {
            mode: Mode::Webhook {
                client,
                url: webhook.url.expose_secret().to_string(),
            },
        })
    }

    /// Whether this client synthesizes demo quotes instead of calling out.
    #[must_use]
    pub const fn is_demo(&self) -> bool {
        matches!(self.mode, Mode::Demo)
    }

    /// Request a quote for the given payload.
    ///
    /// Each call is an independent attempt: no memoization, no retry, no
    /// backoff. Exactly one request per user action reaches this method
    /// because the submit control is disabled while a request is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Api`] for a non-success status (the status is
    /// embedded in the message), [`QuoteError::Http`] for transport
    /// failures, and [`QuoteError::Parse`] when a success body is not JSON.
    /// A success body with an unrecognized shape is not an error - the demo
    /// constant is substituted.
    #[instrument(skip(self, request), fields(demo = self.is_demo()))]
    pub async fn request_quote(&self, request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
        match &self.mode {
            Mode::Demo => {
                tokio::time::sleep(DEMO_DELAY).await;
                Ok(QuoteResult::demo())
            }
            Mode::Webhook { client, url } => {
                let response = client.post(url).json(request).send().await?;
                let status = response.status();

                if !status.is_success() {
                    let message = response.text().await.unwrap_or_default();
                    return Err(QuoteError::Api {
                        status: status.as_u16(),
                        message,
                    });
                }

                let body: serde_json::Value = response
                    .json()
                    .await
                    .map_err(|e| QuoteError::Parse(e.to_string()))?;

                Ok(QuoteResult::from_response(&body))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use benchtop_core::{BenchtopSpec, Colour, Customer, ImagePayload};
    use mockito::{Matcher, Server};
    use rust_decimal::Decimal;
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;

    fn webhook_client(url: String) -> QuoteClient {
        let config = WebhookConfig {
            url: SecretString::from(url),
            timeout: Duration::from_secs(5),
        };
        QuoteClient::new(Some(&config)).unwrap()
    }

    fn sample_request() -> QuoteRequest {
        QuoteRequest {
            customer: Customer {
                name: "Mia".to_string(),
                surname: "Nguyen".to_string(),
                address: "4 Harbour Rd".to_string(),
                postcode: "2095".to_string(),
                email: "mia@example.com".to_string(),
            },
            benchtop: BenchtopSpec {
                material: "Quartz".to_string(),
                thickness: "20".to_string(),
                colour: Colour::SilverSilk,
            },
            image: ImagePayload::default(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_mode_returns_fixed_quote_without_network() {
        let client = QuoteClient::new(None).unwrap();
        assert!(client.is_demo());

        let quote = client.request_quote(&sample_request()).await.unwrap();
        assert_eq!(quote, QuoteResult::demo());
    }

    #[tokio::test]
    async fn test_webhook_success_bare_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/quote")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "customer": { "name": "Mia" },
                "benchtop": { "colour": "Silver Silk" },
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "slabs": 3,
                    "subtotal": 5000,
                    "gst": 500,
                    "total": 5500,
                    "currency": "AUD"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = webhook_client(format!("{}/quote", server.url()));
        let quote = client.request_quote(&sample_request()).await.unwrap();

        assert_eq!(quote.slabs, 3);
        assert_eq!(quote.subtotal, Decimal::from(5000));
        assert_eq!(quote.gst, Decimal::from(500));
        assert_eq!(quote.total, Decimal::from(5500));
        assert_eq!(quote.currency, "AUD");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_webhook_success_wrapped_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/quote")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "quote": {
                        "slabs": 3,
                        "subtotal": 5000,
                        "gst": 500,
                        "total": 5500,
                        "currency": "AUD"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = webhook_client(format!("{}/quote", server.url()));
        let quote = client.request_quote(&sample_request()).await.unwrap();
        assert_eq!(quote.slabs, 3);
        assert_eq!(quote.total, Decimal::from(5500));
    }

    #[tokio::test]
    async fn test_webhook_unrecognized_shape_substitutes_demo() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/quote")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = webhook_client(format!("{}/quote", server.url()));
        let quote = client.request_quote(&sample_request()).await.unwrap();
        assert_eq!(quote, QuoteResult::demo());
    }

    #[tokio::test]
    async fn test_webhook_error_status_embeds_status_code() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/quote")
            .with_status(503)
            .with_body("scenario disabled")
            .create_async()
            .await;

        let client = webhook_client(format!("{}/quote", server.url()));
        let err = client.request_quote(&sample_request()).await.unwrap_err();

        match &err {
            QuoteError::Api { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "scenario disabled");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_webhook_non_json_success_body_is_parse_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/quote")
            .with_status(200)
            .with_body("<html>accepted</html>")
            .create_async()
            .await;

        let client = webhook_client(format!("{}/quote", server.url()));
        let err = client.request_quote(&sample_request()).await.unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[tokio::test]
    async fn test_webhook_hang_times_out_as_http_error() {
        // A listener that accepts the connection but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let silent = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            std::future::pending::<()>().await;
        });

        let config = WebhookConfig {
            url: SecretString::from(format!("http://{addr}/quote")),
            timeout: Duration::from_millis(200),
        };
        let client = QuoteClient::new(Some(&config)).unwrap();
        let err = client.request_quote(&sample_request()).await.unwrap_err();

        match err {
            QuoteError::Http(e) => assert!(e.is_timeout()),
            other => panic!("expected Http error, got {other:?}"),
        }
        silent.abort();
    }

    #[tokio::test]
    async fn test_webhook_transport_failure_is_http_error() {
        // Nothing is listening on this port.
        let client = webhook_client("http://127.0.0.1:1/quote".to_string());
        let err = client.request_quote(&sample_request()).await.unwrap_err();
        assert!(matches!(err, QuoteError::Http(_)));
    }
}
