//! Quote request payload and quote result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::benchtop::BenchtopSpec;
use super::customer::Customer;

/// Image reference forwarded to the pricing webhook.
///
/// Only a remote URL travels in the payload; a locally uploaded preview
/// stays on the server and is never sent upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// `None` serializes as `null`, matching an empty URL field.
    pub url: Option<String>,
}

/// The exact JSON body posted to the pricing webhook:
/// `{customer: {...}, benchtop: {...}, image: {url}}`.
///
/// Built fresh from the current form values at submit time - nothing else
/// mutates them concurrently, so no snapshotting is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub customer: Customer,
    pub benchtop: BenchtopSpec,
    pub image: ImagePayload,
}

/// A price quote as returned by the pricing webhook (or the demo fallback).
///
/// `total = subtotal + gst` is expected but accepted verbatim - this layer
/// displays whatever the pricing source produced and never recomputes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Number of stone slabs required.
    pub slabs: u32,
    /// Fabrication and install cost, excluding GST.
    pub subtotal: Decimal,
    /// Goods and services tax.
    pub gst: Decimal,
    /// Total including GST.
    pub total: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl QuoteResult {
    /// The fixed demo quote used when no webhook is configured, and
    /// substituted when a webhook response has no recognizable shape.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            slabs: 2,
            subtotal: Decimal::from(3450),
            gst: Decimal::from(345),
            total: Decimal::from(3795),
            currency: "AUD".to_string(),
        }
    }

    /// Decode a webhook response body tolerantly.
    ///
    /// Decision order is fixed and exhaustive:
    /// 1. the body itself is a quote (bare match),
    /// 2. the body wraps a quote under a `quote` field,
    /// 3. otherwise the demo constant is substituted.
    ///
    /// A partial bare match (say, missing `gst`) is not zero-filled; it
    /// falls through to the wrapper check and then to the fallback. A
    /// shape mismatch is deliberately not an error.
    #[must_use]
    pub fn from_response(body: &Value) -> Self {
        if let Ok(quote) = serde_json::from_value::<Self>(body.clone()) {
            return quote;
        }
        if let Some(wrapped) = body.get("quote")
            && let Ok(quote) = serde_json::from_value::<Self>(wrapped.clone())
        {
            return quote;
        }
        Self::demo()
    }
}
