//! External services and owned resources.
//!
//! - [`quote`] - Pricing webhook client (with the demo fallback)
//! - [`preview`] - In-memory store for uploaded kitchen photo previews

pub mod preview;
pub mod quote;

pub use preview::{PreviewStore, StoredPreview};
pub use quote::{QuoteClient, QuoteError};
