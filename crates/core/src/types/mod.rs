//! Core types for the Benchtop Estimator.
//!
//! Every entity here is session-scoped: created empty when the page loads,
//! mutated freely by user input, and discarded on reload. Nothing is
//! persisted.

pub mod benchtop;
pub mod customer;
pub mod quote;

pub use benchtop::{BenchtopSpec, Colour};
pub use customer::Customer;
pub use quote::{ImagePayload, QuoteRequest, QuoteResult};
